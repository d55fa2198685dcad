// ─────────────────────────────────────────────────────────────────────
// Blast Ops Core — Equipment Productivity
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Loader and truck productivity as functions of the predicted
//! fragmentation.

use blast_types::config::BlastConfig;
use blast_types::constants::{MINUTES_PER_HOUR, SECONDS_PER_HOUR};
use blast_types::error::{BlastError, BlastResult};
use serde::Serialize;

/// Productivity figures for the loading and hauling fleet.
#[derive(Debug, Clone, Serialize)]
pub struct EquipmentRates {
    /// Bucket fill factor at the predicted X50 [-].
    pub bucket_fill_factor: f64,
    /// Loader output in bank volume [m³/h].
    pub loader_hourly_production_m3: f64,
    /// Payload loaded per truck trip [t].
    pub truck_trip_mass_t: f64,
    /// Truck output [t/h].
    pub truck_hourly_production_t: f64,
}

/// Bucket fill factor from the median fragment size.
///
/// Linear fit `-0.0022 * (x50/10) + 0.8833`; the inner `/10` is kept from
/// the source correlation, whose coefficient is calibrated in cm.
pub fn bucket_fill_factor(x50_mm: f64) -> f64 {
    -0.0022 * x50_mm / 10.0 + 0.8833
}

/// Loader production in bank volume [m³/h].
pub fn loader_hourly_production(
    cycle_s: f64,
    fill_factor: f64,
    bucket_volume_m3: f64,
    swell_factor: f64,
) -> BlastResult<f64> {
    if cycle_s <= 0.0 {
        return Err(BlastError::NonPositiveRate {
            name: "loader cycle time",
            value: cycle_s,
        });
    }
    if swell_factor <= 0.0 {
        return Err(BlastError::NonPositiveRate {
            name: "swell factor",
            value: swell_factor,
        });
    }
    Ok(SECONDS_PER_HOUR / cycle_s * fill_factor * bucket_volume_m3 / swell_factor)
}

/// Mass loaded onto one truck by whole bucket passes [t].
///
/// Buckets are dumped until one more pass would exceed the payload; partial
/// passes are not taken. All inputs must be positive: the per-pass
/// increment is the loop's termination guarantee.
pub fn truck_trip_mass(
    bucket_volume_m3: f64,
    density_t_per_m3: f64,
    swell_factor: f64,
    fill_factor: f64,
    payload_t: f64,
) -> BlastResult<f64> {
    let checked = [
        ("bucket volume", bucket_volume_m3),
        ("rock density", density_t_per_m3),
        ("swell factor", swell_factor),
        ("bucket fill factor", fill_factor),
        ("truck payload", payload_t),
    ];
    for (name, value) in checked {
        if value <= 0.0 {
            return Err(BlastError::NonPositiveLoadingInput { name, value });
        }
    }

    let pass_t = bucket_volume_m3 * density_t_per_m3 / swell_factor * fill_factor;
    let mut trip_t = 0.0;
    while trip_t + pass_t <= payload_t {
        trip_t += pass_t;
    }
    Ok(trip_t)
}

/// Truck production [t/h] over the haul cycle.
pub fn truck_hourly_production(trip_mass_t: f64, haul_cycle_min: f64) -> BlastResult<f64> {
    if haul_cycle_min <= 0.0 {
        return Err(BlastError::NonPositiveRate {
            name: "truck haul cycle",
            value: haul_cycle_min,
        });
    }
    Ok(trip_mass_t * (MINUTES_PER_HOUR / haul_cycle_min))
}

/// Derive the full fleet productivity for a predicted X50.
///
/// A fill factor above unity means the correlation has left its calibrated
/// range; that is flagged but not fatal. A non-positive fill factor would
/// stall the loading loop and is rejected outright.
pub fn equipment_rates(x50_mm: f64, config: &BlastConfig) -> BlastResult<EquipmentRates> {
    let fill = bucket_fill_factor(x50_mm);
    if fill <= 0.0 {
        return Err(BlastError::NonPositiveLoadingInput {
            name: "bucket fill factor",
            value: fill,
        });
    }
    if fill > 1.0 {
        tracing::warn!(
            fill_factor = fill,
            x50_mm,
            "bucket fill factor above unity, outside the correlation's range"
        );
    }

    let loader_hourly_production_m3 = loader_hourly_production(
        config.loader.cycle_s,
        fill,
        config.loader.bucket_volume_m3,
        config.rockmass.swell_factor,
    )?;
    let truck_trip_mass_t = truck_trip_mass(
        config.loader.bucket_volume_m3,
        config.rockmass.density_t_per_m3,
        config.rockmass.swell_factor,
        fill,
        config.truck.payload_t,
    )?;
    let truck_hourly_production_t =
        truck_hourly_production(truck_trip_mass_t, config.truck.haul_cycle_min)?;

    Ok(EquipmentRates {
        bucket_fill_factor: fill,
        loader_hourly_production_m3,
        truck_trip_mass_t,
        truck_hourly_production_t,
    })
}
