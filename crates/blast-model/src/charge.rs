// ─────────────────────────────────────────────────────────────────────
// Blast Ops Core — Drillhole Charge Design
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-drillhole charge construction.

use std::f64::consts::PI;

use blast_types::error::{BlastError, BlastResult};
use serde::Serialize;

/// Charge geometry and mass of a single drillhole.
#[derive(Debug, Clone, Serialize)]
pub struct DrillholeCharge {
    /// Drilled length: bench height plus subdrilling [m].
    pub length_m: f64,
    /// Charged column length: drilled length minus stemming [m].
    pub charge_length_m: f64,
    /// Explosive mass in the hole [kg].
    pub charge_mass_kg: f64,
    /// Charge mass over the hole's burden-spacing-height cell [kg/m³].
    pub specific_charge_kg_per_m3: f64,
}

/// Design the charge of one drillhole.
///
/// `mass = rho * L_c * d² * pi / 4 / 1000` with the diameter in mm and the
/// explosive density in g/dm³ (≡ t/m³), giving kilograms.
///
/// A stemming column longer than the drilled hole is a configuration error,
/// not a zero-length charge.
pub fn design_charge(
    burden_m: f64,
    spacing_m: f64,
    bench_height_m: f64,
    subdrilling_m: f64,
    stemming_m: f64,
    diameter_mm: f64,
    explosive_density: f64,
) -> BlastResult<DrillholeCharge> {
    let checked = [
        ("burden", burden_m),
        ("spacing", spacing_m),
        ("bench height", bench_height_m),
        ("drillhole diameter", diameter_mm),
    ];
    for (name, value) in checked {
        if value <= 0.0 {
            return Err(BlastError::InvalidGeometry { name, value });
        }
    }

    let length_m = subdrilling_m + bench_height_m;
    let charge_length_m = length_m - stemming_m;
    if charge_length_m < 0.0 {
        return Err(BlastError::InvalidChargeDesign {
            stemming_m,
            hole_length_m: length_m,
        });
    }

    let charge_mass_kg =
        explosive_density * charge_length_m * diameter_mm * diameter_mm * PI / 4.0 / 1000.0;
    let specific_charge_kg_per_m3 = charge_mass_kg / (burden_m * spacing_m * bench_height_m);

    Ok(DrillholeCharge {
        length_m,
        charge_length_m,
        charge_mass_kg,
        specific_charge_kg_per_m3,
    })
}
