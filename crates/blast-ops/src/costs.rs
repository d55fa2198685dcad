// ─────────────────────────────────────────────────────────────────────
// Blast Ops Core — Activity Cost Model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-activity operating cost and time for the drill-blast-load-haul
//! cycle.

use blast_types::constants::EUR_PER_KEUR;
use blast_types::error::{BlastError, BlastResult};
use serde::Serialize;

/// Cost and time of one mining activity.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityCost {
    /// Operating cost [kEUR].
    pub costs_keur: f64,
    /// Activity duration [h]; `None` where time is not tracked as a
    /// scheduling resource (blasting).
    pub time_hours: Option<f64>,
}

/// Cost breakdown over the four cycle activities.
#[derive(Debug, Clone, Serialize)]
pub struct CostBreakdown {
    pub drilling: ActivityCost,
    pub blasting: ActivityCost,
    pub loading: ActivityCost,
    pub hauling: ActivityCost,
    /// Sum of the four activity costs [kEUR].
    pub total_costs_keur: f64,
}

impl CostBreakdown {
    pub fn new(
        drilling: ActivityCost,
        blasting: ActivityCost,
        loading: ActivityCost,
        hauling: ActivityCost,
    ) -> Self {
        let total_costs_keur =
            drilling.costs_keur + blasting.costs_keur + loading.costs_keur + hauling.costs_keur;
        CostBreakdown {
            drilling,
            blasting,
            loading,
            hauling,
            total_costs_keur,
        }
    }
}

/// Drilling cost over the panel's total drilled length.
pub fn drilling_cost(
    total_drill_length_m: f64,
    rate_m_per_h: f64,
    hourly_cost_eur: f64,
) -> BlastResult<ActivityCost> {
    if rate_m_per_h <= 0.0 {
        return Err(BlastError::NonPositiveRate {
            name: "drill rate",
            value: rate_m_per_h,
        });
    }
    Ok(ActivityCost {
        costs_keur: total_drill_length_m * hourly_cost_eur / rate_m_per_h / EUR_PER_KEUR,
        time_hours: Some(total_drill_length_m / rate_m_per_h),
    })
}

/// Blasting cost: explosive consumption only, time untracked.
pub fn blasting_cost(total_explosive_mass_kg: f64, price_eur_per_kg: f64) -> ActivityCost {
    ActivityCost {
        costs_keur: total_explosive_mass_kg * price_eur_per_kg / EUR_PER_KEUR,
        time_hours: None,
    }
}

/// Loading cost over the blasted bank volume.
pub fn loading_cost(
    total_volume_m3: f64,
    hourly_production_m3: f64,
    hourly_cost_eur: f64,
) -> BlastResult<ActivityCost> {
    if hourly_production_m3 <= 0.0 {
        return Err(BlastError::NonPositiveRate {
            name: "loader production",
            value: hourly_production_m3,
        });
    }
    Ok(ActivityCost {
        costs_keur: total_volume_m3 * hourly_cost_eur / hourly_production_m3 / EUR_PER_KEUR,
        time_hours: Some(total_volume_m3 / hourly_production_m3),
    })
}

/// Hauling cost over the blasted tonnage.
pub fn hauling_cost(
    total_volume_m3: f64,
    density_t_per_m3: f64,
    hourly_production_t: f64,
    hourly_cost_eur: f64,
) -> BlastResult<ActivityCost> {
    if hourly_production_t <= 0.0 {
        return Err(BlastError::NonPositiveRate {
            name: "truck production",
            value: hourly_production_t,
        });
    }
    let tonnage = total_volume_m3 * density_t_per_m3;
    Ok(ActivityCost {
        costs_keur: tonnage * hourly_cost_eur / hourly_production_t / EUR_PER_KEUR,
        time_hours: Some(tonnage / hourly_production_t),
    })
}
