// ─────────────────────────────────────────────────────────────────────
// Blast Ops Core — Panel Aggregation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Panel-level totals from one drillhole's charge design.

use blast_types::constants::EDGE_SETBACK_M;
use blast_types::error::{BlastError, BlastResult};
use serde::Serialize;

/// Tangent magnitudes below this count as an undefined slope cotangent.
const TAN_EPS: f64 = 1e-9;

/// Hole counts and totals for the whole blast panel.
#[derive(Debug, Clone, Serialize)]
pub struct PanelTotals {
    /// Drillhole rows across the panel width.
    pub rows: u32,
    /// Drillholes per row along the panel length.
    pub holes_per_row: u32,
    /// Total drillhole count.
    pub total_holes: u32,
    /// Total drilled length [m].
    pub total_drill_length_m: f64,
    /// Blasted rock volume [m³].
    pub total_rock_volume_m3: f64,
    /// Total explosive mass over the panel [kg].
    pub total_explosive_mass_kg: f64,
    /// Panel powder factor [kg/m³].
    pub powder_factor_kg_per_m3: f64,
}

/// Aggregate one hole's design over the panel.
///
/// Row packing sets the first row [`EDGE_SETBACK_M`] inside the crest, then
/// floor-divides the remaining width by the burden and adds the bounding row;
/// holes per row pack the same way along the length.
///
/// The rock volume carries the slope term as `1/tan(angle)` added to the
/// width-length product before scaling by bench height. The term is kept in
/// that inherited form; it is not a full truncated-wedge correction.
pub fn aggregate_panel(
    bench_height_m: f64,
    width_m: f64,
    length_m: f64,
    slope_angle_deg: f64,
    burden_m: f64,
    spacing_m: f64,
    hole_length_m: f64,
    hole_charge_mass_kg: f64,
) -> BlastResult<PanelTotals> {
    let checked = [
        ("burden", burden_m),
        ("spacing", spacing_m),
        ("bench height", bench_height_m),
        ("panel width", width_m),
        ("panel length", length_m),
    ];
    for (name, value) in checked {
        if value <= 0.0 {
            return Err(BlastError::InvalidGeometry { name, value });
        }
    }

    let tan_slope = slope_angle_deg.to_radians().tan();
    if tan_slope.abs() < TAN_EPS {
        return Err(BlastError::UndefinedSlope {
            angle_deg: slope_angle_deg,
        });
    }

    // Floor packing, with the bounding hole on each axis. A panel narrower
    // than the setback yields zero rows rather than a negative count.
    let rows = (((width_m - EDGE_SETBACK_M) / burden_m).floor() + 1.0).max(0.0) as u32;
    let holes_per_row = ((length_m / spacing_m).floor() + 1.0) as u32;
    let total_holes = rows * holes_per_row;

    let total_drill_length_m = f64::from(total_holes) * hole_length_m;
    let total_rock_volume_m3 = bench_height_m * (width_m * length_m + 1.0 / tan_slope);
    let total_explosive_mass_kg = hole_charge_mass_kg * f64::from(total_holes);
    let powder_factor_kg_per_m3 = total_explosive_mass_kg / total_rock_volume_m3;

    Ok(PanelTotals {
        rows,
        holes_per_row,
        total_holes,
        total_drill_length_m,
        total_rock_volume_m3,
        total_explosive_mass_kg,
        powder_factor_kg_per_m3,
    })
}
