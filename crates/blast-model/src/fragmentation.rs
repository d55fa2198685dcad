// ─────────────────────────────────────────────────────────────────────
// Blast Ops Core — Kuz-Ram Fragmentation Model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Kuz-Ram fragmentation prediction: Cunningham's X50 law, both uniformity
//! index formulas, and the Rosin-Rammler cumulative passing distribution.

use blast_types::constants::{CUNNINGHAM_REF_RWS, ROSIN_RAMMLER_MEDIAN};
use blast_types::design::DrillPattern;
use blast_types::error::{BlastError, BlastResult};
use ndarray::Array1;
use serde::Serialize;

/// Predicted fragment-size distribution parameters for one blast.
#[derive(Debug, Clone, Serialize)]
pub struct Fragmentation {
    /// Median fragment size: 50 % of mass passes this screen [mm].
    pub x50_mm: f64,
    /// Rosin-Rammler shape parameter [-].
    pub uniformity_index: f64,
}

impl Fragmentation {
    /// Cumulative mass percent passing a screen of `size_mm`.
    pub fn passing_percent(&self, size_mm: f64) -> BlastResult<f64> {
        passing_percent(self.uniformity_index, self.x50_mm, size_mm)
    }

    /// Mass percent retained above a screen of `size_mm`.
    pub fn oversize_percent(&self, size_mm: f64) -> BlastResult<f64> {
        Ok(100.0 - self.passing_percent(size_mm)?)
    }
}

/// Median fragment size X50 [mm] after Cunningham.
///
/// `x50 = 10 * A * q^(-0.8) * Q^(1/6) * (115/rws)^(19/30)`
/// with charge mass `Q` in kg and specific charge `q` in kg/m³.
pub fn median_size_x50(
    charge_mass_kg: f64,
    specific_charge_kg_per_m3: f64,
    rock_factor: f64,
    explosive_rws: f64,
) -> f64 {
    10.0 * rock_factor
        * specific_charge_kg_per_m3.powf(-0.8)
        * charge_mass_kg.powf(1.0 / 6.0)
        * (CUNNINGHAM_REF_RWS / explosive_rws).powf(19.0 / 30.0)
}

/// Uniformity index, Cunningham's original formula.
///
/// `n = (2.2 - 14 b/d) * sqrt(0.5 + 0.5 s/b) * (1 - w/b) * (L_c/H) * p`.
pub fn uniformity_index_legacy(
    burden_m: f64,
    spacing_m: f64,
    diameter_mm: f64,
    charge_length_m: f64,
    deviation_m: f64,
    bench_height_m: f64,
    pattern: DrillPattern,
) -> f64 {
    (2.2 - 14.0 * burden_m / diameter_mm)
        * (0.5 + 0.5 * spacing_m / burden_m).sqrt()
        * (1.0 - deviation_m / burden_m)
        * (charge_length_m / bench_height_m)
        * pattern.legacy_coefficient()
}

/// Uniformity index, Cunningham's updated formula.
///
/// `n = sqrt(2 - 30 b/d) * sqrt(0.5 + 0.5 s/b) * (1 - w/b) * (L_c/H)^0.3 * c_n`.
///
/// The square-root arguments go negative for over-tight burden/diameter or
/// degenerate spacing/burden ratios; those are reported as domain errors
/// rather than letting a NaN run through the distribution.
pub fn uniformity_index_modern(
    burden_m: f64,
    spacing_m: f64,
    diameter_mm: f64,
    charge_length_m: f64,
    deviation_m: f64,
    bench_height_m: f64,
    pattern_coef: f64,
) -> BlastResult<f64> {
    let diameter_term = 2.0 - 30.0 * burden_m / diameter_mm;
    if diameter_term < 0.0 {
        return Err(BlastError::InvalidUniformity(format!(
            "burden {burden_m} m too large for {diameter_mm} mm holes: 30*b/d exceeds 2"
        )));
    }
    let spacing_term = 0.5 + 0.5 * spacing_m / burden_m;
    if spacing_term < 0.0 {
        return Err(BlastError::InvalidUniformity(format!(
            "spacing/burden ratio {} below -1",
            spacing_m / burden_m
        )));
    }

    Ok(diameter_term.sqrt()
        * spacing_term.sqrt()
        * (1.0 - deviation_m / burden_m)
        * (charge_length_m / bench_height_m).powf(0.3)
        * pattern_coef)
}

/// Rosin-Rammler cumulative passing percent at `size_mm`.
///
/// `P = 100 * (1 - exp(-(x/x_c)^n))` with `x_c = x50 / 0.693^(1/n)`.
pub fn passing_percent(n: f64, x50_mm: f64, size_mm: f64) -> BlastResult<f64> {
    if n <= 0.0 {
        return Err(BlastError::InvalidUniformity(format!(
            "uniformity index must be positive, got {n}"
        )));
    }
    if x50_mm <= 0.0 {
        return Err(BlastError::InvalidUniformity(format!(
            "median size must be positive, got {x50_mm} mm"
        )));
    }
    if size_mm < 0.0 {
        return Err(BlastError::InvalidUniformity(format!(
            "fragment size must be non-negative, got {size_mm} mm"
        )));
    }

    let x_c = x50_mm / ROSIN_RAMMLER_MEDIAN.powf(1.0 / n);
    Ok(100.0 * (1.0 - (-(size_mm / x_c).powf(n)).exp()))
}

/// Sample the passing curve on `[0, max_size_mm]` at `step_mm` intervals.
///
/// Returns the size grid and the matching passing percentages, ready for a
/// CDF plot consumer.
pub fn passing_curve(
    n: f64,
    x50_mm: f64,
    max_size_mm: f64,
    step_mm: f64,
) -> BlastResult<(Array1<f64>, Array1<f64>)> {
    if step_mm <= 0.0 {
        return Err(BlastError::NonPositiveLoadingInput {
            name: "curve step",
            value: step_mm,
        });
    }
    if max_size_mm < 0.0 {
        return Err(BlastError::InvalidUniformity(format!(
            "curve extent must be non-negative, got {max_size_mm} mm"
        )));
    }

    let count = (max_size_mm / step_mm).floor() as usize + 1;
    let sizes = Array1::from_iter((0..count).map(|i| i as f64 * step_mm));
    let mut passing = Array1::zeros(count);
    for (i, &size) in sizes.iter().enumerate() {
        passing[i] = passing_percent(n, x50_mm, size)?;
    }
    Ok((sizes, passing))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference charge: 143*pi kg at 143*pi/630 kg/m³, rock factor 8.19,
    // RWS 116.
    const REF_MASS_KG: f64 = 449.24773;
    const REF_SPEC_CHARGE: f64 = 0.71309163;

    #[test]
    fn test_reference_x50() {
        let x50 = median_size_x50(REF_MASS_KG, REF_SPEC_CHARGE, 8.19, 116.0);
        assert!(
            (290.0..=300.0).contains(&x50),
            "Expected X50 near 295 mm, got {x50}"
        );
    }

    #[test]
    fn test_x50_decreases_with_specific_charge() {
        let coarse = median_size_x50(REF_MASS_KG, 0.5, 8.19, 116.0);
        let fine = median_size_x50(REF_MASS_KG, 1.0, 8.19, 116.0);
        assert!(fine < coarse, "More explosive per m³ must fragment finer");
    }

    #[test]
    fn test_legacy_uniformity_pattern_split() {
        let staggered =
            uniformity_index_legacy(6.0, 7.0, 200.0, 13.0, 0.1, 15.0, DrillPattern::Staggered);
        let regular =
            uniformity_index_legacy(6.0, 7.0, 200.0, 13.0, 0.1, 15.0, DrillPattern::Regular);
        assert!((staggered / regular - 1.1).abs() < 1e-12);
        assert!(
            (1.5..=1.7).contains(&regular),
            "Expected regular-grid n near 1.58, got {regular}"
        );
    }

    #[test]
    fn test_modern_uniformity_reference() {
        let n = uniformity_index_modern(6.0, 7.0, 200.0, 13.0, 0.1, 15.0, 1.0).unwrap();
        assert!(
            (1.0..=1.06).contains(&n),
            "Expected n near 1.03, got {n}"
        );
    }

    #[test]
    fn test_modern_uniformity_overtight_burden() {
        // 30*b/d = 30*15/200 = 2.25 > 2.
        let err = uniformity_index_modern(15.0, 7.0, 200.0, 13.0, 0.1, 15.0, 1.0).unwrap_err();
        assert!(matches!(err, BlastError::InvalidUniformity(_)));
    }

    #[test]
    fn test_passing_at_characteristic_size() {
        // P(x_c) = 100 * (1 - 1/e) for any valid n, x50.
        let n = 1.3;
        let x50 = 250.0;
        let x_c = x50 / ROSIN_RAMMLER_MEDIAN.powf(1.0 / n);
        let p = passing_percent(n, x50, x_c).unwrap();
        assert!(
            (p - 100.0 * (1.0 - (-1.0f64).exp())).abs() < 1e-9,
            "Expected 63.2 % at x_c, got {p}"
        );
    }

    #[test]
    fn test_passing_at_median() {
        // P(x50) recovers ~50 % (exact up to the 0.693 rounding).
        let p = passing_percent(1.1, 300.0, 300.0).unwrap();
        assert!((p - 50.0).abs() < 0.05, "Expected ~50 % at X50, got {p}");
    }

    #[test]
    fn test_passing_zero_size() {
        assert_eq!(passing_percent(1.1, 300.0, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_passing_nonpositive_n_rejected() {
        assert!(matches!(
            passing_percent(0.0, 300.0, 100.0),
            Err(BlastError::InvalidUniformity(_))
        ));
        assert!(matches!(
            passing_percent(-1.2, 300.0, 100.0),
            Err(BlastError::InvalidUniformity(_))
        ));
    }

    #[test]
    fn test_curve_sampling() {
        let (sizes, passing) = passing_curve(1.03, 295.0, 2000.0, 10.0).unwrap();
        assert_eq!(sizes.len(), 201);
        assert_eq!(passing.len(), 201);
        assert_eq!(sizes[0], 0.0);
        assert_eq!(passing[0], 0.0);
        assert!((sizes[200] - 2000.0).abs() < 1e-9);
        for i in 1..passing.len() {
            assert!(
                passing[i] >= passing[i - 1],
                "Passing curve must be non-decreasing at index {i}"
            );
        }
    }

    #[test]
    fn test_curve_zero_step_rejected() {
        assert!(passing_curve(1.03, 295.0, 2000.0, 0.0).is_err());
    }
}
