// ─────────────────────────────────────────────────────────────────────
// Blast Ops Core — Presentation Series
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Numeric series consumed by the chart collaborators: the fragmentation
//! CDF sampled past the crusher feed size, and the Pareto-ordered cost
//! breakdown.

use blast_model::fragmentation::{passing_curve, Fragmentation};
use blast_types::error::BlastResult;
use ndarray::Array1;
use serde::Serialize;

use crate::costs::CostBreakdown;

/// Sampling step of the CDF series [mm].
const CURVE_STEP_MM: f64 = 10.0;

/// Margin sampled past the crusher feed size [mm].
const CURVE_PAD_MM: f64 = 1000.0;

/// One bar of the cost Pareto chart.
#[derive(Debug, Clone, Serialize)]
pub struct ParetoEntry {
    /// Activity label.
    pub label: &'static str,
    /// Activity cost [kEUR].
    pub costs_keur: f64,
    /// Running share of the total, largest activity first [%].
    pub cumulative_percent: f64,
}

/// Cost activities sorted descending with cumulative percentages.
pub fn pareto_breakdown(costs: &CostBreakdown) -> Vec<ParetoEntry> {
    let mut items = [
        ("Drilling", costs.drilling.costs_keur),
        ("Blasting", costs.blasting.costs_keur),
        ("Loading", costs.loading.costs_keur),
        ("Hauling", costs.hauling.costs_keur),
    ];
    items.sort_by(|a, b| b.1.total_cmp(&a.1));

    let total: f64 = items.iter().map(|(_, c)| c).sum();
    let mut running = 0.0;
    items
        .iter()
        .map(|&(label, costs_keur)| {
            running += costs_keur;
            ParetoEntry {
                label,
                costs_keur,
                cumulative_percent: if total > 0.0 {
                    running / total * 100.0
                } else {
                    0.0
                },
            }
        })
        .collect()
}

/// Fragmentation CDF series from zero past the crusher feed size.
///
/// Returns the size grid [mm] and passing percentages the curve consumer
/// plots, matching the feed-size marker convention.
pub fn fragmentation_series(
    fragmentation: &Fragmentation,
    crusher_feed_mm: f64,
) -> BlastResult<(Array1<f64>, Array1<f64>)> {
    passing_curve(
        fragmentation.uniformity_index,
        fragmentation.x50_mm,
        crusher_feed_mm + CURVE_PAD_MM,
        CURVE_STEP_MM,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costs::ActivityCost;

    fn breakdown(d: f64, b: f64, l: f64, h: f64) -> CostBreakdown {
        CostBreakdown::new(
            ActivityCost { costs_keur: d, time_hours: Some(1.0) },
            ActivityCost { costs_keur: b, time_hours: None },
            ActivityCost { costs_keur: l, time_hours: Some(1.0) },
            ActivityCost { costs_keur: h, time_hours: Some(1.0) },
        )
    }

    #[test]
    fn test_pareto_is_sorted_descending() {
        let entries = pareto_breakdown(&breakdown(5.1, 50.9, 8.4, 49.9));
        assert_eq!(entries[0].label, "Blasting");
        assert_eq!(entries[1].label, "Hauling");
        assert_eq!(entries[2].label, "Loading");
        assert_eq!(entries[3].label, "Drilling");
        for pair in entries.windows(2) {
            assert!(pair[0].costs_keur >= pair[1].costs_keur);
        }
    }

    #[test]
    fn test_pareto_cumulative_reaches_100() {
        let entries = pareto_breakdown(&breakdown(5.1, 50.9, 8.4, 49.9));
        assert!((entries.last().unwrap().cumulative_percent - 100.0).abs() < 1e-9);
        for pair in entries.windows(2) {
            assert!(pair[0].cumulative_percent <= pair[1].cumulative_percent);
        }
    }

    #[test]
    fn test_fragmentation_series_extent() {
        let frag = Fragmentation {
            x50_mm: 295.0,
            uniformity_index: 1.03,
        };
        let (sizes, passing) = fragmentation_series(&frag, 1000.0).unwrap();
        // 0..=2000 mm at 10 mm steps.
        assert_eq!(sizes.len(), 201);
        assert_eq!(passing.len(), 201);
        assert!((sizes[sizes.len() - 1] - 2000.0).abs() < 1e-9);
        assert!(passing[passing.len() - 1] > 99.0);
    }
}
