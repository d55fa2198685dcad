// ─────────────────────────────────────────────────────────────────────
// Blast Ops Core — Design Scanner
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Monte Carlo scan of the blast-design space.
//!
//! Samples burden/spacing/subdrilling/stemming within given ranges,
//! evaluates each candidate through the mining-cycle pipeline, and finds
//! the cost-versus-oversize Pareto frontier: cheaper blasts fragment
//! coarser, and the frontier shows what each saved kEUR costs in oversize.

use blast_types::design::BlastDesign;
use rand::Rng;

use crate::pipeline::{MiningCycleModel, MiningCycleReport};

/// Sampling ranges for the four design variables [m].
#[derive(Debug, Clone)]
pub struct ScanRanges {
    pub burden_m: (f64, f64),
    pub spacing_m: (f64, f64),
    pub subdrilling_m: (f64, f64),
    pub stemming_m: (f64, f64),
}

impl ScanRanges {
    /// Ranges bracketing the reference design.
    pub fn reference() -> Self {
        ScanRanges {
            burden_m: (4.0, 9.0),
            spacing_m: (5.0, 11.0),
            subdrilling_m: (1.0, 3.0),
            stemming_m: (2.5, 6.0),
        }
    }
}

/// One evaluated design point of the scan.
#[derive(Debug, Clone)]
pub struct ScanPoint {
    pub design: BlastDesign,
    /// Total cycle cost [kEUR].
    pub total_costs_keur: f64,
    /// Oversize at the reference screen [%].
    pub oversize_percent: f64,
    /// Median fragment size [mm].
    pub x50_mm: f64,
}

impl ScanPoint {
    fn from_report(report: &MiningCycleReport) -> Self {
        ScanPoint {
            design: report.design,
            total_costs_keur: report.costs.total_costs_keur,
            oversize_percent: report.oversize_percent,
            x50_mm: report.fragmentation.x50_mm,
        }
    }
}

/// Run a Monte Carlo design scan with rejection sampling.
///
/// Candidates the pipeline rejects (overlong stemming, uniformity domain
/// violations) are skipped; sampling stops after `n_samples` accepted
/// points or ten times as many attempts.
pub fn run_scan(model: &MiningCycleModel, ranges: &ScanRanges, n_samples: usize) -> Vec<ScanPoint> {
    let mut rng = rand::thread_rng();
    let mut points = Vec::with_capacity(n_samples);

    let mut attempts = 0;
    while points.len() < n_samples && attempts < n_samples * 10 {
        attempts += 1;

        let design = BlastDesign::new(
            rng.gen_range(ranges.burden_m.0..ranges.burden_m.1),
            rng.gen_range(ranges.spacing_m.0..ranges.spacing_m.1),
            rng.gen_range(ranges.subdrilling_m.0..ranges.subdrilling_m.1),
            rng.gen_range(ranges.stemming_m.0..ranges.stemming_m.1),
        );

        match model.evaluate(&design) {
            Ok(report) => points.push(ScanPoint::from_report(&report)),
            Err(err) => {
                tracing::debug!(%err, ?design, "design rejected");
            }
        }
    }

    points
}

/// Extract the cost-versus-oversize Pareto frontier.
///
/// Frontier points: no other scanned design is both cheaper and finer.
pub fn find_cost_frontier(points: &[ScanPoint]) -> Vec<ScanPoint> {
    let mut frontier: Vec<ScanPoint> = points
        .iter()
        .filter(|p| {
            !points.iter().any(|other| {
                other.total_costs_keur < p.total_costs_keur
                    && other.oversize_percent < p.oversize_percent
            })
        })
        .cloned()
        .collect();
    frontier.sort_by(|a, b| a.total_costs_keur.total_cmp(&b.total_costs_keur));
    frontier
}
