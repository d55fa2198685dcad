// ─────────────────────────────────────────────────────────────────────
// Blast Ops Core — Blast Design Variables
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! The four free variables of a blast design.

use serde::{Deserialize, Serialize};

/// One candidate blast design.
///
/// Everything else about the operation is fixed in [`crate::config::BlastConfig`];
/// these four lengths are what the engineer actually varies between blasts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlastDesign {
    /// Burden: hole row to nearest free face [m].
    pub burden_m: f64,
    /// Spacing between holes in a row [m].
    pub spacing_m: f64,
    /// Subdrilling below floor grade [m].
    pub subdrilling_m: f64,
    /// Inert stemming column at the collar [m].
    pub stemming_m: f64,
}

impl BlastDesign {
    pub fn new(burden_m: f64, spacing_m: f64, subdrilling_m: f64, stemming_m: f64) -> Self {
        BlastDesign {
            burden_m,
            spacing_m,
            subdrilling_m,
            stemming_m,
        }
    }
}

/// Drillhole layout pattern.
///
/// A closed set: unknown pattern labels fail at deserialization instead of
/// silently borrowing the regular-grid coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrillPattern {
    /// Equilateral / offset rows.
    Staggered,
    /// Square or rectangular grid.
    Regular,
}

impl DrillPattern {
    /// Pattern coefficient of Cunningham's original uniformity formula.
    pub fn legacy_coefficient(self) -> f64 {
        match self {
            DrillPattern::Staggered => 1.1,
            DrillPattern::Regular => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_coefficients() {
        assert_eq!(DrillPattern::Staggered.legacy_coefficient(), 1.1);
        assert_eq!(DrillPattern::Regular.legacy_coefficient(), 1.0);
    }

    #[test]
    fn test_unknown_pattern_label_rejected() {
        let parsed: Result<DrillPattern, _> = serde_json::from_str("\"hexagonal\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_pattern_labels_lowercase() {
        let parsed: DrillPattern = serde_json::from_str("\"staggered\"").unwrap();
        assert_eq!(parsed, DrillPattern::Staggered);
    }
}
