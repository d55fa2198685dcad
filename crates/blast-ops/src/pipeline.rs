// ─────────────────────────────────────────────────────────────────────
// Blast Ops Core — Mining Cycle Pipeline
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! End-to-end mining-cycle evaluation: charge design through total cost
//! for one candidate blast design.

use blast_model::charge::{design_charge, DrillholeCharge};
use blast_model::fragmentation::{
    median_size_x50, uniformity_index_modern, Fragmentation,
};
use blast_model::panel::{aggregate_panel, PanelTotals};
use blast_types::config::BlastConfig;
use blast_types::constants::OVERSIZE_REF_SIZE_MM;
use blast_types::design::BlastDesign;
use blast_types::error::BlastResult;
use serde::Serialize;

use crate::costs::{
    blasting_cost, drilling_cost, hauling_cost, loading_cost, CostBreakdown,
};
use crate::equipment::{equipment_rates, EquipmentRates};

/// Consolidated result of one mining-cycle evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct MiningCycleReport {
    /// The evaluated design variables.
    pub design: BlastDesign,
    /// Per-hole charge construction.
    pub charge: DrillholeCharge,
    /// Panel-wide counts and totals.
    pub panel: PanelTotals,
    /// Predicted fragment-size distribution.
    pub fragmentation: Fragmentation,
    /// Mass percent above the oversize reference screen [%].
    pub oversize_percent: f64,
    /// Fleet productivity at the predicted fragmentation.
    pub equipment: EquipmentRates,
    /// Activity costs and their total.
    pub costs: CostBreakdown,
}

impl MiningCycleReport {
    /// Descriptive label/value pairs for the presentation boundary.
    ///
    /// Counts are widened to `f64` so the whole record is one numeric
    /// mapping.
    pub fn labeled(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Burden, m", self.design.burden_m),
            ("Spacing, m", self.design.spacing_m),
            ("Stemming, m", self.design.stemming_m),
            ("Subdrilling, m", self.design.subdrilling_m),
            ("DH length, m", self.charge.length_m),
            ("DH expl. mass, kg", self.charge.charge_mass_kg),
            ("DH spec. charge, kg/m³", self.charge.specific_charge_kg_per_m3),
            ("Rows", f64::from(self.panel.rows)),
            ("Holes per row", f64::from(self.panel.holes_per_row)),
            ("Total number of drillholes", f64::from(self.panel.total_holes)),
            ("Total drillhole length, m", self.panel.total_drill_length_m),
            ("Total explosive mass, kg", self.panel.total_explosive_mass_kg),
            ("Drilling costs, kEUR", self.costs.drilling.costs_keur),
            ("Blasting costs, kEUR", self.costs.blasting.costs_keur),
            ("Loading costs, kEUR", self.costs.loading.costs_keur),
            ("Haul costs, kEUR", self.costs.hauling.costs_keur),
            ("Total costs, kEUR", self.costs.total_costs_keur),
            ("X50, mm", self.fragmentation.x50_mm),
            ("Uniformity index", self.fragmentation.uniformity_index),
            ("Oversize, %", self.oversize_percent),
        ]
    }
}

/// Mining-cycle cost model over a fixed operation configuration.
pub struct MiningCycleModel {
    config: BlastConfig,
}

impl MiningCycleModel {
    /// Build a model, rejecting configurations the stages cannot evaluate.
    pub fn new(config: BlastConfig) -> BlastResult<Self> {
        config.validate()?;
        Ok(MiningCycleModel { config })
    }

    pub fn config(&self) -> &BlastConfig {
        &self.config
    }

    /// Evaluate one blast design end to end.
    ///
    /// Stages run strictly forward: charge → panel → fragmentation →
    /// equipment → costs. The first stage error aborts the evaluation; no
    /// partial report is produced.
    pub fn evaluate(&self, design: &BlastDesign) -> BlastResult<MiningCycleReport> {
        let cfg = &self.config;

        let charge = design_charge(
            design.burden_m,
            design.spacing_m,
            cfg.panel.bench_height_m,
            design.subdrilling_m,
            design.stemming_m,
            cfg.drillhole.diameter_mm,
            cfg.explosive.density,
        )?;
        tracing::debug!(
            hole_length_m = charge.length_m,
            charge_mass_kg = charge.charge_mass_kg,
            "charge design done"
        );

        let panel = aggregate_panel(
            cfg.panel.bench_height_m,
            cfg.panel.width_m,
            cfg.panel.length_m,
            cfg.panel.slope_angle_deg,
            design.burden_m,
            design.spacing_m,
            charge.length_m,
            charge.charge_mass_kg,
        )?;
        tracing::debug!(
            total_holes = panel.total_holes,
            total_rock_volume_m3 = panel.total_rock_volume_m3,
            "panel aggregation done"
        );

        let uniformity_index = uniformity_index_modern(
            design.burden_m,
            design.spacing_m,
            cfg.drillhole.diameter_mm,
            charge.charge_length_m,
            cfg.drillhole.collar_deviation_m,
            cfg.panel.bench_height_m,
            1.0,
        )?;
        let x50_mm = median_size_x50(
            charge.charge_mass_kg,
            charge.specific_charge_kg_per_m3,
            cfg.rockmass.rock_factor,
            cfg.explosive.rws,
        );
        let fragmentation = Fragmentation {
            x50_mm,
            uniformity_index,
        };
        let oversize_percent = fragmentation.oversize_percent(OVERSIZE_REF_SIZE_MM)?;
        tracing::debug!(x50_mm, uniformity_index, oversize_percent, "fragmentation done");

        let equipment = equipment_rates(x50_mm, cfg)?;

        let costs = CostBreakdown::new(
            drilling_cost(
                panel.total_drill_length_m,
                cfg.drill_rig.rate_m_per_h,
                cfg.drill_hourly_cost_eur(),
            )?,
            blasting_cost(panel.total_explosive_mass_kg, cfg.explosive.price_eur_per_kg),
            loading_cost(
                panel.total_rock_volume_m3,
                equipment.loader_hourly_production_m3,
                cfg.loader_hourly_cost_eur(),
            )?,
            hauling_cost(
                panel.total_rock_volume_m3,
                cfg.rockmass.density_t_per_m3,
                equipment.truck_hourly_production_t,
                cfg.truck_hourly_cost_eur(),
            )?,
        );
        tracing::info!(
            burden_m = design.burden_m,
            spacing_m = design.spacing_m,
            total_costs_keur = costs.total_costs_keur,
            oversize_percent,
            "mining cycle evaluated"
        );

        Ok(MiningCycleReport {
            design: *design,
            charge,
            panel,
            fragmentation,
            oversize_percent,
            equipment,
            costs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_model() -> MiningCycleModel {
        MiningCycleModel::new(BlastConfig::default()).unwrap()
    }

    fn reference_design() -> BlastDesign {
        BlastDesign::new(6.0, 7.0, 2.0, 4.0)
    }

    #[test]
    fn test_reference_scenario() {
        let report = reference_model().evaluate(&reference_design()).unwrap();

        assert!((report.charge.length_m - 17.0).abs() < 1e-12);
        assert!((report.charge.charge_length_m - 13.0).abs() < 1e-12);
        assert_eq!(report.panel.total_holes, 75);
        assert!(
            (100.0..=130.0).contains(&report.costs.total_costs_keur),
            "Expected total near 114 kEUR, got {}",
            report.costs.total_costs_keur
        );
        assert!(
            (5.0..=15.0).contains(&report.oversize_percent),
            "Expected single-digit oversize, got {} %",
            report.oversize_percent
        );
    }

    #[test]
    fn test_labeled_report_shape() {
        let report = reference_model().evaluate(&reference_design()).unwrap();
        let labeled = report.labeled();
        assert_eq!(labeled.len(), 20);
        assert_eq!(labeled[0].0, "Burden, m");
        assert_eq!(labeled[16].0, "Total costs, kEUR");
        let total = labeled
            .iter()
            .find(|(label, _)| *label == "Total costs, kEUR")
            .unwrap()
            .1;
        assert!((total - report.costs.total_costs_keur).abs() < 1e-12);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let model = reference_model();
        let a = model.evaluate(&reference_design()).unwrap();
        let b = model.evaluate(&reference_design()).unwrap();
        assert_eq!(a.costs.total_costs_keur.to_bits(), b.costs.total_costs_keur.to_bits());
        assert_eq!(a.fragmentation.x50_mm.to_bits(), b.fragmentation.x50_mm.to_bits());
        assert_eq!(a.oversize_percent.to_bits(), b.oversize_percent.to_bits());
    }

    #[test]
    fn test_overlong_stemming_aborts_pipeline() {
        let err = reference_model()
            .evaluate(&BlastDesign::new(6.0, 7.0, 2.0, 18.0))
            .unwrap_err();
        assert!(matches!(
            err,
            blast_types::error::BlastError::InvalidChargeDesign { .. }
        ));
    }

    #[test]
    fn test_overtight_burden_aborts_pipeline() {
        // 30 * 14 / 200 > 2: the modern uniformity formula has no value here.
        let err = reference_model()
            .evaluate(&BlastDesign::new(14.0, 15.0, 2.0, 4.0))
            .unwrap_err();
        assert!(matches!(
            err,
            blast_types::error::BlastError::InvalidUniformity(_)
        ));
    }
}
