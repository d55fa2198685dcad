// ─────────────────────────────────────────────────────────────────────
// Blast Ops Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::{BlastError, BlastResult};

/// Rockmass properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RockmassProps {
    /// In-situ rock density [t/m³].
    pub density_t_per_m3: f64,
    /// Kuz-Ram rock factor: strength and jointing of the massif [-].
    pub rock_factor: f64,
    /// Swell factor: loose volume over bank volume [-].
    pub swell_factor: f64,
}

/// Blast panel geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelGeometry {
    /// Bench height [m].
    pub bench_height_m: f64,
    /// Panel width, crest to toe line [m].
    pub width_m: f64,
    /// Panel length along the free face [m].
    pub length_m: f64,
    /// Bench slope angle [deg].
    pub slope_angle_deg: f64,
}

/// Explosive properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosiveProps {
    /// Charge density [g/dm³ ≡ t/m³].
    pub density: f64,
    /// Relative weight strength, ANFO = 100 [-].
    pub rws: f64,
    /// Unit price [EUR/kg].
    pub price_eur_per_kg: f64,
}

/// Drillhole specification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillholeSpec {
    /// Hole diameter [mm].
    pub diameter_mm: f64,
    /// Collar position deviation from design [m].
    pub collar_deviation_m: f64,
}

/// Drill rig specification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillRigSpec {
    /// Penetration rate [m/h].
    pub rate_m_per_h: f64,
    /// Fuel burn while drilling [l/h].
    pub fuel_l_per_h: f64,
}

/// Loading excavator specification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderSpec {
    /// Nominal bucket volume [m³].
    pub bucket_volume_m3: f64,
    /// Dig-swing-dump cycle time [s].
    pub cycle_s: f64,
    /// Fuel burn while loading [l/h].
    pub fuel_l_per_h: f64,
}

/// Haul truck specification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TruckSpec {
    /// Payload capacity [t].
    pub payload_t: f64,
    /// Round-trip haul cycle [min].
    pub haul_cycle_min: f64,
    /// Fuel burn while hauling [l/h].
    pub fuel_l_per_h: f64,
}

/// Immutable parameter set for one mining operation.
///
/// Hourly operating costs are derived from fuel burn and the diesel price,
/// so fuel consumption stays the single source of truth per machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlastConfig {
    pub rockmass: RockmassProps,
    pub panel: PanelGeometry,
    pub explosive: ExplosiveProps,
    pub drillhole: DrillholeSpec,
    pub drill_rig: DrillRigSpec,
    pub loader: LoaderSpec,
    pub truck: TruckSpec,
    /// Diesel price [EUR/l].
    pub diesel_price_eur_per_l: f64,
}

impl BlastConfig {
    /// Load from a JSON file.
    pub fn from_file(path: &str) -> BlastResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Drilling operating cost [EUR/h].
    pub fn drill_hourly_cost_eur(&self) -> f64 {
        self.drill_rig.fuel_l_per_h * self.diesel_price_eur_per_l
    }

    /// Loading operating cost [EUR/h].
    pub fn loader_hourly_cost_eur(&self) -> f64 {
        self.loader.fuel_l_per_h * self.diesel_price_eur_per_l
    }

    /// Hauling operating cost [EUR/h].
    pub fn truck_hourly_cost_eur(&self) -> f64 {
        self.truck.fuel_l_per_h * self.diesel_price_eur_per_l
    }

    /// Reject parameter sets the downstream models cannot evaluate.
    pub fn validate(&self) -> BlastResult<()> {
        let positive = [
            ("rockmass density", self.rockmass.density_t_per_m3),
            ("rock factor", self.rockmass.rock_factor),
            ("swell factor", self.rockmass.swell_factor),
            ("bench height", self.panel.bench_height_m),
            ("panel width", self.panel.width_m),
            ("panel length", self.panel.length_m),
            ("explosive density", self.explosive.density),
            ("explosive RWS", self.explosive.rws),
            ("drillhole diameter", self.drillhole.diameter_mm),
            ("drill rate", self.drill_rig.rate_m_per_h),
            ("bucket volume", self.loader.bucket_volume_m3),
            ("loader cycle time", self.loader.cycle_s),
            ("truck payload", self.truck.payload_t),
            ("truck haul cycle", self.truck.haul_cycle_min),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(BlastError::ConfigError(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.drillhole.collar_deviation_m < 0.0 {
            return Err(BlastError::ConfigError(format!(
                "collar deviation must be non-negative, got {}",
                self.drillhole.collar_deviation_m
            )));
        }
        Ok(())
    }
}

impl Default for BlastConfig {
    /// Reference parameter set: 15 m bench in dense rock, 200 mm holes,
    /// 27.5 m³ rope shovel and 320 t haulers.
    fn default() -> Self {
        BlastConfig {
            rockmass: RockmassProps {
                density_t_per_m3: 2.75,
                rock_factor: 8.19,
                swell_factor: 1.4,
            },
            panel: PanelGeometry {
                bench_height_m: 15.0,
                width_m: 30.0,
                length_m: 100.0,
                slope_angle_deg: 65.0,
            },
            explosive: ExplosiveProps {
                density: 1.1,
                rws: 116.0,
                price_eur_per_kg: 1.51,
            },
            drillhole: DrillholeSpec {
                diameter_mm: 200.0,
                collar_deviation_m: 0.1,
            },
            drill_rig: DrillRigSpec {
                rate_m_per_h: 25.0,
                fuel_l_per_h: 62.31,
            },
            loader: LoaderSpec {
                bucket_volume_m3: 27.5,
                cycle_s: 30.0,
                fuel_l_per_h: 225.39,
            },
            truck: TruckSpec {
                payload_t: 320.0,
                haul_cycle_min: 15.0,
                fuel_l_per_h: 311.74,
            },
            diesel_price_eur_per_l: 1.6,
        }
    }
}
