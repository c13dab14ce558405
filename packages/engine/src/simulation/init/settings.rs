use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::AMBIENT_TEMPERATURE;

use super::perf_stats::PerfStats;
use super::Simulation;

/// Construction-time settings. Grid size never changes afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationConfig {
    pub width: u32,
    pub height: u32,
    pub seed: u64,
    /// Temperature reported for off-grid coordinates.
    pub ambient_temperature: f32,
    /// Run diffusion and phase changes before movement.
    pub thermal: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 128,
            seed: 12345,
            ambient_temperature: AMBIENT_TEMPERATURE,
            thermal: true,
        }
    }
}

impl SimulationConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SimulationConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!("grid must not be empty: {}x{}", self.width, self.height));
        }
        if !self.ambient_temperature.is_finite() {
            return Err("ambient temperature must be finite".to_string());
        }
        Ok(())
    }
}

pub(super) fn set_thermal_enabled<R: Rng>(sim: &mut Simulation<R>, enabled: bool) {
    sim.thermal_enabled = enabled;
}

pub(super) fn thermal_enabled<R: Rng>(sim: &Simulation<R>) -> bool {
    sim.thermal_enabled
}

pub(super) fn set_ambient_temperature<R: Rng>(sim: &mut Simulation<R>, temp: f32) {
    sim.grid.set_ambient_temperature(temp);
}

pub(super) fn ambient_temperature<R: Rng>(sim: &Simulation<R>) -> f32 {
    sim.grid.ambient_temperature()
}

pub(super) fn enable_perf_metrics<R: Rng>(sim: &mut Simulation<R>, enabled: bool) {
    sim.perf_enabled = enabled;
}

pub(super) fn get_perf_stats<R: Rng>(sim: &Simulation<R>) -> PerfStats {
    sim.perf_stats.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = SimulationConfig::from_json(r#"{"width":64,"seed":7}"#).unwrap();
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 128);
        assert_eq!(config.seed, 7);
        assert!(config.thermal);
        assert_eq!(config.ambient_temperature, 20.0);
    }

    #[test]
    fn empty_grids_are_rejected() {
        assert!(SimulationConfig::from_json(r#"{"width":0}"#).is_err());
        assert!(SimulationConfig::from_json(r#"{"height":0}"#).is_err());
        assert!(SimulationConfig::from_json("[]").is_err());
    }
}
