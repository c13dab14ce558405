//! Simulation - one self-contained sandbox world
//!
//! Owns the grid, the movement write buffer, the material registry and the
//! random source. Orchestration only; the passes themselves live in
//! `systems/`:
//! - temperature diffusion, then phase changes (when thermal is on)
//! - movement into the write buffer, swapped in at the end
//!
//! Painting and reads happen between ticks; nothing here is shared across
//! threads.

use std::sync::Arc;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::domain::{MaterialId, MaterialProperties, MaterialRegistry};
use crate::grid::{Grid, WriteBuffer};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;
pub use settings::SimulationConfig;

use perf_timer::PerfTimer;

/// The simulation world, generic over its random source so tests can inject
/// a seeded generator.
pub struct Simulation<R: Rng = ChaCha8Rng> {
    registry: Arc<MaterialRegistry>,
    grid: Grid,
    buffer: WriteBuffer,
    thermal_scratch: Vec<f32>,
    rng: R,

    // Settings
    thermal_enabled: bool,

    // State
    tick_count: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Simulation<ChaCha8Rng> {
    /// Empty world with default settings.
    pub fn new(width: u32, height: u32) -> Self {
        let config = SimulationConfig {
            width,
            height,
            ..SimulationConfig::default()
        };
        init::create_simulation(&config, Arc::new(MaterialRegistry::from_builtin()))
    }

    /// Empty world with default settings and a specific seed.
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Self {
        let config = SimulationConfig {
            width,
            height,
            seed,
            ..SimulationConfig::default()
        };
        init::create_simulation(&config, Arc::new(MaterialRegistry::from_builtin()))
    }

    pub fn from_config(config: &SimulationConfig) -> Result<Self, String> {
        Self::from_config_with_registry(config, Arc::new(MaterialRegistry::from_builtin()))
    }

    pub fn from_config_with_registry(
        config: &SimulationConfig,
        registry: Arc<MaterialRegistry>,
    ) -> Result<Self, String> {
        config.validate()?;
        registry.validate()?;
        Ok(init::create_simulation(config, registry))
    }
}

impl<R: Rng> Simulation<R> {
    /// World driven by a caller-supplied random source.
    pub fn with_rng(config: &SimulationConfig, registry: Arc<MaterialRegistry>, rng: R) -> Self {
        init::create_simulation_with_rng(config, registry, rng)
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn tick_count(&self) -> u64 { self.tick_count }

    /// Material at `(x, y)`; EDGE off the grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> MaterialId {
        self.grid.get(x, y)
    }

    /// Temperature at `(x, y)`; the ambient temperature off the grid.
    #[inline]
    pub fn get_temperature(&self, x: i32, y: i32) -> f32 {
        self.grid.get_temperature(x, y)
    }

    pub fn material_properties(&self, id: MaterialId) -> &MaterialProperties {
        self.registry.lookup(id)
    }

    pub fn registry(&self) -> &Arc<MaterialRegistry> {
        &self.registry
    }

    /// Read-only view of the grid for render layers.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Raw temperature array, row-major, for heat overlays.
    pub fn temperature_slice(&self) -> &[f32] {
        &self.grid.temperature
    }

    pub fn count(&self, material: MaterialId) -> usize {
        self.grid.count(material)
    }

    /// Cells holding anything other than NONE.
    pub fn non_empty_count(&self) -> usize {
        self.grid.size() - self.grid.count(MaterialId::None)
    }

    /// Advance the world by one tick.
    pub fn tick(&mut self) {
        step::tick(self);
    }

    /// Paint a filled disc of `material` at its starting temperature.
    pub fn place(&mut self, x: i32, y: i32, material: MaterialId, radius: u32) {
        commands::place(self, x, y, material, radius)
    }

    /// Paint a disc of empty space.
    pub fn erase(&mut self, x: i32, y: i32, radius: u32) {
        commands::place(self, x, y, MaterialId::None, radius)
    }

    /// Every cell back to NONE; tick counter back to zero.
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Swap in a different material table and start over from an empty grid.
    /// An invalid table is rejected and the world is left untouched.
    pub fn reload_registry(&mut self, registry: Arc<MaterialRegistry>) -> Result<(), String> {
        registry.validate()?;
        debug!(materials = registry.material_count(), "material registry reloaded");
        self.registry = registry;
        self.clear();
        Ok(())
    }

    /// Fill `out` with one ABGR pixel per cell, row-major.
    pub fn render_abgr(&self, out: &mut [u32]) {
        render_extract::render_abgr(self, out)
    }

    /// Enable or disable the temperature passes.
    pub fn set_thermal_enabled(&mut self, enabled: bool) {
        settings::set_thermal_enabled(self, enabled);
    }

    pub fn thermal_enabled(&self) -> bool {
        settings::thermal_enabled(self)
    }

    /// Temperature reported for off-grid coordinates.
    pub fn set_ambient_temperature(&mut self, temp: f32) {
        settings::set_ambient_temperature(self, temp);
    }

    pub fn ambient_temperature(&self) -> f32 {
        settings::ambient_temperature(self)
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
