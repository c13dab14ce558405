use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::domain::{MaterialId, MaterialRegistry};
use crate::grid::{Grid, WriteBuffer};

use super::perf_stats::PerfStats;
use super::settings::SimulationConfig;
use super::Simulation;

pub(super) fn create_simulation(
    config: &SimulationConfig,
    registry: Arc<MaterialRegistry>,
) -> Simulation<ChaCha8Rng> {
    let rng = ChaCha8Rng::seed_from_u64(config.seed);
    create_simulation_with_rng(config, registry, rng)
}

pub(super) fn create_simulation_with_rng<R: Rng>(
    config: &SimulationConfig,
    registry: Arc<MaterialRegistry>,
    rng: R,
) -> Simulation<R> {
    let empty_temperature = registry.lookup(MaterialId::None).starting_temperature;
    let grid = Grid::new(config.width, config.height, empty_temperature, config.ambient_temperature);
    let size = grid.size();

    debug!(
        width = config.width,
        height = config.height,
        seed = config.seed,
        thermal = config.thermal,
        "simulation created"
    );

    Simulation {
        registry,
        grid,
        buffer: WriteBuffer::new(size),
        thermal_scratch: vec![0.0; size],
        rng,
        thermal_enabled: config.thermal,
        tick_count: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
