use rand::Rng;
use tracing::trace;

use crate::domain::MaterialId;
use crate::systems::movement::resolve_movement;
use crate::systems::temperature::{apply_phase_changes, diffuse_temperature};

use super::{PerfTimer, Simulation};

/// One tick: diffusion -> phase changes -> movement -> buffer swap.
pub(super) fn tick<R: Rng>(sim: &mut Simulation<R>) {
    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
        sim.perf_stats.grid_size = sim.grid.size() as u32;
    }
    let step_start = PerfTimer::start_if(perf_on);

    // === TEMPERATURE PASS ===
    // Runs first so that movement carries the freshly updated heat along
    // with the material.
    if sim.thermal_enabled {
        let registry = &*sim.registry;

        let diffusion_start = PerfTimer::start_if(perf_on);
        let averaged = diffuse_temperature(registry, &mut sim.grid, &mut sim.thermal_scratch);
        if let Some(t) = diffusion_start {
            sim.perf_stats.diffusion_ms = t.elapsed_ms();
        }

        let phase_start = PerfTimer::start_if(perf_on);
        let changed = apply_phase_changes(registry, &mut sim.grid);
        if let Some(t) = phase_start {
            sim.perf_stats.phase_ms = t.elapsed_ms();
        }

        if perf_on {
            sim.perf_stats.cells_averaged = averaged;
            sim.perf_stats.phase_changes = changed;
        }
        trace!(averaged, changed, "temperature pass");
    }

    // === MOVEMENT PASS ===
    let movement_start = PerfTimer::start_if(perf_on);
    let moved = resolve_movement(&*sim.registry, &sim.grid, &mut sim.buffer, &mut sim.rng);
    sim.buffer.swap_into(&mut sim.grid);

    if perf_on {
        if let Some(t) = movement_start {
            sim.perf_stats.movement_ms = t.elapsed_ms();
        }
        sim.perf_stats.cells_moved = moved;
        sim.perf_stats.non_empty_cells = (sim.grid.size() - sim.grid.count(MaterialId::None)) as u32;
        if let Some(start) = step_start {
            sim.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    sim.tick_count += 1;
    trace!(tick = sim.tick_count, moved, "tick complete");
}
