use rand::Rng;
use tracing::debug;

use crate::domain::MaterialId;

use super::Simulation;

/// Filled disc `dx² + dy² <= radius²`, clipped to the grid. Each painted cell
/// takes the material's starting temperature.
pub(super) fn place<R: Rng>(sim: &mut Simulation<R>, cx: i32, cy: i32, material: MaterialId, radius: u32) {
    debug_assert!(material.is_placeable(), "{:?} cannot be painted", material);
    if !material.is_placeable() {
        return;
    }

    let temperature = sim.registry.lookup(material).starting_temperature;
    let r = radius as i64;
    // Squared distances from an i32 centre with a u32 radius exceed i64.
    let r2 = (r as i128) * (r as i128);
    let (cx, cy) = (cx as i64, cy as i64);

    // Clip the bounding square first so huge radii stay cheap.
    let x0 = (cx - r).max(0);
    let x1 = (cx + r).min(sim.grid.width() as i64 - 1);
    let y0 = (cy - r).max(0);
    let y1 = (cy + r).min(sim.grid.height() as i64 - 1);

    for y in y0..=y1 {
        let dy = (y - cy) as i128;
        for x in x0..=x1 {
            let dx = (x - cx) as i128;
            if dx * dx + dy * dy <= r2 {
                sim.grid.set_cell(x as u32, y as u32, material, temperature);
            }
        }
    }
}

pub(super) fn clear<R: Rng>(sim: &mut Simulation<R>) {
    let temperature = sim.registry.lookup(MaterialId::None).starting_temperature;
    sim.grid.fill(MaterialId::None, temperature);
    sim.tick_count = 0;
    debug!("simulation cleared");
}
