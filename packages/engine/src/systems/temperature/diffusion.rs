use crate::domain::MaterialRegistry;
use crate::grid::Grid;

/// 8-neighbourhood offsets
const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// One diffusion step over the whole grid.
///
/// Each cell becomes the weighted mean of its own temperature (weight 1) and
/// its neighbours' (weight = neighbour conductivity). Neighbours with
/// conductivity <= 0, including EDGE past the border, are left out of both
/// sums. Insulators keep their temperature; emitters snap to their fixed
/// temperature.
///
/// Reads only the old temperatures and writes `scratch`, which is then
/// swapped with the grid's array, so the result does not depend on sweep
/// order. Returns the number of cells that were averaged.
pub fn diffuse_temperature(registry: &MaterialRegistry, grid: &mut Grid, scratch: &mut Vec<f32>) -> u32 {
    let w = grid.width();
    let h = grid.height();
    scratch.resize(grid.size(), 0.0);

    let mut averaged = 0u32;
    for y in 0..h {
        for x in 0..w {
            let idx = grid.index(x, y);
            let props = registry.lookup(grid.contents[idx]);
            let own = grid.temperature[idx];

            if let Some(fixed) = props.fixed_temperature {
                scratch[idx] = fixed;
                continue;
            }
            if props.is_insulator() {
                scratch[idx] = own;
                continue;
            }

            let xi = x as i32;
            let yi = y as i32;
            let mut sum = own;
            let mut weight = 1.0f32;
            for (dx, dy) in NEIGHBORS {
                let nx = xi + dx;
                let ny = yi + dy;
                let conductivity = registry.conductivity(grid.get(nx, ny));
                if conductivity <= 0.0 {
                    continue;
                }
                sum += grid.get_temperature(nx, ny) * conductivity;
                weight += conductivity;
            }

            scratch[idx] = sum / weight;
            averaged += 1;
        }
    }

    std::mem::swap(scratch, &mut grid.temperature);
    averaged
}
