use rand::Rng;

use crate::domain::MaterialRegistry;
use crate::grid::{Grid, WriteBuffer};

/// Everything a single cell update needs, borrowed for the duration of one
/// cell.
pub struct MoveContext<'a, R: Rng + ?Sized> {
    pub registry: &'a MaterialRegistry,
    /// Pre-tick state; never written during the pass.
    pub grid: &'a Grid,
    pub buffer: &'a mut WriteBuffer,
    pub rng: &'a mut R,
    pub x: u32,
    pub y: u32,
    pub idx: usize,
}

impl<'a, R: Rng + ?Sized> MoveContext<'a, R> {
    /// Swap with the cell at offset `(dx, dy)` if the mover is strictly
    /// denser than what is there and neither cell is claimed yet.
    #[inline]
    pub fn try_displace(&mut self, dx: i32, dy: i32, density: f32) -> bool {
        let tx = self.x as i32 + dx;
        let ty = self.y as i32 + dy;
        let target = self.grid.get(tx, ty);
        if density <= self.registry.density(target) {
            return false;
        }
        // EDGE is denser than everything, so an off-grid target never gets here.
        let Some(target_idx) = self.grid.checked_index(tx, ty) else {
            return false;
        };
        self.buffer.try_swap(self.grid, self.idx, target_idx)
    }

    /// Left/right offsets in a freshly randomised order.
    #[inline]
    pub fn lateral_order(&mut self) -> [i32; 2] {
        if self.rng.gen_bool(0.5) { [-1, 1] } else { [1, -1] }
    }
}
