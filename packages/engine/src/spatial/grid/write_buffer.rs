use crate::domain::MaterialId;

use super::Grid;

// === WRITE-ONCE NEXT-STATE BUFFER ===
// Allocated once at startup, reset to CLEAN at the start of every movement
// pass and swapped with the grid arrays at the end. No per-tick allocation.

/// Scratch grid for the movement pass.
///
/// Every cell starts CLEAN and is written exactly once per pass, either by
/// committing a cell in place or by a conflict-checked swap of two cells.
pub struct WriteBuffer {
    contents: Vec<MaterialId>,
    temperature: Vec<f32>,
    moved: usize,
}

impl WriteBuffer {
    pub fn new(size: usize) -> Self {
        Self {
            contents: vec![MaterialId::Clean; size], // Single allocation at startup
            temperature: vec![0.0; size],
            moved: 0,
        }
    }

    /// Mark every cell as undecided.
    #[inline]
    pub fn reset(&mut self) {
        self.contents.fill(MaterialId::Clean);
        self.moved = 0;
    }

    #[inline(always)]
    pub fn is_clean(&self, idx: usize) -> bool {
        self.contents[idx] == MaterialId::Clean
    }

    /// Resolve `idx` to its pre-tick contents.
    #[inline]
    pub fn commit(&mut self, grid: &Grid, idx: usize) {
        debug_assert!(self.is_clean(idx), "cell {} written twice in one pass", idx);
        self.contents[idx] = grid.contents[idx];
        self.temperature[idx] = grid.temperature[idx];
    }

    /// Exchange the pre-tick contents of `a` and `b` into the buffer.
    ///
    /// Succeeds only if neither side has been decided yet this pass; this is
    /// what stops two movers from claiming one destination and a cell from
    /// moving twice. Temperature travels with the material.
    #[inline]
    pub fn try_swap(&mut self, grid: &Grid, a: usize, b: usize) -> bool {
        if !self.is_clean(a) || !self.is_clean(b) {
            return false;
        }
        self.contents[a] = grid.contents[b];
        self.contents[b] = grid.contents[a];
        self.temperature[a] = grid.temperature[b];
        self.temperature[b] = grid.temperature[a];
        self.moved += 1;
        true
    }

    /// Swaps performed since the last reset.
    #[inline]
    pub fn moved(&self) -> usize {
        self.moved
    }

    pub fn clean_count(&self) -> usize {
        self.contents.iter().filter(|&&m| m == MaterialId::Clean).count()
    }

    /// Replace the grid's arrays with the buffer's. The old grid arrays become
    /// the next pass's scratch space.
    pub fn swap_into(&mut self, grid: &mut Grid) {
        debug_assert_eq!(self.contents.len(), grid.contents.len());
        debug_assert_eq!(self.clean_count(), 0, "CLEAN survived the movement pass");
        std::mem::swap(&mut self.contents, &mut grid.contents);
        std::mem::swap(&mut self.temperature, &mut grid.temperature);
    }
}
