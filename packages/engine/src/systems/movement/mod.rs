//! Movement - gravity, density and drift resolved through the write buffer
//!
//! Rows are visited top to bottom so a row is settled before the row below
//! moves into it. Within a row the scan direction is a fresh coin flip, which
//! keeps lateral flow from piling up on one side.
//!
//! Per undecided cell:
//! 1. non-gravity material stays put
//! 2. fall into the cell below if strictly denser than it
//! 3. drift gate: a roll above the material's friction allows drift
//! 4. diagonal drift (DIAGONAL and up), then sideways drift (SIDEWAYS)
//! 5. anything that did not move is committed in place

mod common;
mod fall;
mod drift;

use rand::Rng;

use crate::domain::MaterialRegistry;
use crate::grid::{Grid, WriteBuffer};

pub use common::MoveContext;

/// Run one movement pass from `grid` into `buffer`.
///
/// On return every buffer cell has been decided exactly once; the caller
/// swaps the buffer into the grid. Returns the number of swaps performed.
pub fn resolve_movement<R: Rng + ?Sized>(
    registry: &MaterialRegistry,
    grid: &Grid,
    buffer: &mut WriteBuffer,
    rng: &mut R,
) -> u32 {
    buffer.reset();
    let w = grid.width();
    let h = grid.height();

    for y in 0..h {
        let ascending = rng.gen_bool(0.5);
        for i in 0..w {
            let x = if ascending { i } else { w - 1 - i };
            let idx = grid.index(x, y);
            if !buffer.is_clean(idx) {
                continue;
            }

            let mut ctx = MoveContext {
                registry,
                grid,
                buffer: &mut *buffer,
                rng: &mut *rng,
                x,
                y,
                idx,
            };
            if !update_cell(&mut ctx) {
                buffer.commit(grid, idx);
            }
        }
    }

    debug_assert_eq!(buffer.clean_count(), 0, "movement pass left undecided cells");
    buffer.moved() as u32
}

/// Returns true if the cell was swapped somewhere.
fn update_cell<R: Rng + ?Sized>(ctx: &mut MoveContext<'_, R>) -> bool {
    let props = ctx.registry.lookup(ctx.grid.contents[ctx.idx]);
    if !props.gravity {
        return false;
    }

    if fall::try_fall(ctx, props.density) {
        return true;
    }

    if !props.can_drift_diagonally() {
        return false;
    }
    let roll: f32 = ctx.rng.gen();
    if roll <= props.friction {
        return false;
    }

    if drift::try_diagonal(ctx, props.density) {
        return true;
    }
    props.can_drift_sideways() && drift::try_sideways(ctx, props.density)
}
