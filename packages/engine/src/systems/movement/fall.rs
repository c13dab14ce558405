use rand::Rng;

use super::MoveContext;

/// Vertical fall into the cell directly below.
#[inline]
pub(super) fn try_fall<R: Rng + ?Sized>(ctx: &mut MoveContext<'_, R>, density: f32) -> bool {
    ctx.try_displace(0, 1, density)
}
