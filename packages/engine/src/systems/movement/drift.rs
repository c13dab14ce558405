use rand::Rng;

use super::MoveContext;

/// Roll into below-left or below-right, whichever the coin tries first and
/// accepts.
pub(super) fn try_diagonal<R: Rng + ?Sized>(ctx: &mut MoveContext<'_, R>, density: f32) -> bool {
    try_lateral(ctx, 1, density)
}

/// Flow into left or right on the same row.
pub(super) fn try_sideways<R: Rng + ?Sized>(ctx: &mut MoveContext<'_, R>, density: f32) -> bool {
    try_lateral(ctx, 0, density)
}

#[inline]
fn try_lateral<R: Rng + ?Sized>(ctx: &mut MoveContext<'_, R>, dy: i32, density: f32) -> bool {
    let [first, second] = ctx.lateral_order();
    ctx.try_displace(first, dy, density) || ctx.try_displace(second, dy, density)
}
