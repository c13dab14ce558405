use crate::domain::{MaterialId, MaterialProperties, MaterialRegistry};
use crate::grid::Grid;

/// Material a cell turns into at `temp`, if any.
///
/// Melting is checked first and freezing second, so a material whose
/// thresholds overlap ends up frozen.
pub fn check_phase_change(props: &MaterialProperties, temp: f32) -> Option<MaterialId> {
    let mut result = None;
    if let Some(melt) = props.melting {
        if temp >= melt.threshold {
            result = Some(melt.becomes);
        }
    }
    if let Some(freeze) = props.freezing {
        if temp <= freeze.threshold {
            result = Some(freeze.becomes);
        }
    }
    result
}

/// Convert every cell whose temperature crossed one of its thresholds.
/// Temperatures are left untouched. Returns the number of conversions.
pub fn apply_phase_changes(registry: &MaterialRegistry, grid: &mut Grid) -> u32 {
    let mut changed = 0u32;
    for idx in 0..grid.size() {
        let current = grid.contents[idx];
        let props = registry.lookup(current);
        if let Some(next) = check_phase_change(props, grid.temperature[idx]) {
            debug_assert!(next.is_placeable(), "{:?} transitions into {:?}", current, next);
            if next != current {
                grid.contents[idx] = next;
                changed += 1;
            }
        }
    }

    changed
}
