use rand::Rng;

use super::Simulation;

/// One opaque ABGR pixel per cell, row-major. Writes at most `out.len()`
/// pixels.
pub(super) fn render_abgr<R: Rng>(sim: &Simulation<R>, out: &mut [u32]) {
    debug_assert!(out.len() >= sim.grid.size(), "pixel buffer smaller than grid");

    for (pixel, &material) in out.iter_mut().zip(sim.grid.contents.iter()) {
        *pixel = sim.registry.lookup(material).color.to_abgr();
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::MaterialId;
    use crate::simulation::Simulation;

    #[test]
    fn pixels_follow_material_colors() {
        let mut sim = Simulation::new(3, 2);
        sim.place(2, 1, MaterialId::Water, 0);
        let mut pixels = vec![0u32; 6];
        sim.render_abgr(&mut pixels);

        let empty = sim.material_properties(MaterialId::None).color.to_abgr();
        let water = sim.material_properties(MaterialId::Water).color.to_abgr();
        assert_eq!(pixels[0], empty);
        assert_eq!(pixels[5], water);
        assert!(pixels.iter().all(|p| p >> 24 == 0xFF));
    }
}
