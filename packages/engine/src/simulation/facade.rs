use std::sync::Arc;

use wasm_bindgen::prelude::*;

use crate::domain::{MaterialId, MaterialRegistry};

use super::perf_stats::PerfStats;
use super::settings::SimulationConfig;
use super::Simulation;

/// JS-facing wrapper around [`Simulation`].
///
/// Material ids cross the boundary as `u8`; ids that do not decode, or that
/// name a sentinel, are ignored by the painting calls.
#[wasm_bindgen]
pub struct World {
    core: Simulation,
    pixels: Vec<u32>,
}

impl World {
    fn wrap(core: Simulation) -> Self {
        let size = (core.width() as usize) * (core.height() as usize);
        Self {
            core,
            pixels: vec![0u32; size],
        }
    }

    /// Borrow the wrapped simulation from Rust code.
    pub fn core(&self) -> &Simulation {
        &self.core
    }
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self::wrap(Simulation::new(width, height))
    }

    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Self {
        Self::wrap(Simulation::with_seed(width, height, seed))
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<World, JsValue> {
        let config = SimulationConfig::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        let core = Simulation::from_config(&config).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self::wrap(core))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn tick_count(&self) -> u64 { self.core.tick_count() }

    #[wasm_bindgen(getter)]
    pub fn non_empty_count(&self) -> usize { self.core.non_empty_count() }

    /// Material id at `(x, y)` (EDGE off the grid)
    pub fn get(&self, x: i32, y: i32) -> u8 {
        self.core.get(x, y).as_u8()
    }

    pub fn get_temperature(&self, x: i32, y: i32) -> f32 {
        self.core.get_temperature(x, y)
    }

    /// Advance one tick
    pub fn tick(&mut self) {
        self.core.tick();
    }

    /// Paint a disc (brush)
    pub fn place(&mut self, x: i32, y: i32, material: u8, radius: u32) {
        match MaterialId::from_u8(material) {
            Some(id) if id.is_placeable() => self.core.place(x, y, id, radius),
            _ => {}
        }
    }

    /// Erase a disc
    pub fn erase(&mut self, x: i32, y: i32, radius: u32) {
        self.core.erase(x, y, radius);
    }

    /// Clear all cells
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// ABGR color for a material id (unknown ids use NONE's)
    pub fn material_color(&self, material: u8) -> u32 {
        let id = MaterialId::from_u8(material).unwrap_or(MaterialId::None);
        self.core.material_properties(id).color.to_abgr()
    }

    /// Display name for a material id
    pub fn material_name(&self, material: u8) -> String {
        let id = MaterialId::from_u8(material).unwrap_or(MaterialId::None);
        self.core.material_properties(id).name.to_string()
    }

    pub fn manifest_json(&self) -> String {
        self.core.registry().manifest_json()
    }

    /// Replace material physics from an override table; clears the world.
    pub fn load_material_overrides(&mut self, json: String) -> Result<(), JsValue> {
        let registry = MaterialRegistry::from_overrides_json(&json).map_err(|e| JsValue::from_str(&e))?;
        self.core
            .reload_registry(Arc::new(registry))
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Refresh the pixel buffer and return a pointer to it (for JS rendering)
    pub fn render(&mut self) -> *const u32 {
        self.core.render_abgr(&mut self.pixels);
        self.pixels.as_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.pixels.len()
    }

    /// Pointer to the material id array, one byte per cell
    pub fn contents_ptr(&self) -> *const u8 {
        self.core.grid().contents_ptr() as *const u8
    }

    /// Pointer to temperature array (for JS thermal rendering)
    pub fn temperature_ptr(&self) -> *const f32 {
        self.core.grid().temperature_ptr()
    }

    pub fn set_thermal_enabled(&mut self, enabled: bool) {
        self.core.set_thermal_enabled(enabled);
    }

    pub fn set_ambient_temperature(&mut self, temp: f32) {
        self.core.set_ambient_temperature(temp);
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_ids_are_ignored_by_place() {
        let mut world = World::new(8, 8);
        world.place(2, 2, 200, 1);
        world.place(2, 2, MaterialId::Clean.as_u8(), 1);
        world.place(2, 2, MaterialId::Edge.as_u8(), 1);
        assert_eq!(world.non_empty_count(), 0);

        world.place(2, 2, MaterialId::Sand.as_u8(), 0);
        assert_eq!(world.get(2, 2), MaterialId::Sand.as_u8());
        assert_eq!(world.get(-1, 2), MaterialId::Edge.as_u8());
    }

    #[test]
    fn render_fills_one_pixel_per_cell() {
        let mut world = World::new(5, 4);
        world.place(0, 0, MaterialId::Stone.as_u8(), 0);
        let ptr = world.render();
        assert!(!ptr.is_null());
        assert_eq!(world.pixels_len(), 20);
        assert_eq!(world.pixels[0], world.material_color(MaterialId::Stone.as_u8()));
    }

    #[test]
    fn material_labels_come_from_the_registry() {
        let world = World::new(2, 2);
        assert_eq!(world.material_name(MaterialId::LiquidNitrogen.as_u8()), "Liquid Nitrogen");
        assert_eq!(world.material_name(250), "Empty");
    }

    #[test]
    fn overrides_reset_the_world() {
        let mut world = World::new(4, 4);
        world.place(1, 1, MaterialId::Sand.as_u8(), 0);
        world
            .load_material_overrides(r#"{"materials":[{"key":"sand","friction":1.0}]}"#.to_string())
            .unwrap();
        assert_eq!(world.non_empty_count(), 0);
        assert_eq!(world.core().material_properties(MaterialId::Sand).friction, 1.0);
    }
}
