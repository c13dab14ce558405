use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) diffusion_ms: f64,
    pub(super) phase_ms: f64,
    pub(super) movement_ms: f64,
    pub(super) cells_averaged: u32,
    pub(super) phase_changes: u32,
    pub(super) cells_moved: u32,
    pub(super) non_empty_cells: u32,
    pub(super) grid_size: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn diffusion_ms(&self) -> f64 { self.diffusion_ms }
    #[wasm_bindgen(getter)]
    pub fn phase_ms(&self) -> f64 { self.phase_ms }
    #[wasm_bindgen(getter)]
    pub fn movement_ms(&self) -> f64 { self.movement_ms }
    #[wasm_bindgen(getter)]
    pub fn cells_averaged(&self) -> u32 { self.cells_averaged }
    #[wasm_bindgen(getter)]
    pub fn phase_changes(&self) -> u32 { self.phase_changes }
    #[wasm_bindgen(getter)]
    pub fn cells_moved(&self) -> u32 { self.cells_moved }
    #[wasm_bindgen(getter)]
    pub fn non_empty_cells(&self) -> u32 { self.non_empty_cells }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
}
