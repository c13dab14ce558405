use super::super::*;

impl Grid {
    // === Material access ===
    /// Material at `(x, y)`; EDGE anywhere off the grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> MaterialId {
        match self.checked_index(x, y) {
            Some(idx) => self.contents[idx],
            None => MaterialId::Edge,
        }
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, material: MaterialId) {
        debug_assert!(material.is_placeable(), "{:?} cannot be stored in the grid", material);
        let idx = self.index(x, y);
        self.contents[idx] = material;
    }

    #[inline]
    pub fn set_cell(&mut self, x: u32, y: u32, material: MaterialId, temperature: f32) {
        self.set(x, y, material);
        self.set_temperature(x, y, temperature);
    }

    pub fn contents_ptr(&self) -> *const MaterialId {
        self.contents.as_ptr()
    }
}
