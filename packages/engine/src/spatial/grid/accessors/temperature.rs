use super::super::*;

impl Grid {
    // === Temperature access ===
    /// Temperature at `(x, y)`; the ambient temperature off the grid.
    #[inline]
    pub fn get_temperature(&self, x: i32, y: i32) -> f32 {
        match self.checked_index(x, y) {
            Some(idx) => self.temperature[idx],
            None => self.ambient_temperature,
        }
    }

    #[inline]
    pub fn set_temperature(&mut self, x: u32, y: u32, t: f32) {
        let idx = self.index(x, y);
        self.temperature[idx] = t;
    }

    pub fn temperature_ptr(&self) -> *const f32 {
        self.temperature.as_ptr()
    }
}
