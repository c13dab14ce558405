//! Grid - Structure of Arrays for cell storage
//!
//! Two same-shaped row-major arrays: material ids and temperatures.
//! Every read from outside goes through the bounds-safe accessors, which
//! report EDGE and the ambient temperature past the border.

use crate::domain::MaterialId;

mod write_buffer;
pub use write_buffer::WriteBuffer;

mod indexing;
mod accessors;

pub struct Grid {
    width: u32,
    height: u32,
    size: usize,
    ambient_temperature: f32,

    pub contents: Vec<MaterialId>,
    /// Temperature in °C
    pub temperature: Vec<f32>,
}

impl Grid {
    /// All cells NONE at `fill_temperature`.
    pub fn new(width: u32, height: u32, fill_temperature: f32, ambient_temperature: f32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            size,
            ambient_temperature,
            contents: vec![MaterialId::None; size],
            temperature: vec![fill_temperature; size],
        }
    }

    /// Reset every cell without reallocating.
    pub fn fill(&mut self, material: MaterialId, temperature: f32) {
        self.contents.fill(material);
        self.temperature.fill(temperature);
    }

    #[inline]
    pub fn ambient_temperature(&self) -> f32 {
        self.ambient_temperature
    }

    pub fn set_ambient_temperature(&mut self, temperature: f32) {
        self.ambient_temperature = temperature;
    }

    /// Count of cells holding `material`.
    pub fn count(&self, material: MaterialId) -> usize {
        self.contents.iter().filter(|&&m| m == material).count()
    }
}
