//! Domain - what the cells are made of

pub mod builtin;
pub mod materials;
pub mod registry;

pub use builtin::AMBIENT_TEMPERATURE;
pub use materials::{DriftClass, MaterialId, MaterialProperties, PhaseTarget, Rgb, MATERIAL_COUNT};
pub use registry::MaterialRegistry;
