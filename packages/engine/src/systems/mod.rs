//! Systems - the per-tick passes that advance the grid

pub mod movement;
pub mod temperature;
