//! Spatial storage - the cell grid and its movement write buffer

pub mod grid;
