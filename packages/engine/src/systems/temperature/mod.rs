//! Temperature System - heat diffusion and phase changes
//!
//! Runs before movement each tick:
//! - Diffusion: conductivity-weighted 8-neighbour average into a scratch
//!   buffer, swapped in once the whole grid has been read
//! - Phase changes: melting / freezing from each cell's new temperature

mod diffusion;
mod phase_changes;

pub use diffusion::diffuse_temperature;
pub use phase_changes::{apply_phase_changes, check_phase_change};
