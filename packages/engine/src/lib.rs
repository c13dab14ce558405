//! Sandfall Engine - falling-sand cellular automaton in WASM
//!
//! Single-threaded, deterministic for a given seed.
//!
//! Architecture:
//! - domain/     - material ids, properties, registry
//! - spatial/    - grid storage and the per-tick write buffer
//! - systems/    - temperature and movement passes
//! - simulation/ - orchestration, brush, render extraction, JS facade

pub mod spatial;
pub mod domain;
pub mod systems;
pub mod simulation;

// Compatibility re-exports (short paths used across the crate)
pub use spatial::grid;
pub use systems::movement;
pub use systems::temperature;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Sandfall WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{MaterialId, MaterialProperties, MaterialRegistry};
pub use simulation::{PerfStats, Simulation, SimulationConfig, World};

// Export material ids for JS
#[wasm_bindgen]
pub fn mat_edge() -> u8 { MaterialId::Edge.as_u8() }
#[wasm_bindgen]
pub fn mat_none() -> u8 { MaterialId::None.as_u8() }
#[wasm_bindgen]
pub fn mat_stone() -> u8 { MaterialId::Stone.as_u8() }
#[wasm_bindgen]
pub fn mat_sand() -> u8 { MaterialId::Sand.as_u8() }
#[wasm_bindgen]
pub fn mat_water() -> u8 { MaterialId::Water.as_u8() }
#[wasm_bindgen]
pub fn mat_oil() -> u8 { MaterialId::Oil.as_u8() }
#[wasm_bindgen]
pub fn mat_helium() -> u8 { MaterialId::Helium.as_u8() }
#[wasm_bindgen]
pub fn mat_wall() -> u8 { MaterialId::Wall.as_u8() }
#[wasm_bindgen]
pub fn mat_ice() -> u8 { MaterialId::Ice.as_u8() }
#[wasm_bindgen]
pub fn mat_steam() -> u8 { MaterialId::Steam.as_u8() }
#[wasm_bindgen]
pub fn mat_liquid_nitrogen() -> u8 { MaterialId::LiquidNitrogen.as_u8() }
#[wasm_bindgen]
pub fn mat_metal() -> u8 { MaterialId::Metal.as_u8() }
#[wasm_bindgen]
pub fn mat_heater() -> u8 { MaterialId::Heater.as_u8() }
#[wasm_bindgen]
pub fn mat_cooler() -> u8 { MaterialId::Cooler.as_u8() }
#[wasm_bindgen]
pub fn mat_clean() -> u8 { MaterialId::Clean.as_u8() }
