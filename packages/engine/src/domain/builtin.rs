//! Builtin material table
//!
//! Indexed by `MaterialId as usize`. Tuning values decide what the sandbox
//! looks like, so change them with care: EDGE must stay denser than anything
//! else and NONE must stay at density 0.

use super::materials::{DriftClass, MaterialId, MaterialProperties, PhaseTarget, Rgb, MATERIAL_COUNT};

pub const AMBIENT_TEMPERATURE: f32 = 20.0;

const fn phase(threshold: f32, becomes: MaterialId) -> Option<PhaseTarget> {
    Some(PhaseTarget { threshold, becomes })
}

pub const BUILTIN_MATERIALS: [MaterialProperties; MATERIAL_COUNT] = [
    // EDGE
    MaterialProperties {
        name: "Edge",
        color: Rgb::new(0, 0, 0),
        density: 1000.0,
        drift: DriftClass::None,
        friction: 1.0,
        gravity: false,
        conductivity: 0.0,
        melting: None,
        freezing: None,
        starting_temperature: AMBIENT_TEMPERATURE,
        fixed_temperature: None,
    },
    // NONE
    MaterialProperties {
        name: "Empty",
        color: Rgb::new(10, 10, 10),
        density: 0.0,
        drift: DriftClass::None,
        friction: 0.0,
        gravity: false,
        conductivity: 0.05,
        melting: None,
        freezing: None,
        starting_temperature: AMBIENT_TEMPERATURE,
        fixed_temperature: None,
    },
    // STONE
    MaterialProperties {
        name: "Stone",
        color: Rgb::new(110, 110, 115),
        density: 10.0,
        drift: DriftClass::None,
        friction: 1.0,
        gravity: false,
        conductivity: 0.3,
        melting: None,
        freezing: None,
        starting_temperature: AMBIENT_TEMPERATURE,
        fixed_temperature: None,
    },
    // SAND
    MaterialProperties {
        name: "Sand",
        color: Rgb::new(214, 186, 112),
        density: 5.0,
        drift: DriftClass::Diagonal,
        friction: 0.2,
        gravity: true,
        conductivity: 0.2,
        melting: None,
        freezing: None,
        starting_temperature: AMBIENT_TEMPERATURE,
        fixed_temperature: None,
    },
    // WATER
    MaterialProperties {
        name: "Water",
        color: Rgb::new(40, 90, 220),
        density: 2.0,
        drift: DriftClass::Sideways,
        friction: 0.1,
        gravity: true,
        conductivity: 0.6,
        melting: phase(100.0, MaterialId::Steam),
        freezing: phase(0.0, MaterialId::Ice),
        starting_temperature: AMBIENT_TEMPERATURE,
        fixed_temperature: None,
    },
    // OIL
    MaterialProperties {
        name: "Oil",
        color: Rgb::new(70, 45, 20),
        density: 1.5,
        drift: DriftClass::Sideways,
        friction: 0.3,
        gravity: true,
        conductivity: 0.15,
        melting: None,
        freezing: None,
        starting_temperature: AMBIENT_TEMPERATURE,
        fixed_temperature: None,
    },
    // HELIUM
    MaterialProperties {
        name: "Helium",
        color: Rgb::new(230, 200, 240),
        density: -1.0,
        drift: DriftClass::Sideways,
        friction: 0.5,
        gravity: true,
        conductivity: 0.1,
        melting: None,
        freezing: None,
        starting_temperature: AMBIENT_TEMPERATURE,
        fixed_temperature: None,
    },
    // WALL
    MaterialProperties {
        name: "Wall",
        color: Rgb::new(60, 60, 60),
        density: 100.0,
        drift: DriftClass::None,
        friction: 1.0,
        gravity: false,
        conductivity: 0.0,
        melting: None,
        freezing: None,
        starting_temperature: AMBIENT_TEMPERATURE,
        fixed_temperature: None,
    },
    // ICE
    MaterialProperties {
        name: "Ice",
        color: Rgb::new(170, 220, 245),
        density: 9.0,
        drift: DriftClass::None,
        friction: 1.0,
        gravity: false,
        conductivity: 0.5,
        melting: phase(1.0, MaterialId::Water),
        freezing: None,
        starting_temperature: -10.0,
        fixed_temperature: None,
    },
    // STEAM
    MaterialProperties {
        name: "Steam",
        color: Rgb::new(200, 200, 210),
        density: -0.5,
        drift: DriftClass::Sideways,
        friction: 0.2,
        gravity: true,
        conductivity: 0.1,
        melting: None,
        freezing: phase(90.0, MaterialId::Water),
        starting_temperature: 110.0,
        fixed_temperature: None,
    },
    // LIQUID_NITROGEN
    MaterialProperties {
        name: "Liquid Nitrogen",
        color: Rgb::new(190, 240, 230),
        density: 1.2,
        drift: DriftClass::Sideways,
        friction: 0.05,
        gravity: true,
        conductivity: 0.4,
        melting: phase(-190.0, MaterialId::None),
        freezing: None,
        starting_temperature: -196.0,
        fixed_temperature: None,
    },
    // METAL
    MaterialProperties {
        name: "Metal",
        color: Rgb::new(150, 160, 175),
        density: 20.0,
        drift: DriftClass::None,
        friction: 1.0,
        gravity: false,
        conductivity: 1.0,
        melting: None,
        freezing: None,
        starting_temperature: AMBIENT_TEMPERATURE,
        fixed_temperature: None,
    },
    // HEATER
    MaterialProperties {
        name: "Heater",
        color: Rgb::new(230, 70, 30),
        density: 100.0,
        drift: DriftClass::None,
        friction: 1.0,
        gravity: false,
        conductivity: 1.0,
        melting: None,
        freezing: None,
        starting_temperature: 500.0,
        fixed_temperature: Some(500.0),
    },
    // COOLER
    MaterialProperties {
        name: "Cooler",
        color: Rgb::new(40, 200, 230),
        density: 100.0,
        drift: DriftClass::None,
        friction: 1.0,
        gravity: false,
        conductivity: 1.0,
        melting: None,
        freezing: None,
        starting_temperature: -100.0,
        fixed_temperature: Some(-100.0),
    },
];
