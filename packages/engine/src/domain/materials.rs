//! Material identifiers and their physical descriptors
//!
//! Every grid cell stores a `MaterialId`; the heavy data lives once per
//! material in `MaterialProperties` (flyweight) and is looked up through the
//! registry.

use serde::{Deserialize, Serialize};

/// Material identifier stored in every grid cell.
///
/// `Edge` never lives in the grid, it is what the accessors report for
/// off-grid coordinates. `Clean` only ever appears in the movement write
/// buffer while a pass is in progress.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialId {
    Edge = 0,
    None = 1,
    Stone = 2,
    Sand = 3,
    Water = 4,
    Oil = 5,
    Helium = 6,
    Wall = 7,
    Ice = 8,
    Steam = 9,
    LiquidNitrogen = 10,
    Metal = 11,
    Heater = 12,
    Cooler = 13,
    Clean = 255,
}

/// Number of registry slots (every id except `Clean`).
pub const MATERIAL_COUNT: usize = 14;

impl MaterialId {
    /// All ids that own a registry entry, in id order.
    pub const ALL: [MaterialId; MATERIAL_COUNT] = [
        MaterialId::Edge,
        MaterialId::None,
        MaterialId::Stone,
        MaterialId::Sand,
        MaterialId::Water,
        MaterialId::Oil,
        MaterialId::Helium,
        MaterialId::Wall,
        MaterialId::Ice,
        MaterialId::Steam,
        MaterialId::LiquidNitrogen,
        MaterialId::Metal,
        MaterialId::Heater,
        MaterialId::Cooler,
    ];

    /// Decode an id coming from the wasm boundary.
    pub fn from_u8(raw: u8) -> Option<Self> {
        if raw == MaterialId::Clean as u8 {
            return Some(MaterialId::Clean);
        }
        Self::ALL.get(raw as usize).copied()
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Sentinels may never be painted into the grid.
    #[inline]
    pub fn is_placeable(self) -> bool {
        !matches!(self, MaterialId::Edge | MaterialId::Clean)
    }

    /// Stable key used by override tables and UI manifests.
    pub fn key(self) -> &'static str {
        match self {
            MaterialId::Edge => "edge",
            MaterialId::None => "none",
            MaterialId::Stone => "stone",
            MaterialId::Sand => "sand",
            MaterialId::Water => "water",
            MaterialId::Oil => "oil",
            MaterialId::Helium => "helium",
            MaterialId::Wall => "wall",
            MaterialId::Ice => "ice",
            MaterialId::Steam => "steam",
            MaterialId::LiquidNitrogen => "liquid_nitrogen",
            MaterialId::Metal => "metal",
            MaterialId::Heater => "heater",
            MaterialId::Cooler => "cooler",
            MaterialId::Clean => "clean",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.key() == key)
    }
}

/// Lateral mobility tier. Ordered: each tier includes the moves of the ones
/// below it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftClass {
    None,
    Diagonal,
    Sideways,
}

/// Display color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Opaque ABGR packing (little-endian bytes `[R, G, B, A]`), ready for a
    /// canvas `ImageData` copy.
    #[inline]
    pub fn to_abgr(self) -> u32 {
        0xFF00_0000 | ((self.b as u32) << 16) | ((self.g as u32) << 8) | self.r as u32
    }
}

/// Threshold plus the material a cell turns into once it is crossed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseTarget {
    pub threshold: f32,
    pub becomes: MaterialId,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialProperties {
    pub name: &'static str,
    pub color: Rgb,
    /// Heavier sinks through lighter, compared strictly.
    pub density: f32,
    pub drift: DriftClass,
    /// Probability of skipping lateral drift this tick.
    pub friction: f32,
    pub gravity: bool,
    /// Weight of this cell's temperature in a neighbour's average.
    /// Zero marks an insulator.
    pub conductivity: f32,
    /// Melts when temperature >= threshold.
    pub melting: Option<PhaseTarget>,
    /// Freezes when temperature <= threshold.
    pub freezing: Option<PhaseTarget>,
    pub starting_temperature: f32,
    /// Emitters are clamped to this value every tick.
    pub fixed_temperature: Option<f32>,
}

impl MaterialProperties {
    #[inline]
    pub fn is_insulator(&self) -> bool {
        self.conductivity <= 0.0
    }

    #[inline]
    pub fn can_drift_diagonally(&self) -> bool {
        self.drift >= DriftClass::Diagonal
    }

    #[inline]
    pub fn can_drift_sideways(&self) -> bool {
        self.drift >= DriftClass::Sideways
    }
}
