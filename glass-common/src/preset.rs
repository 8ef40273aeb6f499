//! Canned presets that set every parameter at once

use std::fmt;
use std::str::FromStr;

use crate::error::GlassError;
use crate::parameter::{ParameterId, PARAMETER_COUNT};

/// Identifier of a preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetId {
    Clear,
    Frosted,
    Dream,
}

impl PresetId {
    pub const ALL: [PresetId; 3] = [PresetId::Clear, PresetId::Frosted, PresetId::Dream];

    pub fn as_str(self) -> &'static str {
        match self {
            PresetId::Clear => "clear",
            PresetId::Frosted => "frosted",
            PresetId::Dream => "dream",
        }
    }
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetId {
    type Err = GlassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| GlassError::UnknownPreset(s.to_string()))
    }
}

/// A named bundle of values, one per parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetDefinition {
    pub id: PresetId,
    pub label: &'static str,
    /// Indexed by [`ParameterId::index`]
    pub values: [f64; PARAMETER_COUNT],
}

impl PresetDefinition {
    pub fn value(&self, id: ParameterId) -> f64 {
        self.values[id.index()]
    }
}

// Value order: displacement, blur, opacity, brightness, saturation, bezel depth
pub static PRESETS: [PresetDefinition; 3] = [
    PresetDefinition {
        id: PresetId::Clear,
        label: "Clear Glass",
        values: [1.0, 8.0, 0.08, 1.05, 1.1, 12.0],
    },
    PresetDefinition {
        id: PresetId::Frosted,
        label: "Frosted Glass",
        values: [4.0, 40.0, 0.4, 1.2, 1.6, 32.0],
    },
    PresetDefinition {
        id: PresetId::Dream,
        label: "Dream Glass",
        values: [2.0, 28.0, 0.28, 1.1, 1.25, 26.0],
    },
];

pub fn preset(id: PresetId) -> &'static PresetDefinition {
    match id {
        PresetId::Clear => &PRESETS[0],
        PresetId::Frosted => &PRESETS[1],
        PresetId::Dream => &PRESETS[2],
    }
}
