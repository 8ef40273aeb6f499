//! Static table of tunable glass parameters
//!
//! Each descriptor maps one slider to one CSS custom property on the document
//! root. The table order is the display order in the panel.

use std::fmt;
use std::str::FromStr;

use crate::error::GlassError;

/// Number of tunable parameters
pub const PARAMETER_COUNT: usize = 6;

/// Identifier of a tunable parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParameterId {
    Displacement,
    Blur,
    Opacity,
    Brightness,
    Saturation,
    BezelDepth,
}

impl ParameterId {
    pub const ALL: [ParameterId; PARAMETER_COUNT] = [
        ParameterId::Displacement,
        ParameterId::Blur,
        ParameterId::Opacity,
        ParameterId::Brightness,
        ParameterId::Saturation,
        ParameterId::BezelDepth,
    ];

    /// Position of this parameter in [`PARAMETERS`]
    pub fn index(self) -> usize {
        match self {
            ParameterId::Displacement => 0,
            ParameterId::Blur => 1,
            ParameterId::Opacity => 2,
            ParameterId::Brightness => 3,
            ParameterId::Saturation => 4,
            ParameterId::BezelDepth => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ParameterId::Displacement => "displacement",
            ParameterId::Blur => "blur",
            ParameterId::Opacity => "opacity",
            ParameterId::Brightness => "brightness",
            ParameterId::Saturation => "saturation",
            ParameterId::BezelDepth => "bezel_depth",
        }
    }
}

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterId {
    type Err = GlassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParameterId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| GlassError::UnknownParameter(s.to_string()))
    }
}

/// Static metadata for one slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterDescriptor {
    pub id: ParameterId,
    pub label: &'static str,
    /// CSS custom property written on the document root
    pub target_variable: &'static str,
    /// Suffix appended to the number when writing, possibly empty
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default_value: f64,
}

impl ParameterDescriptor {
    pub fn is_length(&self) -> bool {
        self.unit == "px"
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// All tunable parameters, indexed by [`ParameterId::index`]
pub static PARAMETERS: [ParameterDescriptor; PARAMETER_COUNT] = [
    ParameterDescriptor {
        id: ParameterId::Displacement,
        label: "Displacement",
        target_variable: "--glass-displacement",
        unit: "px",
        min: 0.0,
        max: 10.0,
        step: 1.0,
        default_value: 4.0,
    },
    ParameterDescriptor {
        id: ParameterId::Blur,
        label: "Blur",
        target_variable: "--glass-blur",
        unit: "px",
        min: 0.0,
        max: 50.0,
        step: 1.0,
        default_value: 20.0,
    },
    ParameterDescriptor {
        id: ParameterId::Opacity,
        label: "Tint Opacity",
        target_variable: "--glass-opacity",
        unit: "",
        min: 0.0,
        max: 0.5,
        step: 0.01,
        default_value: 0.2,
    },
    ParameterDescriptor {
        id: ParameterId::Brightness,
        label: "Brightness",
        target_variable: "--glass-brightness",
        unit: "",
        min: 0.8,
        max: 1.4,
        step: 0.01,
        default_value: 1.05,
    },
    ParameterDescriptor {
        id: ParameterId::Saturation,
        label: "Saturation",
        target_variable: "--glass-saturation",
        unit: "",
        min: 0.5,
        max: 2.0,
        step: 0.05,
        default_value: 1.2,
    },
    ParameterDescriptor {
        id: ParameterId::BezelDepth,
        label: "Bezel Depth",
        target_variable: "--glass-bezel-depth",
        unit: "px",
        min: 0.0,
        max: 40.0,
        step: 1.0,
        default_value: 18.0,
    },
];

/// Look up the descriptor for a parameter
pub fn descriptor(id: ParameterId) -> &'static ParameterDescriptor {
    &PARAMETERS[id.index()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_is_indexed_by_id() {
        for id in ParameterId::ALL {
            assert_eq!(descriptor(id).id, id);
        }
    }

    #[test]
    fn test_ids_and_variables_unique() {
        let ids: HashSet<_> = PARAMETERS.iter().map(|d| d.id).collect();
        let vars: HashSet<_> = PARAMETERS.iter().map(|d| d.target_variable).collect();
        assert_eq!(ids.len(), PARAMETER_COUNT);
        assert_eq!(vars.len(), PARAMETER_COUNT);
    }

    #[test]
    fn test_defaults_within_range() {
        for d in &PARAMETERS {
            assert!(d.min <= d.max, "{} has inverted range", d.id);
            assert!(d.contains(d.default_value), "{} default out of range", d.id);
            assert!(d.step > 0.0);
        }
    }

    #[test]
    fn test_variable_domains() {
        let domain = |id| {
            let d = descriptor(id);
            (d.unit, d.min, d.max)
        };
        assert_eq!(domain(ParameterId::Displacement), ("px", 0.0, 10.0));
        assert_eq!(domain(ParameterId::Blur), ("px", 0.0, 50.0));
        assert_eq!(domain(ParameterId::Opacity), ("", 0.0, 0.5));
        assert_eq!(domain(ParameterId::Brightness), ("", 0.8, 1.4));
        assert_eq!(domain(ParameterId::Saturation), ("", 0.5, 2.0));
        assert_eq!(domain(ParameterId::BezelDepth), ("px", 0.0, 40.0));
    }

    #[test]
    fn test_parse_id() {
        assert_eq!("blur".parse::<ParameterId>(), Ok(ParameterId::Blur));
        assert_eq!(
            "bezel_depth".parse::<ParameterId>(),
            Ok(ParameterId::BezelDepth)
        );
        assert_eq!(
            "glow".parse::<ParameterId>(),
            Err(GlassError::UnknownParameter("glow".to_string()))
        );
    }
}
