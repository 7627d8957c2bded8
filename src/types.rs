//! Shared domain types
//!
//! Closed enumerations for sampled regions, classification dimensions, mask
//! sides and the categorical values the season resolver consumes.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string does not name a known field or value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseValueError {
    #[error("unknown field: '{0}'")]
    UnknownField(String),
    #[error("unknown {dimension} value: '{value}'")]
    UnknownValue { dimension: &'static str, value: String },
    #[error("unknown dimension: '{0}'")]
    UnknownDimension(String),
}

// ============================================================================
// SAMPLED REGIONS
// ============================================================================

/// Anatomical region a color was sampled from
///
/// Serialized as snake_case; deserialized through `FromStr`, so every
/// spelling the parser accepts is accepted in JSON as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Iris,
    HairRoot,
    Eyebrow,
    Forehead,
    Cheek,
    UnderEye,
    Chin,
    LipContour,
    Lip,
}

impl FieldId {
    pub const ALL: [FieldId; 9] = [
        FieldId::Iris,
        FieldId::HairRoot,
        FieldId::Eyebrow,
        FieldId::Forehead,
        FieldId::Cheek,
        FieldId::UnderEye,
        FieldId::Chin,
        FieldId::LipContour,
        FieldId::Lip,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Iris => "iris",
            FieldId::HairRoot => "hair_root",
            FieldId::Eyebrow => "eyebrow",
            FieldId::Forehead => "forehead",
            FieldId::Cheek => "cheek",
            FieldId::UnderEye => "under_eye",
            FieldId::Chin => "chin",
            FieldId::LipContour => "lip_contour",
            FieldId::Lip => "lip",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = ParseValueError;

    /// Accepts snake_case, kebab-case and camelCase spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "iris" => Ok(FieldId::Iris),
            "hairroot" | "hair" => Ok(FieldId::HairRoot),
            "eyebrow" | "eyebrows" => Ok(FieldId::Eyebrow),
            "forehead" => Ok(FieldId::Forehead),
            "cheek" | "cheeks" => Ok(FieldId::Cheek),
            "undereye" => Ok(FieldId::UnderEye),
            "chin" => Ok(FieldId::Chin),
            "lipcontour" => Ok(FieldId::LipContour),
            "lip" | "lips" => Ok(FieldId::Lip),
            _ => Err(ParseValueError::UnknownField(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for FieldId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}

/// A color sampled from one region, as delivered by the capture layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampledColor {
    pub field: FieldId,
    pub hex: String,
}

impl SampledColor {
    pub fn new(field: FieldId, hex: impl Into<String>) -> Self {
        Self { field, hex: hex.into() }
    }
}

// ============================================================================
// DIMENSIONS AND MASK SIDES
// ============================================================================

/// Composite classification dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Temperature,
    Intensity,
    Depth,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Temperature, Dimension::Intensity, Dimension::Depth];

    /// Position in `Dimension::ALL`
    pub fn index(&self) -> usize {
        match self {
            Dimension::Temperature => 0,
            Dimension::Intensity => 1,
            Dimension::Depth => 2,
        }
    }

    /// Display name used in user-facing text
    pub fn display_name(&self) -> &'static str {
        match self {
            Dimension::Temperature => "Temperatura",
            Dimension::Intensity => "Intensidade",
            Dimension::Depth => "Profundidade",
        }
    }

    /// Pole names for (high, low)
    pub fn pole_names(&self) -> (&'static str, &'static str) {
        match self {
            Dimension::Temperature => ("Quente", "Frio"),
            Dimension::Intensity => ("Brilhante", "Suave"),
            Dimension::Depth => ("Claro", "Escuro"),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Dimension {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "temperature" | "temperatura" => Ok(Dimension::Temperature),
            "intensity" | "intensidade" => Ok(Dimension::Intensity),
            "depth" | "profundidade" => Ok(Dimension::Depth),
            _ => Err(ParseValueError::UnknownDimension(s.to_string())),
        }
    }
}

/// Which mask of a paired comparison was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

// ============================================================================
// CATEGORICAL VALUES
// ============================================================================

/// Direction of a dimension once it has been decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pole {
    High,
    Low,
}

impl Pole {
    pub fn flipped(self) -> Self {
        match self {
            Pole::High => Pole::Low,
            Pole::Low => Pole::High,
        }
    }

    /// Pole of a 0-100 slider value (50 counts as high)
    pub fn of_value(value: f64) -> Self {
        if value >= 50.0 {
            Pole::High
        } else {
            Pole::Low
        }
    }
}

macro_rules! categorical_value {
    (
        $(#[$meta:meta])*
        $name:ident, $dimension:expr, $label:literal,
        high: $high:ident => $high_str:literal [$($high_alias:literal),*],
        low: $low:ident => $low_str:literal [$($low_alias:literal),*]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $high,
            $low,
            Neutro,
            #[default]
            Indefinido,
        }

        impl $name {
            pub const DIMENSION: Dimension = $dimension;

            pub fn from_pole(pole: Pole) -> Self {
                match pole {
                    Pole::High => $name::$high,
                    Pole::Low => $name::$low,
                }
            }

            /// Value of a dimension that may still be undecided; an undecided
            /// dimension is `Neutro` when its votes tied and `Indefinido` otherwise
            pub fn from_decision(pole: Option<Pole>, tied: bool) -> Self {
                match (pole, tied) {
                    (Some(pole), _) => Self::from_pole(pole),
                    (None, true) => $name::Neutro,
                    (None, false) => $name::Indefinido,
                }
            }

            /// `None` while the dimension is neutral or unset
            pub fn pole(&self) -> Option<Pole> {
                match self {
                    $name::$high => Some(Pole::High),
                    $name::$low => Some(Pole::Low),
                    $name::Neutro | $name::Indefinido => None,
                }
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    $name::$high => $high_str,
                    $name::$low => $low_str,
                    $name::Neutro => "neutro",
                    $name::Indefinido => "",
                }
            }
        }

        impl FromStr for $name {
            type Err = ParseValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $high_str $(| $high_alias)* => Ok($name::$high),
                    $low_str $(| $low_alias)* => Ok($name::$low),
                    "neutro" | "neutra" | "neutral" => Ok($name::Neutro),
                    "" | "indefinido" | "unset" => Ok($name::Indefinido),
                    _ => Err(ParseValueError::UnknownValue {
                        dimension: $label,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

categorical_value!(
    /// Categorical temperature (hue warmth)
    TemperatureValue, Dimension::Temperature, "temperature",
    high: Quente => "quente" ["warm"],
    low: Frio => "frio" ["fria", "cool", "cold"]
);

categorical_value!(
    /// Categorical intensity (chroma vividness)
    IntensityValue, Dimension::Intensity, "intensity",
    high: Brilhante => "brilhante" ["bright", "clear"],
    low: Suave => "suave" ["soft", "muted"]
);

categorical_value!(
    /// Categorical depth (lightness and contrast)
    DepthValue, Dimension::Depth, "depth",
    high: Claro => "claro" ["clara", "light"],
    low: Escuro => "escuro" ["escura", "profundo", "profunda", "deep", "dark"]
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_parsing_spellings() {
        assert_eq!("hair-root".parse::<FieldId>(), Ok(FieldId::HairRoot));
        assert_eq!("underEye".parse::<FieldId>(), Ok(FieldId::UnderEye));
        assert_eq!("lip_contour".parse::<FieldId>(), Ok(FieldId::LipContour));
        assert!("nose".parse::<FieldId>().is_err());
    }

    #[test]
    fn test_field_json_matches_parser() {
        let field: FieldId = serde_json::from_str(r#""hairRoot""#).unwrap();
        assert_eq!(field, FieldId::HairRoot);
        assert_eq!(serde_json::to_string(&FieldId::UnderEye).unwrap(), r#""under_eye""#);
        assert!(serde_json::from_str::<FieldId>(r#""nose""#).is_err());
    }

    #[test]
    fn test_categorical_parsing() {
        assert_eq!("Quente".parse::<TemperatureValue>(), Ok(TemperatureValue::Quente));
        assert_eq!("fria".parse::<TemperatureValue>(), Ok(TemperatureValue::Frio));
        assert_eq!("".parse::<IntensityValue>(), Ok(IntensityValue::Indefinido));
        assert_eq!("profundo".parse::<DepthValue>(), Ok(DepthValue::Escuro));
        assert!("morno".parse::<TemperatureValue>().is_err());
    }

    #[test]
    fn test_pole_roundtrip() {
        assert_eq!(DepthValue::from_pole(Pole::High), DepthValue::Claro);
        assert_eq!(DepthValue::Claro.pole(), Some(Pole::High));
        assert_eq!(IntensityValue::Neutro.pole(), None);
        assert_eq!(TemperatureValue::from_decision(Some(Pole::Low), false), TemperatureValue::Frio);
        assert_eq!(IntensityValue::from_decision(None, true), IntensityValue::Neutro);
        assert_eq!(DepthValue::from_decision(None, false), DepthValue::Indefinido);
        assert_eq!(Pole::of_value(50.0), Pole::High);
        assert_eq!(Pole::of_value(49.9), Pole::Low);
    }
}
