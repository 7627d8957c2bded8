//! Dimension metrics for season scoring
//!
//! Each composite dimension is implemented in its own module:
//! - `temperature`: HSV hue remapped through per-field hue windows
//! - `intensity`: HCL chroma remapped through per-field chroma windows
//! - `depth`: HCL lightness combined with internal contrast

pub mod depth;
pub mod intensity;
pub mod temperature;

// Re-export metric functions
pub use depth::{
    calculate_depth, calculate_depth_score, calculate_profundidade_position, classify_contrast,
    ContrastLevel, DepthResult, DepthSignal,
};
pub use intensity::{calculate_intensidade_position, calculate_intensity, IntensityResult};
pub use temperature::{calculate_temperatura_position, calculate_temperature, TemperatureResult};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::calibration::CalibrationTables;
use crate::types::{Dimension, FieldId};

/// Sampled hex colors keyed by region (ordered for stable output)
pub type ColorMap = BTreeMap<FieldId, String>;

/// One field's raw measurement and its 0–100 position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldReading {
    pub field: FieldId,
    pub measurement: f64,
    pub position: f64,
}

/// Composite scores for all three dimensions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub temperature: Option<f64>,
    pub intensity: Option<f64>,
    pub depth: Option<f64>,
}

impl DimensionScores {
    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::Temperature => self.temperature,
            Dimension::Intensity => self.intensity,
            Dimension::Depth => self.depth,
        }
    }

    /// All three scores, once every dimension has one
    pub fn complete(&self) -> Option<(f64, f64, f64)> {
        Some((self.temperature?, self.intensity?, self.depth?))
    }
}

/// Compute every composite from a color map
pub fn calculate_dimension_scores(colors: &ColorMap, tables: &CalibrationTables) -> DimensionScores {
    DimensionScores {
        temperature: calculate_temperature(colors, tables).score,
        intensity: calculate_intensity(colors, tables).score,
        depth: calculate_depth(colors).score,
    }
}
