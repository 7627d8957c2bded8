//! INTENSITY: CHROMA VIVIDNESS
//!
//! Each field's HCL chroma is remapped linearly into its chroma window
//! (muted → 0, vivid → 100). No saturation adjustment applies here.

use crate::calibration::CalibrationTables;
use crate::color::get_color_properties;
use crate::types::FieldId;
use crate::utils::{calculate_position, calculate_weighted_average};

use super::{ColorMap, FieldReading};

/// Result of the intensity calculation
#[derive(Debug, Clone)]
pub struct IntensityResult {
    /// Composite 0–100 (HIGH = BRIGHT); `None` without samples
    pub score: Option<f64>,
    pub readings: Vec<FieldReading>,
}

/// Intensity position (0–100) of one sampled color
pub fn calculate_intensidade_position(field: FieldId, hex: &str, tables: &CalibrationTables) -> f64 {
    let chroma = get_color_properties(hex).chroma();
    calculate_position(chroma, tables.chroma_window(field))
}

pub fn calculate_intensity(colors: &ColorMap, tables: &CalibrationTables) -> IntensityResult {
    let readings: Vec<FieldReading> = colors
        .iter()
        .map(|(&field, hex)| FieldReading {
            field,
            measurement: get_color_properties(hex).chroma(),
            position: calculate_intensidade_position(field, hex, tables),
        })
        .collect();

    let positions: Vec<f64> = readings.iter().map(|r| r.position).collect();

    IntensityResult {
        score: calculate_weighted_average(&positions),
        readings,
    }
}
