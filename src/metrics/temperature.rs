//! TEMPERATURE: HUE WARMTH
//!
//! Each field's HSV hue is remapped into its hue window (rose end → 0,
//! golden end → 100). Desaturated colors are then pulled toward cool, since
//! gray-leaning features read cool regardless of their nominal hue.
//!
//! Composite: extremity-weighted average of the field positions.

use crate::calibration::CalibrationTables;
use crate::color::get_color_properties;
use crate::types::FieldId;
use crate::utils::{apply_desaturation, calculate_position, calculate_weighted_average};

use super::{ColorMap, FieldReading};

/// Result of the temperature calculation
#[derive(Debug, Clone)]
pub struct TemperatureResult {
    /// Composite 0–100 (HIGH = WARM); `None` without samples
    pub score: Option<f64>,
    /// Per-field readings in field order
    pub readings: Vec<FieldReading>,
}

/// Temperature position (0–100) of one sampled color
pub fn calculate_temperatura_position(field: FieldId, hex: &str, tables: &CalibrationTables) -> f64 {
    let props = get_color_properties(hex);
    let window = tables.hue_window(field);
    let position = calculate_position(props.hue(), window);
    apply_desaturation(position, props.saturation())
}

/// Calculate the temperature composite over every sampled field
pub fn calculate_temperature(colors: &ColorMap, tables: &CalibrationTables) -> TemperatureResult {
    let readings: Vec<FieldReading> = colors
        .iter()
        .map(|(&field, hex)| {
            let props = get_color_properties(hex);
            FieldReading {
                field,
                measurement: props.hue(),
                position: calculate_temperatura_position(field, hex, tables),
            }
        })
        .collect();

    let positions: Vec<f64> = readings.iter().map(|r| r.position).collect();

    TemperatureResult {
        score: calculate_weighted_average(&positions),
        readings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_golden_skin_reads_warm() {
        let tables = CalibrationTables::builtin();
        // Hue ≈ 31°, saturation ≈ 67% -> inside cheek window, near golden end
        let position = calculate_temperatura_position(FieldId::Cheek, "#C68642", tables);
        assert!(position > 80.0, "position {}", position);
    }

    #[test]
    fn test_rosy_skin_reads_cool() {
        let tables = CalibrationTables::builtin();
        // Hue ≈ 354°, saturated pink
        let position = calculate_temperatura_position(FieldId::Cheek, "#E8A0A8", tables);
        assert!(position < 20.0, "position {}", position);
    }

    #[test]
    fn test_gray_reads_coolest() {
        let tables = CalibrationTables::builtin();
        // Achromatic: hue 0 sits near the rose end and saturation 0 removes 40 more
        let position = calculate_temperatura_position(FieldId::Forehead, "#808080", tables);
        assert_relative_eq!(position, 0.0);
    }

    #[test]
    fn test_empty_map() {
        let result = calculate_temperature(&ColorMap::new(), CalibrationTables::builtin());
        assert!(result.score.is_none());
        assert!(result.readings.is_empty());
    }

    #[test]
    fn test_composite_over_fields() {
        let mut colors = ColorMap::new();
        colors.insert(FieldId::Cheek, "#C68642".to_string());
        colors.insert(FieldId::Forehead, "#C68642".to_string());
        let result = calculate_temperature(&colors, CalibrationTables::builtin());
        assert_eq!(result.readings.len(), 2);
        assert!(result.score.unwrap() > 80.0);
    }
}
