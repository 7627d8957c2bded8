//! Normalization Utilities
//!
//! Remaps raw measurements into a field's calibration window, producing a
//! 0–100 position.

use crate::calibration::CalibrationWindow;
use crate::color::normalize_hue;

/// Saturation (percent) at or below which a color reads cooler
pub const DESATURATION_THRESHOLD: f64 = 30.0;

/// Largest reduction applied to a fully gray color
pub const MAX_DESATURATION_REDUCTION: f64 = 40.0;

/// Remap `measurement` into `window` as a 0–100 position
///
/// Algorithm:
/// 1. Linear window (start <= end): `(m - start) / (end - start) × 100`,
///    clamped so values below start give 0 and values above end give 100
/// 2. Wrapping window (start > end): the window runs start → 360 → end,
///    length `(360 - start) + end`. Offsets are measured forward from start.
///    Hues outside the window clamp to whichever end is angularly closer
///    (ties go to start).
pub fn calculate_position(measurement: f64, window: CalibrationWindow) -> f64 {
    if measurement.is_nan() {
        return 0.0;
    }

    if !window.wraps() {
        let width = window.end - window.start;
        if width <= 0.0 {
            return if measurement <= window.start { 0.0 } else { 100.0 };
        }
        let position = (measurement - window.start) / width * 100.0;
        return position.clamp(0.0, 100.0);
    }

    let hue = normalize_hue(measurement);
    let length = window.length();

    let offset = if hue >= window.start {
        hue - window.start
    } else if hue <= window.end {
        (360.0 - window.start) + hue
    } else {
        // Outside the window: between end and start going forward
        let past_end = hue - window.end;
        let before_start = window.start - hue;
        return if before_start <= past_end { 0.0 } else { 100.0 };
    };

    (offset / length * 100.0).clamp(0.0, 100.0)
}

/// Pull a temperature position toward cool for desaturated colors
///
/// `reduction = ((30 - s) / 30) × 40` when saturation `s <= 30`, and the
/// result never drops below 0. Saturation above the threshold leaves the
/// position unchanged.
pub fn apply_desaturation(position: f64, saturation: f64) -> f64 {
    if saturation > DESATURATION_THRESHOLD {
        return position;
    }
    let saturation = saturation.max(0.0);
    let reduction =
        (DESATURATION_THRESHOLD - saturation) / DESATURATION_THRESHOLD * MAX_DESATURATION_REDUCTION;
    (position - reduction).max(0.0)
}
