//! Per-field calibration windows
//!
//! Each sampled region has a hue window (temperature) and a chroma window
//! (intensity). A window is the sub-range of the raw measurement treated as
//! full scale for that region: `start` maps to position 0 and `end` to 100.
//! Hue windows with `start > end` wrap through 360°.

use serde::{Deserialize, Serialize};

use crate::types::FieldId;

/// Numeric sub-range treated as full scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationWindow {
    pub start: f64,
    pub end: f64,
}

impl CalibrationWindow {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// True when the window passes through 360°/0°
    pub fn wraps(&self) -> bool {
        self.start > self.end
    }

    /// Span of the window in measurement units
    pub fn length(&self) -> f64 {
        if self.wraps() {
            (360.0 - self.start) + self.end
        } else {
            self.end - self.start
        }
    }
}

/// Hue and chroma windows for one region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldWindows {
    pub hue: CalibrationWindow,
    pub chroma: CalibrationWindow,
}

/// Used for any region without its own entry
pub const DEFAULT_WINDOWS: FieldWindows = FieldWindows {
    hue: CalibrationWindow::new(0.0, 360.0),
    chroma: CalibrationWindow::new(0.0, 60.0),
};

// ============================================================================
// EMBEDDED WINDOWS
// Hue: HSV degrees, pink/rose end at `start`, golden end at `end`.
// Chroma: HCL chroma, muted end at `start`, vivid end at `end`.
// ============================================================================

static BUILTIN_WINDOWS: &[(FieldId, FieldWindows)] = &[
    (FieldId::Iris, FieldWindows { hue: CalibrationWindow::new(200.0, 45.0), chroma: CalibrationWindow::new(0.0, 45.0) }),
    (FieldId::HairRoot, FieldWindows { hue: CalibrationWindow::new(345.0, 45.0), chroma: CalibrationWindow::new(0.0, 40.0) }),
    (FieldId::Eyebrow, FieldWindows { hue: CalibrationWindow::new(345.0, 45.0), chroma: CalibrationWindow::new(0.0, 35.0) }),
    (FieldId::Forehead, FieldWindows { hue: CalibrationWindow::new(355.0, 40.0), chroma: CalibrationWindow::new(8.0, 40.0) }),
    (FieldId::Cheek, FieldWindows { hue: CalibrationWindow::new(350.0, 35.0), chroma: CalibrationWindow::new(10.0, 45.0) }),
    (FieldId::UnderEye, FieldWindows { hue: CalibrationWindow::new(340.0, 35.0), chroma: CalibrationWindow::new(5.0, 35.0) }),
    (FieldId::Chin, FieldWindows { hue: CalibrationWindow::new(355.0, 40.0), chroma: CalibrationWindow::new(8.0, 40.0) }),
    (FieldId::LipContour, FieldWindows { hue: CalibrationWindow::new(340.0, 25.0), chroma: CalibrationWindow::new(15.0, 50.0) }),
    (FieldId::Lip, FieldWindows { hue: CalibrationWindow::new(335.0, 20.0), chroma: CalibrationWindow::new(20.0, 60.0) }),
];

/// Embedded windows for every region
pub fn builtin_windows() -> &'static [(FieldId, FieldWindows)] {
    BUILTIN_WINDOWS
}
