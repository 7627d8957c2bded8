//! DEPTH: LIGHTNESS AND CONTRAST
//!
//! Depth is not the average lightness alone. A light-skinned subject with
//! very dark hair reads deeper than one with uniformly light features, so the
//! composite combines two signals:
//!
//! 1. Luminosity: extremity-weighted mean of HCL lightness over all fields
//! 2. Contrast: lightness range (max − min) across fields
//!
//! **Contrast classes**: High (≥ 65), Medium (30–65), Low (< 30)
//!
//! **Lookup**: the luminosity bracket (quartiles of 0–100) and the contrast
//! class select an output sub-range; luminosity is interpolated linearly
//! within its bracket onto that sub-range.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::color::get_color_properties;
use crate::utils::weighted_mean;

use super::{ColorMap, FieldReading};

pub const HIGH_CONTRAST_MIN: f64 = 65.0;
pub const MEDIUM_CONTRAST_MIN: f64 = 30.0;

/// Width of each luminosity bracket
const BRACKET_WIDTH: f64 = 25.0;

/// Internal lightness contrast of a subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContrastLevel {
    High,
    Medium,
    Low,
}

impl ContrastLevel {
    fn column(&self) -> usize {
        match self {
            ContrastLevel::High => 0,
            ContrastLevel::Medium => 1,
            ContrastLevel::Low => 2,
        }
    }
}

/// Output sub-ranges indexed by [luminosity bracket][contrast column]
static DEPTH_LOOKUP: [[(f64, f64); 3]; 4] = [
    // High        Medium        Low
    [(0.0, 10.0), (0.0, 15.0), (5.0, 20.0)],     // [0, 25)
    [(10.0, 35.0), (15.0, 45.0), (20.0, 50.0)],  // [25, 50)
    [(35.0, 60.0), (45.0, 75.0), (50.0, 85.0)],  // [50, 75)
    [(60.0, 85.0), (75.0, 95.0), (85.0, 100.0)], // [75, 100]
];

/// Result of the depth calculation
#[derive(Debug, Clone)]
pub struct DepthResult {
    /// Composite 0–100 (HIGH = LIGHT); `None` without samples
    pub score: Option<f64>,
    /// Weighted mean lightness
    pub luminosity: Option<f64>,
    /// Max − min lightness
    pub contrast: Option<f64>,
    pub contrast_level: Option<ContrastLevel>,
    /// Per-field readings; position is the clamped lightness
    pub readings: Vec<FieldReading>,
}

/// Depth measurement (HCL lightness, clamped to 0–100) of one sampled color
pub fn calculate_profundidade_position(hex: &str) -> f64 {
    get_color_properties(hex).lightness().clamp(0.0, 100.0)
}

pub fn classify_contrast(range: f64) -> ContrastLevel {
    if range >= HIGH_CONTRAST_MIN {
        ContrastLevel::High
    } else if range >= MEDIUM_CONTRAST_MIN {
        ContrastLevel::Medium
    } else {
        ContrastLevel::Low
    }
}

/// Map (luminosity, contrast) to a 0–100 depth score (rounded)
pub fn depth_from_luminosity(luminosity: f64, contrast: ContrastLevel) -> f64 {
    let luminosity = luminosity.clamp(0.0, 100.0);
    let bracket = ((luminosity / BRACKET_WIDTH).floor() as usize).min(DEPTH_LOOKUP.len() - 1);
    let bracket_lo = bracket as f64 * BRACKET_WIDTH;
    let fraction = ((luminosity - bracket_lo) / BRACKET_WIDTH).clamp(0.0, 1.0);

    let (out_lo, out_hi) = DEPTH_LOOKUP[bracket][contrast.column()];
    (out_lo + fraction * (out_hi - out_lo)).round().clamp(0.0, 100.0)
}

/// Both depth signals and the score they map to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthSignal {
    pub score: f64,
    pub luminosity: f64,
    pub contrast: f64,
    pub level: ContrastLevel,
}

/// Depth composite from raw lightness values
pub fn calculate_depth_score(lightness: &[f64]) -> Option<DepthSignal> {
    let luminosity = weighted_mean(lightness)?;

    let max = lightness.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = lightness.iter().copied().fold(f64::INFINITY, f64::min);
    let contrast = max - min;
    let level = classify_contrast(contrast);

    let score = depth_from_luminosity(luminosity, level);
    tracing::trace!(
        "depth: luminosity={:.1} contrast={:.1} ({:?}) -> {}",
        luminosity,
        contrast,
        level,
        score
    );

    Some(DepthSignal {
        score,
        luminosity,
        contrast,
        level,
    })
}

pub fn calculate_depth(colors: &ColorMap) -> DepthResult {
    let readings: Vec<FieldReading> = colors
        .iter()
        .map(|(&field, hex)| {
            let position = calculate_profundidade_position(hex);
            FieldReading {
                field,
                measurement: position,
                position,
            }
        })
        .collect();

    let lightness: SmallVec<[f64; 9]> = readings.iter().map(|r| r.position).collect();

    let signal = calculate_depth_score(&lightness);

    DepthResult {
        score: signal.map(|s| s.score),
        luminosity: signal.map(|s| s.luminosity),
        contrast: signal.map(|s| s.contrast),
        contrast_level: signal.map(|s| s.level),
        readings,
    }
}
