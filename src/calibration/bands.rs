//! Classification band tables
//!
//! Maps a 0–100 composite score to one of five ordered bands. All three
//! dimensions share the same boundaries; only the labels and display colors
//! differ.
//!
//! Boundaries: [0, 12.5], (12.5, 47], (47, 53], (53, 87.5], (87.5, 100]

use serde::{Deserialize, Serialize};

use crate::types::Dimension;

/// Ordered classification band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    ExtremeLow,
    Low,
    Neutral,
    High,
    ExtremeHigh,
}

/// A single band with label, swatch and value range
#[derive(Debug, Clone)]
pub struct BandBin {
    pub band: Band,
    pub label: &'static str,
    pub color: &'static str,
    /// Exclusive lower bound, except for the first bin
    pub lower: f64,
    /// Inclusive upper bound
    pub upper: f64,
}

/// Label and swatch used when no band matches
pub const NEUTRAL_LABEL: &str = "Neutra";
pub const NEUTRAL_COLOR: &str = "#B8B8B8";

// ============================================================================
// EMBEDDED BAND TABLES
// ============================================================================

static TEMPERATURE_BANDS: &[BandBin] = &[
    BandBin { band: Band::ExtremeLow, label: "Muito Fria", color: "#4A7FC1", lower: 0.0, upper: 12.5 },
    BandBin { band: Band::Low, label: "Fria", color: "#8DB3E2", lower: 12.5, upper: 47.0 },
    BandBin { band: Band::Neutral, label: NEUTRAL_LABEL, color: NEUTRAL_COLOR, lower: 47.0, upper: 53.0 },
    BandBin { band: Band::High, label: "Quente", color: "#F2B56B", lower: 53.0, upper: 87.5 },
    BandBin { band: Band::ExtremeHigh, label: "Muito Quente", color: "#E07B2E", lower: 87.5, upper: 100.0 },
];

static INTENSITY_BANDS: &[BandBin] = &[
    BandBin { band: Band::ExtremeLow, label: "Muito Suave", color: "#9C948C", lower: 0.0, upper: 12.5 },
    BandBin { band: Band::Low, label: "Suave", color: "#BFB3A8", lower: 12.5, upper: 47.0 },
    BandBin { band: Band::Neutral, label: NEUTRAL_LABEL, color: NEUTRAL_COLOR, lower: 47.0, upper: 53.0 },
    BandBin { band: Band::High, label: "Brilhante", color: "#E0569B", lower: 53.0, upper: 87.5 },
    BandBin { band: Band::ExtremeHigh, label: "Muito Brilhante", color: "#D0146A", lower: 87.5, upper: 100.0 },
];

static DEPTH_BANDS: &[BandBin] = &[
    BandBin { band: Band::ExtremeLow, label: "Muito Profunda", color: "#2B1D14", lower: 0.0, upper: 12.5 },
    BandBin { band: Band::Low, label: "Profunda", color: "#5C4033", lower: 12.5, upper: 47.0 },
    BandBin { band: Band::Neutral, label: NEUTRAL_LABEL, color: NEUTRAL_COLOR, lower: 47.0, upper: 53.0 },
    BandBin { band: Band::High, label: "Clara", color: "#E3CDB1", lower: 53.0, upper: 87.5 },
    BandBin { band: Band::ExtremeHigh, label: "Muito Clara", color: "#F7ECDD", lower: 87.5, upper: 100.0 },
];

/// Get all bins for a dimension
pub fn get_bins(dimension: Dimension) -> &'static [BandBin] {
    match dimension {
        Dimension::Temperature => TEMPERATURE_BANDS,
        Dimension::Intensity => INTENSITY_BANDS,
        Dimension::Depth => DEPTH_BANDS,
    }
}

/// Find the bin containing `score`. `None` for NaN or out-of-range scores.
pub fn find_bin(score: f64, dimension: Dimension) -> Option<&'static BandBin> {
    let bins = get_bins(dimension);
    bins.iter().enumerate().find_map(|(i, bin)| {
        let above_lower = if i == 0 { score >= bin.lower } else { score > bin.lower };
        (above_lower && score <= bin.upper).then_some(bin)
    })
}
