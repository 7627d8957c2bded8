//! Classification of composite scores into labeled bands.

use crate::calibration::{find_bin, Band, NEUTRAL_COLOR, NEUTRAL_LABEL};
use crate::types::Dimension;

/// Band of a composite score; `None` for a missing score
pub fn classify_band(score: Option<f64>, dimension: Dimension) -> Option<Band> {
    let score = score?;
    Some(find_bin(score, dimension).map_or(Band::Neutral, |bin| bin.band))
}

/// Band label for a composite score
///
/// Returns "" for a missing score and the neutral label when the score falls
/// outside every band (NaN or out of range).
pub fn get_label_category(score: Option<f64>, dimension: Dimension) -> &'static str {
    match score {
        None => "",
        Some(s) => find_bin(s, dimension).map_or(NEUTRAL_LABEL, |bin| bin.label),
    }
}

/// Display swatch for a composite score, with the same fallbacks as the label
pub fn get_label_color(score: Option<f64>, dimension: Dimension) -> &'static str {
    match score {
        None => "",
        Some(s) => find_bin(s, dimension).map_or(NEUTRAL_COLOR, |bin| bin.color),
    }
}
