//! Season Scorer Rust Implementation
//!
//! Color-season classification from sampled facial colors and draping votes.
//!
//! Module layout:
//! - `color/`: hex parsing and RGB, HSL, HSV, Lab and HCL conversions
//! - `calibration/`: per-field hue and chroma windows, band tables
//! - `utils/`: window position mapping and extremity weighting
//! - `metrics/`: temperature, intensity and depth composites
//! - `classify`: band labels and display colors
//! - `votes`: mask vote aggregation
//! - `season/`: categorical and slider season resolvers
//! - `scorer`: per-profile reports, sequential and parallel

pub mod calibration;
pub mod classify;
pub mod color;
pub mod metrics;
pub mod scorer;
pub mod season;
pub mod types;
pub mod utils;
pub mod votes;

// Re-export commonly used types
pub use calibration::{Band, CalibrationTables, CalibrationWindow, FieldWindows};
pub use classify::{classify_band, get_label_category, get_label_color};
pub use color::{get_color_properties, ColorProperties};
pub use metrics::{
    calculate_dimension_scores, calculate_intensidade_position, calculate_profundidade_position,
    calculate_temperatura_position, ColorMap, DimensionScores,
};
pub use scorer::{ColorProfile, SeasonReport, SeasonScorer};
pub use season::{
    detect_season, detect_season_from_sliders, detect_season_from_sliders_two_rule, Season,
    SeasonMatch, SeasonResult, Suggestion, Variant,
};
pub use types::{
    DepthValue, Dimension, FieldId, IntensityValue, ParseValueError, Pole, SampledColor, Side,
    TemperatureValue,
};
pub use utils::{calculate_weighted_average, get_weight};
pub use votes::{
    calculate_category_value, categorical_values, detect_season_from_votes, DimensionValue, MaskVote,
    VoteBoard,
};
