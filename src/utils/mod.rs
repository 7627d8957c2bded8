//! Utility modules for season scoring
//!
//! Contains shared functionality used across the dimension metrics:
//! - Normalization: window remapping and desaturation adjustment
//! - Weighting: extremity-weighted averaging

pub mod normalization;
pub mod weighting;

// Re-export commonly used functions
pub use normalization::{apply_desaturation, calculate_position};
pub use weighting::{calculate_weighted_average, get_weight, weighted_mean};
