//! Season resolution
//!
//! Three resolvers share one set of season profiles:
//! - `detect_season`: categorical values from mask votes, with suggestions
//!   when the triple is undecided or matches no season
//! - `detect_season_from_sliders`: all three 0-100 composites
//! - `detect_season_from_sliders_two_rule`: temperature and depth only

pub mod exact_match;
pub mod sliders;
pub mod suggestions;
pub mod types;

pub use exact_match::detect_season;
pub use sliders::{detect_season_from_sliders, detect_season_from_sliders_two_rule};
pub use types::{Season, SeasonMatch, SeasonResult, Suggestion, Variant};
