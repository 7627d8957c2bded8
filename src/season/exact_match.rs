//! Categorical season resolution
//!
//! Maps a decided (temperature, intensity, depth) triple onto one of the
//! four seasons. Neutral or unset dimensions and combinations outside the
//! four valid profiles produce suggestions instead.

use tracing::trace;

use crate::types::{DepthValue, Dimension, IntensityValue, Pole, TemperatureValue};

use super::suggestions::{ranked_suggestions, undecided_suggestions, Undecided};
use super::types::{Season, SeasonMatch, SeasonResult};

fn undecided_state(pole: Option<Pole>, neutral: bool) -> Option<Undecided> {
    match (pole, neutral) {
        (Some(_), _) => None,
        (None, true) => Some(Undecided::Neutral),
        (None, false) => Some(Undecided::Unset),
    }
}

/// Resolve a season from categorical values
///
/// A match carries the season's intensity-named variant
/// (e.g. Primavera Brilhante, Verão Suave).
pub fn detect_season(
    temperature: TemperatureValue,
    intensity: IntensityValue,
    depth: DepthValue,
) -> SeasonResult {
    let poles = [temperature.pole(), intensity.pole(), depth.pole()];
    let neutral = [
        temperature == TemperatureValue::Neutro,
        intensity == IntensityValue::Neutro,
        depth == DepthValue::Neutro,
    ];

    let decided = match poles {
        [Some(t), Some(i), Some(d)] => [t, i, d],
        _ => {
            let undecided: Vec<(Dimension, Undecided)> = Dimension::ALL
                .iter()
                .filter_map(|d| undecided_state(poles[d.index()], neutral[d.index()]).map(|u| (*d, u)))
                .collect();
            trace!(undecided = undecided.len(), "season unresolved: undecided dimensions");
            return SeasonResult::unresolved(undecided_suggestions(poles, &undecided));
        }
    };

    match Season::from_profile(decided) {
        Some(season) => SeasonResult::matched(SeasonMatch::new(season, season.default_variant())),
        None => {
            trace!(?decided, "season unresolved: no matching profile");
            SeasonResult::unresolved(ranked_suggestions(decided))
        }
    }
}
