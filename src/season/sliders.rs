//! Season resolution from continuous 0-100 slider values

use crate::types::{Dimension, Pole};

use super::types::{Season, SeasonMatch, Variant};

// ============================================================================
// TWO-RULE RESOLVER (temperature and depth only)
// ============================================================================

pub const EXTREME_LOW: f64 = 12.5;
pub const EXTREME_HIGH: f64 = 87.5;

/// Values a normalized extreme is moved to
const NORMALIZED_LOW: f64 = 25.0;
const NORMALIZED_HIGH: f64 = 75.0;

fn is_extreme(v: f64) -> bool {
    v < EXTREME_LOW || v > EXTREME_HIGH
}

/// Pull the less extreme value back when both are extreme
///
/// On equal distance from the midpoint, depth is moved and temperature keeps
/// its extreme.
pub fn normalize_two_rule(temperature: f64, depth: f64) -> (f64, f64) {
    if !(is_extreme(temperature) && is_extreme(depth)) {
        return (temperature, depth);
    }

    let pull = |v: f64| if v < 50.0 { NORMALIZED_LOW } else { NORMALIZED_HIGH };

    if (temperature - 50.0).abs() < (depth - 50.0).abs() {
        (pull(temperature), depth)
    } else {
        (temperature, pull(depth))
    }
}

/// Slider band: 0 below 12.5, 1 on [12.5, 50), 2 on [50, 87.5], 3 above 87.5
fn slider_band(v: f64) -> u8 {
    if v < EXTREME_LOW {
        0
    } else if v < 50.0 {
        1
    } else if v <= EXTREME_HIGH {
        2
    } else {
        3
    }
}

fn two_rule_cell(temperature_band: u8, depth_band: u8) -> Option<SeasonMatch> {
    let (season, variant) = match (temperature_band, depth_band) {
        (0, 1) => (Season::Inverno, Variant::Cool),
        (0, 2) => (Season::Verao, Variant::Cool),
        (3, 1) => (Season::Outono, Variant::Warm),
        (3, 2) => (Season::Primavera, Variant::Warm),
        (1, 0) => (Season::Inverno, Variant::Deep),
        (2, 0) => (Season::Outono, Variant::Deep),
        (1, 3) => (Season::Verao, Variant::Light),
        (2, 3) => (Season::Primavera, Variant::Light),
        (1, 2) => (Season::Verao, Variant::Soft),
        (2, 1) => (Season::Outono, Variant::Soft),
        _ => return None,
    };
    Some(SeasonMatch::new(season, variant))
}

/// Resolve a season from temperature and depth sliders
///
/// Returns `None` for NaN input or a cell without a season (both sliders
/// moderate on the same side).
pub fn detect_season_from_sliders_two_rule(temperature: f64, depth: f64) -> Option<SeasonMatch> {
    if temperature.is_nan() || depth.is_nan() {
        return None;
    }
    let (temperature, depth) = normalize_two_rule(temperature, depth);
    two_rule_cell(slider_band(temperature), slider_band(depth))
}

// ============================================================================
// THREE-SIGNAL RESOLVER
// ============================================================================

/// Resolve a season from all three sliders
///
/// The two dimensions furthest from 50 pick their poles. The third is
/// whichever pole of it completes a valid season, and the variant is named
/// after the most extreme dimension. Ties in distance keep the order
/// temperature, intensity, depth.
pub fn detect_season_from_sliders(temperature: f64, intensity: f64, depth: f64) -> Option<SeasonMatch> {
    let values = [temperature, intensity, depth];
    if values.iter().any(|v| v.is_nan()) {
        return None;
    }

    let mut order = Dimension::ALL;
    // Stable sort keeps dimension order on equal distances
    order.sort_by(|a, b| {
        let da = (values[a.index()] - 50.0).abs();
        let db = (values[b.index()] - 50.0).abs();
        db.total_cmp(&da)
    });

    let [first, second, third] = order;
    let mut poles = [Pole::High; 3];
    poles[first.index()] = Pole::of_value(values[first.index()]);
    poles[second.index()] = Pole::of_value(values[second.index()]);

    let preferred = Pole::of_value(values[third.index()]);
    let season = [preferred, preferred.flipped()].into_iter().find_map(|pole| {
        poles[third.index()] = pole;
        Season::from_profile(poles)
    })?;

    let variant = Variant::for_dimension(first, season.pole(first));
    Some(SeasonMatch::new(season, variant))
}
