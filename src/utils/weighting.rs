//! Extremity Weighting
//!
//! Positions far from the neutral midpoint dominate the composite: one
//! strongly warm or strongly cool feature is diagnostic, while a handful of
//! near-neutral readings should not wash it out.
//!
//! Weights:
//! - 4 for v in [0, 12.5] or [87.5, 100]
//! - 2 for v in (12.5, 47] or (53, 87.5)
//! - 1 for v in (47, 53]

pub const EXTREME_LOW: f64 = 12.5;
pub const EXTREME_HIGH: f64 = 87.5;
pub const NEUTRAL_LOW: f64 = 47.0;
pub const NEUTRAL_HIGH: f64 = 53.0;

/// Weight of a single 0–100 position
pub fn get_weight(value: f64) -> f64 {
    if value <= EXTREME_LOW || value >= EXTREME_HIGH {
        4.0
    } else if value > NEUTRAL_LOW && value <= NEUTRAL_HIGH {
        1.0
    } else {
        2.0
    }
}

/// Unrounded weighted mean; `None` for an empty slice
pub fn weighted_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let (weighted_sum, total_weight) = values.iter().fold((0.0, 0.0), |(sum, total), &v| {
        let w = get_weight(v);
        (sum + v * w, total + w)
    });

    Some(weighted_sum / total_weight)
}

/// Extremity-weighted average rounded to the nearest integer
pub fn calculate_weighted_average(values: &[f64]) -> Option<f64> {
    weighted_mean(values).map(f64::round)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_weight_bands() {
        for v in [0.0, 5.0, 12.5, 87.5, 95.0, 100.0] {
            assert_eq!(get_weight(v), 4.0, "v = {}", v);
        }
        for v in [47.01, 50.0, 53.0] {
            assert_eq!(get_weight(v), 1.0, "v = {}", v);
        }
        for v in [12.51, 30.0, 47.0, 53.01, 87.49] {
            assert_eq!(get_weight(v), 2.0, "v = {}", v);
        }
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(calculate_weighted_average(&[]), None);
        assert_eq!(calculate_weighted_average(&[42.0]), Some(42.0));
        assert_eq!(calculate_weighted_average(&[90.0]), Some(90.0));
    }

    #[test]
    fn test_extreme_value_dominates() {
        // (95×4 + 50×1 + 50×1) / 6 = 80
        let avg = calculate_weighted_average(&[95.0, 50.0, 50.0]).unwrap();
        assert_relative_eq!(avg, 80.0);

        // Plain mean would be 65
        let mean = weighted_mean(&[95.0, 50.0, 50.0]).unwrap();
        assert!(mean > 65.0);
    }

    #[test]
    fn test_rounding() {
        // (20×2 + 30×2) / 4 = 25
        assert_eq!(calculate_weighted_average(&[20.0, 30.0]), Some(25.0));
        // (20×2 + 31×2) / 4 = 25.5 -> 26
        assert_eq!(calculate_weighted_average(&[20.0, 31.0]), Some(26.0));
    }
}
