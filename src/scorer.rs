//! Season Scorer - Main coordinator for scoring color profiles
//!
//! This module combines the three dimension metrics, the band classifier and
//! the season resolvers into one report per profile.
//! Includes both sequential and parallel (Rayon) batch implementations.

use rayon::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::calibration::{Band, CalibrationTables};
use crate::classify::{classify_band, get_label_category, get_label_color};
use crate::metrics::{
    calculate_depth, calculate_intensity, calculate_temperature, ColorMap, ContrastLevel,
    DimensionScores, FieldReading,
};
use crate::season::{
    detect_season_from_sliders, detect_season_from_sliders_two_rule, SeasonMatch, SeasonResult,
};
use crate::types::{Dimension, FieldId, SampledColor};
use crate::votes::{detect_season_from_votes, MaskVote};

/// Input for one subject
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorProfile {
    /// Sampled hex colors per region; unrecognized region keys are skipped
    #[serde(default, deserialize_with = "deserialize_colors")]
    pub colors: ColorMap,
    /// Manual slider values that replace the computed composites
    #[serde(default)]
    pub overrides: DimensionScores,
    /// Mask selections from draping
    #[serde(default)]
    pub votes: Vec<MaskVote>,
}

fn deserialize_colors<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ColorMap, D::Error> {
    let raw: BTreeMap<String, String> = BTreeMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, hex)| match key.parse::<FieldId>() {
            Ok(field) => Some((field, hex)),
            Err(err) => {
                warn!(%err, "skipping sampled color");
                None
            }
        })
        .collect())
}

impl ColorProfile {
    /// Profile from capture-layer samples; a later sample of a field replaces an earlier one
    pub fn from_samples(samples: impl IntoIterator<Item = SampledColor>) -> Self {
        Self {
            colors: samples.into_iter().map(|s| (s.field, s.hex)).collect(),
            ..Default::default()
        }
    }
}

/// Score, band and display fields of one dimension
#[derive(Debug, Clone, Serialize)]
pub struct DimensionReport {
    pub dimension: Dimension,
    /// Composite from the sampled colors
    pub computed: Option<f64>,
    /// Value used for classification (override when present)
    pub score: Option<f64>,
    pub overridden: bool,
    pub band: Option<Band>,
    pub label: &'static str,
    pub color: &'static str,
    pub readings: Vec<FieldReading>,
}

/// Depth signals behind the depth composite
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DepthDetail {
    pub luminosity: Option<f64>,
    pub contrast: Option<f64>,
    pub contrast_level: Option<ContrastLevel>,
}

/// Full result for one profile
#[derive(Debug, Clone, Serialize)]
pub struct SeasonReport {
    pub temperature: DimensionReport,
    pub intensity: DimensionReport,
    pub depth: DimensionReport,
    pub depth_detail: DepthDetail,
    /// Three-signal resolution, once every dimension has a score
    pub season: Option<SeasonMatch>,
    /// Temperature and depth resolution
    pub season_two_rule: Option<SeasonMatch>,
    /// Categorical resolution from the mask votes
    pub vote_result: SeasonResult,
}

impl SeasonReport {
    pub fn dimension(&self, dimension: Dimension) -> &DimensionReport {
        match dimension {
            Dimension::Temperature => &self.temperature,
            Dimension::Intensity => &self.intensity,
            Dimension::Depth => &self.depth,
        }
    }

    /// Final scores after overrides
    pub fn scores(&self) -> DimensionScores {
        DimensionScores {
            temperature: self.temperature.score,
            intensity: self.intensity.score,
            depth: self.depth.score,
        }
    }
}

/// Main season scorer
#[derive(Debug, Clone)]
pub struct SeasonScorer {
    tables: CalibrationTables,
}

impl Default for SeasonScorer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SeasonScorer {
    pub fn new(tables: CalibrationTables) -> Self {
        Self { tables }
    }

    /// Scorer over the embedded calibration tables
    pub fn builtin() -> Self {
        Self::new(CalibrationTables::builtin().clone())
    }

    /// Scorer over the embedded tables with overrides from a JSON file
    pub fn from_calibration_file(path: &Path) -> anyhow::Result<Self> {
        Ok(Self::new(CalibrationTables::load(path)?))
    }

    /// Score a single profile
    pub fn score_profile(&self, profile: &ColorProfile) -> SeasonReport {
        debug!(
            fields = profile.colors.len(),
            votes = profile.votes.len(),
            "scoring profile"
        );

        let temperature = calculate_temperature(&profile.colors, &self.tables);
        let intensity = calculate_intensity(&profile.colors, &self.tables);
        let depth = calculate_depth(&profile.colors);

        let temperature = dimension_report(
            Dimension::Temperature,
            temperature.score,
            profile.overrides.temperature,
            temperature.readings,
        );
        let intensity = dimension_report(
            Dimension::Intensity,
            intensity.score,
            profile.overrides.intensity,
            intensity.readings,
        );
        let depth_detail = DepthDetail {
            luminosity: depth.luminosity,
            contrast: depth.contrast,
            contrast_level: depth.contrast_level,
        };
        let depth = dimension_report(
            Dimension::Depth,
            depth.score,
            profile.overrides.depth,
            depth.readings,
        );

        let season = match (temperature.score, intensity.score, depth.score) {
            (Some(t), Some(i), Some(d)) => detect_season_from_sliders(t, i, d),
            _ => None,
        };
        let season_two_rule = match (temperature.score, depth.score) {
            (Some(t), Some(d)) => detect_season_from_sliders_two_rule(t, d),
            _ => None,
        };

        let vote_result = detect_season_from_votes(&profile.votes);

        debug!(
            temperature = ?temperature.score,
            intensity = ?intensity.score,
            depth = ?depth.score,
            season = ?season.map(|m| m.name()),
            votes_valid = vote_result.valid,
            "profile scored"
        );

        SeasonReport {
            temperature,
            intensity,
            depth,
            depth_detail,
            season,
            season_two_rule,
            vote_result,
        }
    }

    /// Score profiles one after another
    pub fn score_profiles(&self, profiles: &[ColorProfile]) -> Vec<SeasonReport> {
        profiles.iter().map(|p| self.score_profile(p)).collect()
    }

    /// Score profiles IN PARALLEL using Rayon
    ///
    /// Scoring only reads the calibration tables, so profiles are independent.
    /// Output order matches input order.
    pub fn score_profiles_parallel(&self, profiles: &[ColorProfile]) -> Vec<SeasonReport> {
        debug!(profiles = profiles.len(), "scoring batch in parallel");
        profiles.par_iter().map(|p| self.score_profile(p)).collect()
    }
}

fn dimension_report(
    dimension: Dimension,
    computed: Option<f64>,
    override_value: Option<f64>,
    readings: Vec<FieldReading>,
) -> DimensionReport {
    let override_value = match override_value {
        Some(v) if v.is_nan() => {
            warn!(%dimension, "ignoring NaN override");
            None
        }
        other => other.map(|v| v.clamp(0.0, 100.0)),
    };
    let score = override_value.or(computed);

    DimensionReport {
        dimension,
        computed,
        score,
        overridden: override_value.is_some(),
        band: classify_band(score, dimension),
        label: get_label_category(score, dimension),
        color: get_label_color(score, dimension),
        readings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::Season;
    use crate::types::Side;
    use crate::votes::{calculate_category_value, DimensionValue};

    fn warm_light_profile() -> ColorProfile {
        let mut colors = ColorMap::new();
        colors.insert(FieldId::Forehead, "#F1C27D".to_string());
        colors.insert(FieldId::Cheek, "#E8B88A".to_string());
        colors.insert(FieldId::HairRoot, "#C8A165".to_string());
        ColorProfile {
            colors,
            ..Default::default()
        }
    }

    #[test]
    fn test_from_samples_last_wins() {
        let profile = ColorProfile::from_samples(vec![
            SampledColor::new(FieldId::Cheek, "#000000"),
            SampledColor::new(FieldId::Iris, "#6B4E2E"),
            SampledColor::new(FieldId::Cheek, "#E8B88A"),
        ]);
        assert_eq!(profile.colors.len(), 2);
        assert_eq!(profile.colors[&FieldId::Cheek], "#E8B88A");
    }

    #[test]
    fn test_empty_profile() {
        let report = SeasonScorer::builtin().score_profile(&ColorProfile::default());
        for dimension in Dimension::ALL {
            let d = report.dimension(dimension);
            assert_eq!(d.score, None);
            assert_eq!(d.label, "");
            assert_eq!(d.color, "");
            assert!(d.readings.is_empty());
        }
        assert_eq!(report.season, None);
        assert_eq!(report.season_two_rule, None);
        assert!(!report.vote_result.valid);
    }

    #[test]
    fn test_overrides_are_clamped_and_win() {
        let profile = ColorProfile {
            overrides: DimensionScores {
                temperature: Some(140.0),
                intensity: Some(95.0),
                depth: Some(90.0),
            },
            ..warm_light_profile()
        };
        let report = SeasonScorer::builtin().score_profile(&profile);
        assert_eq!(report.temperature.score, Some(100.0));
        assert!(report.temperature.overridden);
        assert!(report.temperature.computed.is_some());
        assert_eq!(report.scores().complete(), Some((100.0, 95.0, 90.0)));
        assert_eq!(report.season.map(|m| m.season), Some(Season::Primavera));
        assert_eq!(report.depth.band, Some(Band::ExtremeHigh));
    }

    #[test]
    fn test_nan_override_ignored() {
        let profile = ColorProfile {
            overrides: DimensionScores {
                depth: Some(f64::NAN),
                ..Default::default()
            },
            ..warm_light_profile()
        };
        let report = SeasonScorer::builtin().score_profile(&profile);
        assert!(!report.depth.overridden);
        assert_eq!(report.depth.score, report.depth.computed);
    }

    #[test]
    fn test_votes_feed_categorical_result() {
        let profile = ColorProfile {
            votes: vec![
                MaskVote::new(Dimension::Temperature, Side::A),
                MaskVote::new(Dimension::Intensity, Side::B),
                MaskVote::new(Dimension::Depth, Side::B),
            ],
            ..Default::default()
        };
        let report = SeasonScorer::builtin().score_profile(&profile);
        assert!(report.vote_result.valid);
        assert_eq!(report.vote_result.season, Some(Season::Outono));
    }

    #[test]
    fn test_duplicate_votes_count_twice() {
        let votes = vec![
            MaskVote::new(Dimension::Temperature, Side::A),
            MaskVote::new(Dimension::Temperature, Side::A),
            MaskVote::new(Dimension::Intensity, Side::A),
            MaskVote::new(Dimension::Depth, Side::A),
        ];
        assert_eq!(
            calculate_category_value(&votes, Dimension::Temperature),
            DimensionValue::SideA
        );
        let profile = ColorProfile {
            votes,
            ..Default::default()
        };
        let report = SeasonScorer::builtin().score_profile(&profile);
        assert!(report.vote_result.valid);
        assert_eq!(report.vote_result.season, Some(Season::Primavera));
    }

    #[test]
    fn test_unknown_region_keys_are_skipped() {
        let json = r##"{ "colors": { "cheek": "#E8B88A", "nose": "#C68642", "hairRoot": "#3B2A1E" } }"##;
        let profile: ColorProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.colors.len(), 2);
        assert_eq!(profile.colors[&FieldId::HairRoot], "#3B2A1E");

        let report = SeasonScorer::builtin().score_profile(&profile);
        assert_eq!(report.temperature.readings.len(), 2);
        assert!(report.scores().complete().is_some());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let scorer = SeasonScorer::builtin();
        let mut profiles = vec![warm_light_profile(), ColorProfile::default()];
        profiles.push(ColorProfile {
            overrides: DimensionScores {
                temperature: Some(5.0),
                intensity: Some(20.0),
                depth: Some(95.0),
            },
            ..Default::default()
        });

        let sequential = scorer.score_profiles(&profiles);
        let parallel = scorer.score_profiles_parallel(&profiles);
        assert_eq!(sequential.len(), parallel.len());
        for (s, p) in sequential.iter().zip(&parallel) {
            assert_eq!(s.scores(), p.scores());
            assert_eq!(s.season, p.season);
            assert_eq!(s.season_two_rule, p.season_two_rule);
        }
        assert_eq!(parallel[2].season_two_rule.map(|m| m.season), Some(Season::Verao));
    }

    #[test]
    fn test_profile_json() {
        let json = r##"{
            "colors": { "cheek": "#E8B88A", "iris": "#6B4E2E" },
            "overrides": { "depth": 20.0 },
            "votes": [ { "dimension": "depth", "side": "B" } ]
        }"##;
        let profile: ColorProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.colors.len(), 2);
        assert_eq!(profile.overrides.depth, Some(20.0));
        assert_eq!(profile.votes[0].pair, 0);

        let report = SeasonScorer::builtin().score_profile(&profile);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["depth"]["score"], 20.0);
        assert_eq!(value["depth"]["overridden"], true);
    }
}
