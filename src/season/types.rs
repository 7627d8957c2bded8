//! Season, variant and result types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{Dimension, Pole};

/// One of the four broad color seasons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Primavera,
    #[serde(rename = "Verão")]
    Verao,
    Outono,
    Inverno,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Primavera, Season::Verao, Season::Outono, Season::Inverno];

    pub fn name(&self) -> &'static str {
        match self {
            Season::Primavera => "Primavera",
            Season::Verao => "Verão",
            Season::Outono => "Outono",
            Season::Inverno => "Inverno",
        }
    }

    /// Poles indexed by `Dimension::index()`: (temperature, intensity, depth)
    ///
    /// - Primavera: warm, bright, light
    /// - Verão: cool, soft, light
    /// - Outono: warm, soft, deep
    /// - Inverno: cool, bright, deep
    pub fn profile(&self) -> [Pole; 3] {
        match self {
            Season::Primavera => [Pole::High, Pole::High, Pole::High],
            Season::Verao => [Pole::Low, Pole::Low, Pole::High],
            Season::Outono => [Pole::High, Pole::Low, Pole::Low],
            Season::Inverno => [Pole::Low, Pole::High, Pole::Low],
        }
    }

    /// The season whose profile is exactly `poles`, if any
    pub fn from_profile(poles: [Pole; 3]) -> Option<Season> {
        Season::ALL.into_iter().find(|s| s.profile() == poles)
    }

    pub fn pole(&self, dimension: Dimension) -> Pole {
        self.profile()[dimension.index()]
    }

    /// Variant used when only categorical values are known
    pub fn default_variant(&self) -> Variant {
        Variant::for_dimension(Dimension::Intensity, self.pole(Dimension::Intensity))
    }

    fn is_feminine(&self) -> bool {
        matches!(self, Season::Primavera)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sub-variant named after the season's dominant pole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Warm,
    Cool,
    Bright,
    Soft,
    Light,
    Deep,
}

impl Variant {
    pub fn for_dimension(dimension: Dimension, pole: Pole) -> Variant {
        match (dimension, pole) {
            (Dimension::Temperature, Pole::High) => Variant::Warm,
            (Dimension::Temperature, Pole::Low) => Variant::Cool,
            (Dimension::Intensity, Pole::High) => Variant::Bright,
            (Dimension::Intensity, Pole::Low) => Variant::Soft,
            (Dimension::Depth, Pole::High) => Variant::Light,
            (Dimension::Depth, Pole::Low) => Variant::Deep,
        }
    }

    /// Label in agreement with the season's gender
    pub fn label(&self, season: Season) -> &'static str {
        let feminine = season.is_feminine();
        match self {
            Variant::Warm => "Quente",
            Variant::Cool => if feminine { "Fria" } else { "Frio" },
            Variant::Bright => "Brilhante",
            Variant::Soft => "Suave",
            Variant::Light => if feminine { "Clara" } else { "Claro" },
            Variant::Deep => if feminine { "Profunda" } else { "Profundo" },
        }
    }
}

/// A resolved season and variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeasonMatch {
    pub season: Season,
    pub variant: Variant,
}

impl SeasonMatch {
    pub fn new(season: Season, variant: Variant) -> Self {
        Self { season, variant }
    }

    pub fn variant_label(&self) -> &'static str {
        self.variant.label(self.season)
    }

    /// Full name, e.g. "Primavera Brilhante"
    pub fn name(&self) -> String {
        format!("{} {}", self.season.name(), self.variant_label())
    }
}

impl fmt::Display for SeasonMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.season.name(), self.variant_label())
    }
}

/// Guidance attached to an unresolved result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub message: String,
    /// Season reachable by following the suggestion, if it names one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<SeasonMatch>,
    /// Number of dimensions that change
    pub flips: usize,
    /// Dimensions to change or decide
    pub changes: Vec<Dimension>,
}

/// Outcome of the categorical resolver
///
/// `valid` is true exactly when `season` and `variant` are set and
/// `suggestions` is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<Suggestion>>,
}

impl SeasonResult {
    pub fn matched(found: SeasonMatch) -> Self {
        Self {
            valid: true,
            season: Some(found.season),
            variant: Some(found.variant),
            suggestions: None,
        }
    }

    pub fn unresolved(suggestions: Vec<Suggestion>) -> Self {
        Self {
            valid: false,
            season: None,
            variant: None,
            suggestions: Some(suggestions),
        }
    }

    pub fn season_match(&self) -> Option<SeasonMatch> {
        Some(SeasonMatch::new(self.season?, self.variant?))
    }

    pub fn variant_label(&self) -> Option<&'static str> {
        self.season_match().map(|m| m.variant_label())
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        self.suggestions.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_are_distinct() {
        for (i, a) in Season::ALL.iter().enumerate() {
            for b in &Season::ALL[i + 1..] {
                assert_ne!(a.profile(), b.profile());
            }
            assert_eq!(Season::from_profile(a.profile()), Some(*a));
        }
    }

    #[test]
    fn test_twelve_named_variants() {
        let names: Vec<String> = Season::ALL
            .iter()
            .flat_map(|s| {
                Dimension::ALL.map(|d| SeasonMatch::new(*s, Variant::for_dimension(d, s.pole(d))).name())
            })
            .collect();
        assert_eq!(names.len(), 12);
        assert!(names.contains(&"Primavera Clara".to_string()));
        assert!(names.contains(&"Verão Frio".to_string()));
        assert!(names.contains(&"Outono Profundo".to_string()));
        assert!(names.contains(&"Inverno Brilhante".to_string()));
    }

    #[test]
    fn test_result_invariant() {
        let ok = SeasonResult::matched(SeasonMatch::new(Season::Outono, Variant::Soft));
        assert!(ok.valid && ok.season.is_some() && ok.variant.is_some() && ok.suggestions.is_none());

        let bad = SeasonResult::unresolved(vec![]);
        assert!(!bad.valid && bad.season.is_none() && bad.suggestions.is_some());
    }

    #[test]
    fn test_serialized_shape() {
        let ok = SeasonResult::matched(SeasonMatch::new(Season::Verao, Variant::Light));
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["season"], "Verão");
        assert_eq!(json["variant"], "light");
        assert!(json.get("suggestions").is_none());
    }
}
