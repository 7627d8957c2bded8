//! Suggestion generation for unresolved categorical results
//!
//! Two situations leave the categorical resolver without a season:
//! - one or more dimensions are neutral (tied votes) or unset
//! - every dimension is decided but the combination matches no season
//!
//! Both produce guidance instead of an error.

use crate::types::{Dimension, Pole};

use super::types::{Season, SeasonMatch, Suggestion};

/// Alternatives offered beyond the minimal-flip set
pub const EXTRA_ALTERNATIVES: usize = 2;

/// Whether an undecided dimension is tied or has never been voted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Undecided {
    Neutral,
    Unset,
}

fn pole_name(dimension: Dimension, pole: Pole) -> &'static str {
    let (high, low) = dimension.pole_names();
    match pole {
        Pole::High => high,
        Pole::Low => low,
    }
}

fn join_changes(changes: &[(Dimension, Pole)]) -> String {
    let parts: Vec<String> = changes
        .iter()
        .map(|(d, p)| format!("{} para {}", d.display_name(), pole_name(*d, *p)))
        .collect();
    match parts.len() {
        0 => String::new(),
        1 => parts[0].clone(),
        n => format!("{} e {}", parts[..n - 1].join(", "), parts[n - 1]),
    }
}

/// Guidance for neutral or unset dimensions
///
/// One message per undecided dimension explaining how to break the tie,
/// followed by the seasons still compatible with the decided dimensions.
pub fn undecided_suggestions(
    poles: [Option<Pole>; 3],
    undecided: &[(Dimension, Undecided)],
) -> Vec<Suggestion> {
    let mut suggestions: Vec<Suggestion> = undecided
        .iter()
        .map(|&(dimension, state)| {
            let (high, low) = dimension.pole_names();
            let message = match state {
                Undecided::Neutral => format!(
                    "{} está neutra: as máscaras {} e {} empataram. Repita a comparação e escolha apenas um lado para desempatar.",
                    dimension.display_name(),
                    high,
                    low
                ),
                Undecided::Unset => format!(
                    "{} não foi avaliada: compare as máscaras {} e {} para definir este eixo.",
                    dimension.display_name(),
                    high,
                    low
                ),
            };
            Suggestion {
                message,
                target: None,
                flips: 0,
                changes: vec![dimension],
            }
        })
        .collect();

    let open: Vec<Dimension> = undecided.iter().map(|(d, _)| *d).collect();

    for season in Season::ALL {
        let profile = season.profile();
        let compatible = Dimension::ALL
            .iter()
            .all(|d| poles[d.index()].map_or(true, |p| p == profile[d.index()]));
        if !compatible {
            continue;
        }

        let target = SeasonMatch::new(season, season.default_variant());
        let settings: Vec<(Dimension, Pole)> =
            open.iter().map(|d| (*d, profile[d.index()])).collect();

        suggestions.push(Suggestion {
            message: format!("Definindo {}, a estação seria {}.", join_changes(&settings), target),
            target: Some(target),
            flips: open.len(),
            changes: open.clone(),
        });
    }

    suggestions
}

/// Ranked alternatives for a decided combination that matches no season
///
/// Candidates are sorted by how many dimensions must flip. All candidates
/// with the minimal flip count are kept, plus up to `EXTRA_ALTERNATIVES`
/// more in rank order.
pub fn ranked_suggestions(poles: [Pole; 3]) -> Vec<Suggestion> {
    let mut candidates: Vec<(Season, Vec<(Dimension, Pole)>)> = Season::ALL
        .iter()
        .map(|season| {
            let profile = season.profile();
            let changes: Vec<(Dimension, Pole)> = Dimension::ALL
                .iter()
                .filter(|d| poles[d.index()] != profile[d.index()])
                .map(|d| (*d, profile[d.index()]))
                .collect();
            (*season, changes)
        })
        .collect();

    // Stable: equal flip counts keep season order
    candidates.sort_by_key(|(_, changes)| changes.len());

    let Some(minimal) = candidates.first().map(|(_, c)| c.len()) else {
        return Vec::new();
    };
    let n_minimal = candidates.iter().filter(|(_, c)| c.len() == minimal).count();

    candidates
        .into_iter()
        .take(n_minimal + EXTRA_ALTERNATIVES)
        .map(|(season, changes)| {
            let target = SeasonMatch::new(season, season.default_variant());
            Suggestion {
                message: format!("{}: altere {}.", target, join_changes(&changes)),
                target: Some(target),
                flips: changes.len(),
                changes: changes.iter().map(|(d, _)| *d).collect(),
            }
        })
        .collect()
}
