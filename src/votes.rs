//! Mask Vote Aggregation
//!
//! During draping the subject is shown pairs of masks per dimension (gold vs
//! silver, vivid vs muted, light vs deep) and the operator selects the side
//! that flatters. Votes are kept as a plain list; toggling an identical vote
//! removes it and both sides of a pair may be selected at once.
//!
//! Dimension values are always recomputed from the full list.

use serde::{Deserialize, Serialize};

use crate::season::{detect_season, SeasonResult};
use crate::types::{DepthValue, Dimension, IntensityValue, Pole, Side, TemperatureValue};

/// A single mask selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaskVote {
    pub dimension: Dimension,
    /// Which mask pair of the dimension was compared
    #[serde(default)]
    pub pair: u8,
    pub side: Side,
}

impl MaskVote {
    pub fn new(dimension: Dimension, side: Side) -> Self {
        Self { dimension, pair: 0, side }
    }

    pub fn for_pair(dimension: Dimension, pair: u8, side: Side) -> Self {
        Self { dimension, pair, side }
    }
}

/// Per-side tally for one dimension
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteCount {
    pub a: usize,
    pub b: usize,
}

/// Categorical result of aggregating one dimension's votes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionValue {
    SideA,
    SideB,
    Neutral,
    Unset,
}

impl DimensionValue {
    /// Side A masks are the warm, bright and light ones
    pub fn pole(&self) -> Option<Pole> {
        match self {
            DimensionValue::SideA => Some(Pole::High),
            DimensionValue::SideB => Some(Pole::Low),
            DimensionValue::Neutral | DimensionValue::Unset => None,
        }
    }

    pub fn is_neutral(&self) -> bool {
        matches!(self, DimensionValue::Neutral)
    }
}

pub fn count_votes(votes: &[MaskVote], dimension: Dimension) -> VoteCount {
    votes
        .iter()
        .filter(|v| v.dimension == dimension)
        .fold(VoteCount::default(), |mut count, v| {
            match v.side {
                Side::A => count.a += 1,
                Side::B => count.b += 1,
            }
            count
        })
}

/// Aggregate a dimension's votes
///
/// - no votes: Unset
/// - only one side voted: that side
/// - equal counts: Neutral
/// - otherwise: the side with more votes
pub fn calculate_category_value(votes: &[MaskVote], dimension: Dimension) -> DimensionValue {
    value_from_count(count_votes(votes, dimension))
}

fn value_from_count(count: VoteCount) -> DimensionValue {
    match (count.a, count.b) {
        (0, 0) => DimensionValue::Unset,
        (_, 0) => DimensionValue::SideA,
        (0, _) => DimensionValue::SideB,
        (a, b) if a == b => DimensionValue::Neutral,
        (a, b) if a > b => DimensionValue::SideA,
        _ => DimensionValue::SideB,
    }
}

/// Categorical triple for the season resolver
///
/// Neutral dimensions become `Neutro` and unset ones `Indefinido`.
pub fn categorical_values(votes: &[MaskVote]) -> (TemperatureValue, IntensityValue, DepthValue) {
    let decision = |dimension: Dimension| {
        let value = calculate_category_value(votes, dimension);
        (value.pole(), value.is_neutral())
    };
    let (temperature, temperature_tied) = decision(Dimension::Temperature);
    let (intensity, intensity_tied) = decision(Dimension::Intensity);
    let (depth, depth_tied) = decision(Dimension::Depth);

    (
        TemperatureValue::from_decision(temperature, temperature_tied),
        IntensityValue::from_decision(intensity, intensity_tied),
        DepthValue::from_decision(depth, depth_tied),
    )
}

/// Resolve the season from a vote list taken as-is
pub fn detect_season_from_votes(votes: &[MaskVote]) -> SeasonResult {
    let (temperature, intensity, depth) = categorical_values(votes);
    detect_season(temperature, intensity, depth)
}

/// Caller-held vote list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteBoard {
    votes: Vec<MaskVote>,
}

impl VoteBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board holding `votes` exactly as given (duplicates are kept)
    pub fn from_votes(votes: Vec<MaskVote>) -> Self {
        Self { votes }
    }

    /// Remove `vote` if already selected, otherwise append it.
    /// Returns true when the vote is selected afterwards.
    pub fn toggle(&mut self, vote: MaskVote) -> bool {
        if let Some(idx) = self.votes.iter().position(|v| *v == vote) {
            self.votes.remove(idx);
            false
        } else {
            self.votes.push(vote);
            true
        }
    }

    pub fn votes(&self) -> &[MaskVote] {
        &self.votes
    }

    pub fn is_selected(&self, vote: &MaskVote) -> bool {
        self.votes.contains(vote)
    }

    pub fn value(&self, dimension: Dimension) -> DimensionValue {
        calculate_category_value(&self.votes, dimension)
    }

    pub fn categorical(&self) -> (TemperatureValue, IntensityValue, DepthValue) {
        categorical_values(&self.votes)
    }

    /// Resolve the season from the current votes
    pub fn detect_season(&self) -> SeasonResult {
        detect_season_from_votes(&self.votes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vote(d: Dimension, side: Side) -> MaskVote {
        MaskVote::new(d, side)
    }

    #[test]
    fn test_unset_without_votes() {
        assert_eq!(calculate_category_value(&[], Dimension::Depth), DimensionValue::Unset);
    }

    #[test]
    fn test_single_side() {
        let votes = [vote(Dimension::Temperature, Side::B)];
        assert_eq!(calculate_category_value(&votes, Dimension::Temperature), DimensionValue::SideB);
        // Other dimensions unaffected
        assert_eq!(calculate_category_value(&votes, Dimension::Intensity), DimensionValue::Unset);
    }

    #[test]
    fn test_tie_is_neutral() {
        let votes = [
            vote(Dimension::Intensity, Side::A),
            vote(Dimension::Intensity, Side::B),
        ];
        assert_eq!(calculate_category_value(&votes, Dimension::Intensity), DimensionValue::Neutral);

        let votes = [
            MaskVote::for_pair(Dimension::Intensity, 0, Side::A),
            MaskVote::for_pair(Dimension::Intensity, 1, Side::A),
            MaskVote::for_pair(Dimension::Intensity, 0, Side::B),
            MaskVote::for_pair(Dimension::Intensity, 1, Side::B),
        ];
        assert_eq!(calculate_category_value(&votes, Dimension::Intensity), DimensionValue::Neutral);
    }

    #[test]
    fn test_majority_wins() {
        let votes = [
            MaskVote::for_pair(Dimension::Depth, 0, Side::A),
            MaskVote::for_pair(Dimension::Depth, 1, Side::A),
            MaskVote::for_pair(Dimension::Depth, 2, Side::B),
        ];
        assert_eq!(count_votes(&votes, Dimension::Depth), VoteCount { a: 2, b: 1 });
        assert_eq!(calculate_category_value(&votes, Dimension::Depth), DimensionValue::SideA);
    }

    #[test]
    fn test_toggle_removes_identical_vote() {
        let mut board = VoteBoard::new();
        let warm = vote(Dimension::Temperature, Side::A);
        assert!(board.toggle(warm));
        assert!(board.is_selected(&warm));
        assert!(!board.toggle(warm));
        assert!(board.votes().is_empty());
        assert_eq!(board.value(Dimension::Temperature), DimensionValue::Unset);
    }

    #[test]
    fn test_both_sides_selectable() {
        let mut board = VoteBoard::new();
        board.toggle(vote(Dimension::Temperature, Side::A));
        board.toggle(vote(Dimension::Temperature, Side::B));
        assert_eq!(board.votes().len(), 2);
        assert_eq!(board.value(Dimension::Temperature), DimensionValue::Neutral);

        // Deselecting one side resolves the tie
        board.toggle(vote(Dimension::Temperature, Side::B));
        assert_eq!(board.value(Dimension::Temperature), DimensionValue::SideA);
    }

    #[test]
    fn test_board_resolves_season() {
        let board = VoteBoard::from_votes(vec![
            vote(Dimension::Temperature, Side::B),
            vote(Dimension::Intensity, Side::B),
            vote(Dimension::Depth, Side::A),
        ]);
        assert_eq!(
            board.categorical(),
            (TemperatureValue::Frio, IntensityValue::Suave, DepthValue::Claro)
        );
        let result = board.detect_season();
        assert!(result.valid);
    }

    #[test]
    fn test_duplicates_in_list_are_not_toggles() {
        let votes = vec![
            vote(Dimension::Temperature, Side::A),
            vote(Dimension::Temperature, Side::A),
            vote(Dimension::Intensity, Side::A),
            vote(Dimension::Depth, Side::A),
        ];
        let board = VoteBoard::from_votes(votes.clone());
        assert_eq!(board.votes().len(), 4);
        assert_eq!(board.value(Dimension::Temperature), DimensionValue::SideA);
        assert_eq!(
            categorical_values(&votes),
            (TemperatureValue::Quente, IntensityValue::Brilhante, DepthValue::Claro)
        );
        assert!(detect_season_from_votes(&votes).valid);
    }

    #[test]
    fn test_board_with_tie_is_invalid() {
        let board = VoteBoard::from_votes(vec![
            vote(Dimension::Temperature, Side::A),
            vote(Dimension::Intensity, Side::A),
            vote(Dimension::Depth, Side::A),
            vote(Dimension::Depth, Side::B),
        ]);
        let result = board.detect_season();
        assert!(!result.valid);
        assert_eq!(board.categorical().2, DepthValue::Neutro);
    }
}
