//! Difficulty classification
//!
//! A found solution is graded by length. An exhausted search is unsolvable.
//! A capped search proves nothing either way, so it falls back to the
//! heuristic estimate.

use tile_escape_core::types::DIFFICULTY_MOVE_LIMITS;

use crate::heuristics::{Estimate, Likelihood};
use crate::search::SearchReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    VeryHard,
    Unsolvable,
    LikelyEasy,
    LikelyMedium,
    LikelyHard,
    Blocked,
}

impl Difficulty {
    /// Grade a solution of `moves` slides
    pub fn from_moves(moves: usize) -> Self {
        let [easy, medium, hard] = DIFFICULTY_MOVE_LIMITS;
        if moves <= easy {
            Difficulty::Easy
        } else if moves <= medium {
            Difficulty::Medium
        } else if moves <= hard {
            Difficulty::Hard
        } else {
            Difficulty::VeryHard
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            "very_hard" => Some(Difficulty::VeryHard),
            "unsolvable" => Some(Difficulty::Unsolvable),
            "likely_easy" => Some(Difficulty::LikelyEasy),
            "likely_medium" => Some(Difficulty::LikelyMedium),
            "likely_hard" => Some(Difficulty::LikelyHard),
            "blocked" => Some(Difficulty::Blocked),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::VeryHard => "very_hard",
            Difficulty::Unsolvable => "unsolvable",
            Difficulty::LikelyEasy => "likely_easy",
            Difficulty::LikelyMedium => "likely_medium",
            Difficulty::LikelyHard => "likely_hard",
            Difficulty::Blocked => "blocked",
        }
    }

    /// Human-readable label for reports
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::VeryHard => "Very Hard",
            Difficulty::Unsolvable => "Unsolvable",
            Difficulty::LikelyEasy => "Easy (likely)",
            Difficulty::LikelyMedium => "Medium (likely)",
            Difficulty::LikelyHard => "Hard (needs deeper search)",
            Difficulty::Blocked => "Unknown (blocked)",
        }
    }

    /// Whether this grade rests on a completed search rather than the estimate
    pub fn is_proven(&self) -> bool {
        matches!(
            self,
            Difficulty::Easy
                | Difficulty::Medium
                | Difficulty::Hard
                | Difficulty::VeryHard
                | Difficulty::Unsolvable
        )
    }
}

impl From<Likelihood> for Difficulty {
    fn from(value: Likelihood) -> Self {
        match value {
            Likelihood::LikelyEasy => Difficulty::LikelyEasy,
            Likelihood::LikelyMedium => Difficulty::LikelyMedium,
            Likelihood::LikelyHard => Difficulty::LikelyHard,
            Likelihood::Blocked => Difficulty::Blocked,
        }
    }
}

pub fn classify(report: &SearchReport, estimate: &Estimate) -> Difficulty {
    match report.move_count() {
        Some(moves) => Difficulty::from_moves(moves),
        None if report.is_exhausted() => Difficulty::Unsolvable,
        None => estimate.likelihood.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::search::CapKind;
    use crate::state::Move;

    fn report(solved: bool, moves: usize, capped_by: CapKind) -> SearchReport {
        let mv = Move {
            tile: 0,
            from: (7, 7),
            to: (6, 6),
            exited: false,
        };
        SearchReport {
            solved,
            solution: vec![mv; moves],
            states_explored: 10,
            capped_by,
            elapsed: Duration::ZERO,
        }
    }

    fn estimate(likelihood: Likelihood) -> Estimate {
        Estimate {
            edge_distance: Some(3),
            target_moves: 1,
            total_moves: 2,
            likelihood,
        }
    }

    #[test]
    fn test_move_thresholds() {
        assert_eq!(Difficulty::from_moves(1), Difficulty::Easy);
        assert_eq!(Difficulty::from_moves(10), Difficulty::Easy);
        assert_eq!(Difficulty::from_moves(11), Difficulty::Medium);
        assert_eq!(Difficulty::from_moves(20), Difficulty::Medium);
        assert_eq!(Difficulty::from_moves(30), Difficulty::Hard);
        assert_eq!(Difficulty::from_moves(31), Difficulty::VeryHard);
    }

    #[test]
    fn test_capped_search_falls_back_to_estimate() {
        let e = estimate(Likelihood::LikelyMedium);
        assert_eq!(
            classify(&report(false, 0, CapKind::States), &e),
            Difficulty::LikelyMedium
        );
        assert_eq!(
            classify(&report(false, 0, CapKind::None), &e),
            Difficulty::Unsolvable
        );
        assert_eq!(
            classify(&report(true, 12, CapKind::None), &e),
            Difficulty::Medium
        );
    }

    #[test]
    fn test_strings_round_trip() {
        let d = Difficulty::VeryHard;
        assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        assert!(!Difficulty::Blocked.is_proven());
    }
}
