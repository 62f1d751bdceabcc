//! Cheap solvability pre-check
//!
//! Looks only at the target in the starting configuration: how many steps it
//! would travel on an empty board before exiting along its own direction, and
//! whether it can move right now. No search is run.

use tile_escape_core::types::{LIKELY_EASY_DISTANCE, LIKELY_MEDIUM_DISTANCE};
use tile_escape_core::{resolve_slide, NoopObserver, Resolution};

use crate::state::Puzzle;

/// Coarse verdict from the pre-check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Likelihood {
    LikelyEasy,
    LikelyMedium,
    LikelyHard,
    Blocked,
}

impl Likelihood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Likelihood::LikelyEasy => "likely_easy",
            Likelihood::LikelyMedium => "likely_medium",
            Likelihood::LikelyHard => "likely_hard",
            Likelihood::Blocked => "blocked",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    /// Empty-board steps from the target to the region edge in its direction;
    /// `None` when the target has no valid direction
    pub edge_distance: Option<u32>,
    /// Legal moves currently available to the target (0 or 1)
    pub target_moves: usize,
    /// Legal moves currently available to any tile
    pub total_moves: usize,
    pub likelihood: Likelihood,
}

/// Steps the target travels before exiting if nothing else were on the board
pub fn edge_distance(puzzle: &Puzzle) -> Option<u32> {
    let target = puzzle.target();
    let state = puzzle.initial_state();
    let rect = puzzle.rect(state, target);
    match resolve_slide(
        puzzle.geometry(),
        rect,
        puzzle.pieces()[target].direction,
        |_| false,
        &mut NoopObserver,
    ) {
        Resolution::Exited { distance, .. } => Some(distance),
        Resolution::Rejected(reason) if reason.is_blocked() => Some(0),
        // On an empty board the march can only exit or be rejected.
        _ => None,
    }
}

pub fn estimate(puzzle: &Puzzle) -> Estimate {
    let state = puzzle.initial_state();
    let target_moves = usize::from(puzzle.resolve(state, puzzle.target()).moved());
    let total_moves = puzzle.branching(state);
    let edge_distance = edge_distance(puzzle);

    let likelihood = match (edge_distance, target_moves > 0) {
        (_, false) => Likelihood::Blocked,
        (Some(d), true) if d <= LIKELY_EASY_DISTANCE => Likelihood::LikelyEasy,
        (Some(d), true) if d <= LIKELY_MEDIUM_DISTANCE => Likelihood::LikelyMedium,
        (_, true) => Likelihood::LikelyHard,
    };

    Estimate {
        edge_distance,
        target_moves,
        total_moves,
        likelihood,
    }
}
