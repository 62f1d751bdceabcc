//! Auxiliary level metrics and the composite difficulty score
//!
//! The composite score blends solution length, initial branching, obstacle
//! density, how close the target starts to the edge, search effort and the
//! average slide length, damped by how many options the player starts with:
//!
//! ```text
//! (2*optimal + 0.5*branching + 100*density + 1.5*(10 - edge)
//!    + 0.02*states + 0.5*path) / (average_options + 1)
//! ```
//!
//! It is reported next to the move-count grade and never replaces it.

use crate::search::SearchReport;
use crate::state::Puzzle;

/// Coarse bands over the composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    VeryEasy,
    Easy,
    Medium,
    Hard,
    VeryHard,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score < 10.0 {
            ScoreBand::VeryEasy
        } else if score < 25.0 {
            ScoreBand::Easy
        } else if score < 45.0 {
            ScoreBand::Medium
        } else if score < 70.0 {
            ScoreBand::Hard
        } else {
            ScoreBand::VeryHard
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::VeryEasy => "very_easy",
            ScoreBand::Easy => "easy",
            ScoreBand::Medium => "medium",
            ScoreBand::Hard => "hard",
            ScoreBand::VeryHard => "very_hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelMetrics {
    pub tile_count: usize,
    pub obstacle_count: usize,
    /// Legal moves in the starting configuration
    pub branching_factor: usize,
    /// Obstacles per playable diamond cell
    pub obstacle_density: f64,
    /// Legal moves per tile in the starting configuration
    pub average_move_options: f64,
    pub target_edge_distance: u32,
    /// Mean straight-line length of the solution's slides; 0 when unsolved
    pub path_complexity: f64,
    pub difficulty_score: f64,
}

impl LevelMetrics {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.difficulty_score)
    }
}

pub fn path_complexity(report: &SearchReport) -> f64 {
    if report.solution.is_empty() {
        return 0.0;
    }
    let total: f64 = report.solution.iter().map(|m| m.length()).sum();
    total / report.solution.len() as f64
}

pub fn measure(puzzle: &Puzzle, report: &SearchReport, edge_distance: u32) -> LevelMetrics {
    let tile_count = puzzle.len();
    let obstacle_count = puzzle.pieces().iter().filter(|p| !p.role.is_target()).count();
    let branching_factor = puzzle.branching(puzzle.initial_state());

    let cells = puzzle.geometry().diamond_cells();
    let obstacle_density = if cells == 0 {
        0.0
    } else {
        obstacle_count as f64 / cells as f64
    };
    let average_move_options = if tile_count == 0 {
        0.0
    } else {
        branching_factor as f64 / tile_count as f64
    };
    let path_complexity = path_complexity(report);
    let optimal = report.move_count().unwrap_or(0) as f64;

    let raw = 2.0 * optimal
        + 0.5 * branching_factor as f64
        + 100.0 * obstacle_density
        + 1.5 * (10.0 - edge_distance as f64)
        + 0.02 * report.states_explored as f64
        + 0.5 * path_complexity;

    LevelMetrics {
        tile_count,
        obstacle_count,
        branching_factor,
        obstacle_density,
        average_move_options,
        target_edge_distance: edge_distance,
        path_complexity,
        difficulty_score: raw / (average_move_options + 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{solve, SearchLimits};
    use tile_escape_core::types::Direction;
    use tile_escape_core::{Geometry, Level, Rect, Tile};

    #[test]
    fn test_single_tile_metrics() {
        let level = Level::new(
            1,
            "t",
            vec![Tile::target("t", Rect::new(4, 4, 1, 1), Direction::UpLeft)],
        )
        .unwrap();
        let p = Puzzle::from_level(&level, Geometry::default());
        let r = solve(&p, &SearchLimits::new(100, 10));
        let m = measure(&p, &r, 1);

        assert_eq!(m.tile_count, 1);
        assert_eq!(m.obstacle_count, 0);
        assert_eq!(m.branching_factor, 1);
        assert_eq!(m.obstacle_density, 0.0);
        assert_eq!(m.average_move_options, 1.0);
        // One exit move with distance 1 leaves the tile at (3,3).
        assert!((m.path_complexity - 2f64.sqrt()).abs() < 1e-9);
        let expected =
            (2.0 + 0.5 + 13.5 + 0.02 * r.states_explored as f64 + 0.5 * 2f64.sqrt()) / 2.0;
        assert!((m.difficulty_score - expected).abs() < 1e-9);
        assert_eq!(m.band(), ScoreBand::VeryEasy);
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(9.9), ScoreBand::VeryEasy);
        assert_eq!(ScoreBand::from_score(25.0), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_score(70.0), ScoreBand::VeryHard);
    }
}
