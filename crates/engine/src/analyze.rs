//! Analysis entry point - search, grading and metrics for one level

use tracing::debug;

use tile_escape_core::{Geometry, Level, TileId};

use crate::difficulty::{classify, Difficulty};
use crate::heuristics::{estimate, Estimate};
use crate::metrics::{measure, LevelMetrics};
use crate::search::{solve, CapKind, SearchLimits, SearchReport};
use crate::state::Puzzle;

/// Full validation result for one level
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub level_id: u32,
    pub level_name: String,
    pub report: SearchReport,
    pub estimate: Estimate,
    pub difficulty: Difficulty,
    pub metrics: LevelMetrics,
    /// Tile ids of the shortest solution, in play order
    pub solution_ids: Vec<TileId>,
    pub malformed_tiles: Vec<TileId>,
}

impl Analysis {
    pub fn solved(&self) -> bool {
        self.report.solved
    }

    pub fn move_count(&self) -> Option<usize> {
        self.report.move_count()
    }

    pub fn states_explored(&self) -> usize {
        self.report.states_explored
    }

    pub fn capped_by(&self) -> CapKind {
        self.report.capped_by
    }
}

/// Run the full search on a level and grade it
pub fn analyze(level: &Level, geometry: Geometry, limits: &SearchLimits) -> Analysis {
    let puzzle = Puzzle::from_level(level, geometry);
    let estimate = estimate(&puzzle);
    let report = solve(&puzzle, limits);
    let difficulty = classify(&report, &estimate);
    let metrics = measure(&puzzle, &report, estimate.edge_distance.unwrap_or(0));

    let solution_ids = report
        .solution
        .iter()
        .map(|m| puzzle.pieces()[m.tile].id.clone())
        .collect();

    debug!(
        level = level.id,
        name = %level.name,
        solved = report.solved,
        states = report.states_explored,
        capped_by = report.capped_by.as_str(),
        difficulty = difficulty.as_str(),
        "level analyzed"
    );

    Analysis {
        level_id: level.id,
        level_name: level.name.clone(),
        report,
        estimate,
        difficulty,
        metrics,
        solution_ids,
        malformed_tiles: level.malformed_tiles().to_vec(),
    }
}

/// Heuristic pre-check only, without search
pub fn estimate_level(level: &Level, geometry: Geometry) -> Estimate {
    estimate(&Puzzle::from_level(level, geometry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tile_escape_core::types::Direction;
    use tile_escape_core::{Rect, Tile};

    #[test]
    fn test_analysis_names_solution_tiles() {
        let level = Level::new(
            7,
            "pair",
            vec![
                Tile::target("dog", Rect::new(6, 6, 1, 1), Direction::DownRight),
                Tile::obstacle("wolf", Rect::new(7, 7, 1, 1), Direction::DownRight),
            ],
        )
        .unwrap();
        let a = analyze(&level, Geometry::default(), &SearchLimits::new(1_000, 50));
        assert!(a.solved());
        assert_eq!(a.move_count(), Some(2));
        assert_eq!(a.difficulty, Difficulty::Easy);
        let ids: Vec<&str> = a.solution_ids.iter().map(TileId::as_str).collect();
        assert_eq!(ids, ["wolf", "dog"]);
        assert_eq!(a.level_id, 7);
    }
}
