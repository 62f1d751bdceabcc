//! Report rows for the level-validation tool
//!
//! One row per analyzed level, rendered either as a text line or as a JSON
//! object with camelCase keys.

use std::fmt;

use serde::Serialize;

use crate::core::Level;
use crate::engine::{Analysis, Estimate};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelRow {
    pub file: String,
    pub id: u32,
    pub name: String,
    pub solved: bool,
    pub move_count: Option<usize>,
    pub states_explored: usize,
    pub capped_by: &'static str,
    pub difficulty: &'static str,
    #[serde(skip)]
    pub difficulty_label: &'static str,
    pub difficulty_score: f64,
    pub malformed_tiles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<Vec<String>>,
}

impl LevelRow {
    pub fn new(file: impl Into<String>, analysis: &Analysis, with_solution: bool) -> Self {
        Self {
            file: file.into(),
            id: analysis.level_id,
            name: analysis.level_name.clone(),
            solved: analysis.solved(),
            move_count: analysis.move_count(),
            states_explored: analysis.states_explored(),
            capped_by: analysis.capped_by().as_str(),
            difficulty: analysis.difficulty.as_str(),
            difficulty_label: analysis.difficulty.label(),
            difficulty_score: analysis.metrics.difficulty_score,
            malformed_tiles: analysis
                .malformed_tiles
                .iter()
                .map(|id| id.to_string())
                .collect(),
            solution: with_solution.then(|| {
                analysis
                    .solution_ids
                    .iter()
                    .map(|id| id.to_string())
                    .collect()
            }),
        }
    }
}

impl fmt::Display for LevelRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{} {:?}: ", self.file, self.id, self.name)?;
        match self.move_count {
            Some(moves) => write!(f, "SOLVABLE in {moves} moves")?,
            None if self.capped_by == "none" => write!(f, "UNSOLVABLE (exhausted)")?,
            None => write!(f, "UNKNOWN (capped by {})", self.capped_by)?,
        }
        write!(
            f,
            ", {} states, difficulty {} (score {:.1})",
            self.states_explored, self.difficulty_label, self.difficulty_score
        )?;
        if !self.malformed_tiles.is_empty() {
            write!(f, ", malformed tiles: {}", self.malformed_tiles.join(","))?;
        }
        if let Some(solution) = &self.solution {
            if !solution.is_empty() {
                write!(f, "\n  solution: {}", solution.join(" -> "))?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRow {
    pub file: String,
    pub id: u32,
    pub name: String,
    pub edge_distance: Option<u32>,
    pub target_moves: usize,
    pub total_moves: usize,
    pub likelihood: &'static str,
}

impl EstimateRow {
    pub fn new(file: impl Into<String>, level: &Level, estimate: &Estimate) -> Self {
        Self {
            file: file.into(),
            id: level.id,
            name: level.name.clone(),
            edge_distance: estimate.edge_distance,
            target_moves: estimate.target_moves,
            total_moves: estimate.total_moves,
            likelihood: estimate.likelihood.as_str(),
        }
    }
}

impl fmt::Display for EstimateRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edge = self
            .edge_distance
            .map_or_else(|| "-".to_string(), |d| d.to_string());
        write!(
            f,
            "{} #{} {:?}: {} (edge distance {}, target moves {}, total moves {})",
            self.file,
            self.id,
            self.name,
            self.likelihood,
            edge,
            self.target_moves,
            self.total_moves
        )
    }
}

/// Totals across every validated level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub levels: usize,
    pub solvable: usize,
    pub unsolvable: usize,
    pub capped: usize,
}

impl Summary {
    pub fn record(&mut self, row: &LevelRow) {
        self.levels += 1;
        if row.solved {
            self.solvable += 1;
        } else if row.capped_by == "none" {
            self.unsolvable += 1;
        } else {
            self.capped += 1;
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} levels: {} solvable, {} unsolvable, {} undecided within limits",
            self.levels, self.solvable, self.unsolvable, self.capped
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Direction;
    use crate::core::{Geometry, Rect, Tile};
    use crate::engine::{analyze, SearchLimits};

    fn analysis() -> Analysis {
        let level = Level::new(
            4,
            "pair",
            vec![
                Tile::target("dog", Rect::new(6, 6, 1, 1), Direction::DownRight),
                Tile::obstacle("wolf", Rect::new(7, 7, 1, 1), Direction::DownRight),
            ],
        )
        .unwrap();
        analyze(&level, Geometry::default(), &SearchLimits::new(1_000, 50))
    }

    #[test]
    fn test_json_row_uses_camel_case() {
        let row = LevelRow::new("levels/a.json", &analysis(), false);
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["moveCount"], 2);
        assert_eq!(value["statesExplored"], row.states_explored);
        assert_eq!(value["cappedBy"], "none");
        assert_eq!(value["difficulty"], "easy");
        assert!(value.get("difficultyLabel").is_none());
        assert!(value.get("solution").is_none());
    }

    #[test]
    fn test_text_row_and_summary() {
        let row = LevelRow::new("a.json", &analysis(), true);
        let line = row.to_string();
        assert!(line.contains("SOLVABLE in 2 moves"));
        assert!(line.contains("wolf -> dog"));
        assert!(line.contains("difficulty Easy (score"));

        let mut summary = Summary::default();
        summary.record(&row);
        assert_eq!(summary.solvable, 1);
        assert!(summary.to_string().starts_with("1 levels"));
    }
}
