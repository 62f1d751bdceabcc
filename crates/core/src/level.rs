//! Level module - JSON level descriptions and their validated form
//!
//! A level file holds either a single level object or an array of them:
//!
//! ```json
//! {
//!   "id": 3,
//!   "name": "Crossing",
//!   "type": "timed",
//!   "timeLimit": 60,
//!   "tiles": [
//!     { "gridCol": 7, "gridRow": 7, "direction": "up_left", "unitType": "dog" },
//!     { "id": "w1", "gridCol": 5, "gridRow": 5, "gridColSpan": 2,
//!       "direction": "down_right", "unitType": "wolf" }
//!   ]
//! }
//! ```
//!
//! Parsing is lenient about data an author can get wrong without breaking
//! the level's structure (unknown direction or role strings, zero spans,
//! missing ids) and strict about structure (target count, overlaps,
//! duplicate ids).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::{validate_tiles, Board};
use crate::error::LevelError;
use crate::geometry::{Geometry, Rect};
use crate::tile::{Tile, TileId};
use crate::types::{Direction, LevelKind, Role};

fn one() -> u8 {
    1
}

/// One tile as written in a level file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(alias = "startCol")]
    pub grid_col: i16,
    #[serde(alias = "startRow")]
    pub grid_row: i16,
    #[serde(default = "one", alias = "footprintCols")]
    pub grid_col_span: u8,
    #[serde(default = "one", alias = "footprintRows")]
    pub grid_row_span: u8,
    pub direction: String,
    #[serde(alias = "role")]
    pub unit_type: String,
}

/// One level as written in a level file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelSpec {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
    pub tiles: Vec<TileSpec>,
}

/// Parse a level file body: a single level object or an array of levels
pub fn parse_levels(json: &str) -> Result<Vec<LevelSpec>, LevelError> {
    if json.trim_start().starts_with('[') {
        Ok(serde_json::from_str(json)?)
    } else {
        Ok(vec![serde_json::from_str(json)?])
    }
}

/// Load every level in a file body, validating each
pub fn load_levels(json: &str) -> Result<Vec<Level>, LevelError> {
    parse_levels(json)?.into_iter().map(Level::try_from).collect()
}

/// A structurally valid level: one target, unique ids, no initial overlaps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub id: u32,
    pub name: String,
    pub kind: LevelKind,
    /// Seconds, for timed levels
    pub time_limit: Option<u32>,
    tiles: Vec<Tile>,
    target: usize,
    malformed: Vec<TileId>,
}

impl Level {
    /// Build a level from already-constructed tiles
    pub fn new(id: u32, name: impl Into<String>, tiles: Vec<Tile>) -> Result<Self, LevelError> {
        let target = validate_tiles(&tiles)?;
        let malformed = tiles
            .iter()
            .filter(|t| t.direction.is_none())
            .map(|t| t.id.clone())
            .collect();
        Ok(Self {
            id,
            name: name.into(),
            kind: LevelKind::Normal,
            time_limit: None,
            tiles,
            target,
            malformed,
        })
    }

    pub fn with_kind(mut self, kind: LevelKind, time_limit: Option<u32>) -> Self {
        self.kind = kind;
        self.time_limit = time_limit;
        self
    }

    /// Initial tiles in level order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tiles whose direction could not be understood
    pub fn malformed_tiles(&self) -> &[TileId] {
        &self.malformed
    }

    pub fn target(&self) -> &Tile {
        &self.tiles[self.target]
    }

    pub fn target_index(&self) -> usize {
        self.target
    }

    /// A fresh board in the initial placement
    pub fn board(&self, geometry: Geometry) -> Board {
        Board::from_validated(geometry, self.tiles.clone(), self.target)
    }
}

impl TryFrom<LevelSpec> for Level {
    type Error = LevelError;

    fn try_from(spec: LevelSpec) -> Result<Self, Self::Error> {
        let taken: HashSet<&str> = spec.tiles.iter().filter_map(|t| t.id.as_deref()).collect();
        let mut assigned: HashSet<String> = HashSet::new();
        let mut next = 0usize;

        let mut tiles = Vec::with_capacity(spec.tiles.len());
        for (index, tile) in spec.tiles.iter().enumerate() {
            let id = match &tile.id {
                Some(id) => id.clone(),
                None => {
                    next = next.max(index);
                    loop {
                        let candidate = format!("tile-{next}");
                        next += 1;
                        if !taken.contains(candidate.as_str()) && !assigned.contains(&candidate) {
                            assigned.insert(candidate.clone());
                            break candidate;
                        }
                    }
                }
            };

            let direction = Direction::from_str(&tile.direction);
            if direction.is_none() {
                warn!(
                    level = spec.id,
                    tile = %id,
                    direction = %tile.direction,
                    "unknown tile direction"
                );
            }
            let role = Role::from_str(&tile.unit_type).unwrap_or_else(|| {
                warn!(
                    level = spec.id,
                    tile = %id,
                    role = %tile.unit_type,
                    "unknown tile role, treating as obstacle"
                );
                Role::Obstacle
            });

            let rect = Rect::new(
                tile.grid_col,
                tile.grid_row,
                tile.grid_col_span.max(1),
                tile.grid_row_span.max(1),
            );
            tiles.push(Tile::new(id, rect, direction, role));
        }

        let kind = match spec.kind.as_deref() {
            None => LevelKind::Normal,
            Some(s) => LevelKind::from_str(s).unwrap_or_else(|| {
                warn!(level = spec.id, kind = s, "unknown level type, treating as normal");
                LevelKind::Normal
            }),
        };

        Ok(Level::new(spec.id, spec.name, tiles)?.with_kind(kind, spec.time_limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TileState;

    const SINGLE: &str = r#"{
        "id": 1,
        "name": "First",
        "tiles": [
            { "type": "horizontal", "unitType": "dog", "gridCol": 7, "gridRow": 7,
              "gridColSpan": 1, "gridRowSpan": 1, "direction": "up_left" },
            { "unitType": "wolf", "gridCol": 5, "gridRow": 5, "direction": "down_right" }
        ]
    }"#;

    #[test]
    fn test_parse_single_object() {
        let levels = load_levels(SINGLE).unwrap();
        assert_eq!(levels.len(), 1);
        let level = &levels[0];
        assert_eq!(level.name, "First");
        assert_eq!(level.kind, LevelKind::Normal);
        assert_eq!(level.tiles().len(), 2);
        assert_eq!(level.tiles()[0].id.as_str(), "tile-0");
        assert_eq!(level.tiles()[1].id.as_str(), "tile-1");
        assert!(level.target().is_target());
        assert_eq!(level.target_index(), 0);
        assert!(level.malformed_tiles().is_empty());
    }

    #[test]
    fn test_parse_array_and_kind() {
        let json = format!(
            r#"[{SINGLE}, {{ "id": 2, "type": "timed", "timeLimit": 45, "tiles": [
                {{ "unitType": "target", "gridCol": 7, "gridRow": 7, "direction": "down-left" }}
            ]}}]"#
        );
        let levels = load_levels(&json).unwrap();
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[1].kind, LevelKind::Timed);
        assert_eq!(levels[1].time_limit, Some(45));
        assert_eq!(levels[1].name, "");
    }

    #[test]
    fn test_generated_ids_skip_taken() {
        let json = r#"{ "id": 1, "tiles": [
            { "id": "tile-1", "unitType": "dog", "gridCol": 7, "gridRow": 7, "direction": "up_left" },
            { "unitType": "wolf", "gridCol": 3, "gridRow": 7, "direction": "up_left" },
            { "unitType": "wolf", "gridCol": 11, "gridRow": 7, "direction": "up_left" }
        ]}"#;
        let level = &load_levels(json).unwrap()[0];
        let ids: Vec<&str> = level.tiles().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["tile-1", "tile-2", "tile-3"]);
    }

    #[test]
    fn test_unknown_direction_is_retained_as_malformed() {
        let json = r#"{ "id": 1, "tiles": [
            { "id": "dog", "unitType": "dog", "gridCol": 7, "gridRow": 7, "direction": "sideways" }
        ]}"#;
        let level = &load_levels(json).unwrap()[0];
        assert_eq!(level.malformed_tiles(), &[TileId::from("dog")]);

        let mut board = level.board(Geometry::default());
        let out = board.slide(&"dog".into());
        assert_eq!(out.reason, Some(crate::types::SlideReason::InvalidDirection));
        assert_eq!(board.target().state, TileState::Idle);
    }

    #[test]
    fn test_zero_span_and_unknown_role() {
        let json = r#"{ "id": 1, "tiles": [
            { "unitType": "dog", "gridCol": 7, "gridRow": 7, "direction": "up_left" },
            { "unitType": "cat", "gridCol": 3, "gridRow": 7, "gridColSpan": 0, "direction": "up_left" }
        ]}"#;
        let level = &load_levels(json).unwrap()[0];
        let cat = &level.tiles()[1];
        assert_eq!(cat.role, Role::Obstacle);
        assert_eq!(cat.rect.col_span, 1);
    }

    #[test]
    fn test_structural_errors() {
        let no_target = r#"{ "id": 1, "tiles": [
            { "unitType": "wolf", "gridCol": 7, "gridRow": 7, "direction": "up_left" }
        ]}"#;
        assert!(matches!(load_levels(no_target), Err(LevelError::NoTarget)));

        let overlap = r#"{ "id": 1, "tiles": [
            { "unitType": "dog", "gridCol": 7, "gridRow": 7, "gridColSpan": 2, "direction": "up_left" },
            { "unitType": "wolf", "gridCol": 8, "gridRow": 7, "direction": "up_left" }
        ]}"#;
        assert!(matches!(load_levels(overlap), Err(LevelError::Overlap { .. })));

        assert!(matches!(load_levels("{ nope"), Err(LevelError::Json(_))));
    }
}
