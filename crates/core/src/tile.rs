//! Tile module - movable rectangular pieces

use std::fmt;

use crate::geometry::Rect;
use crate::types::{Direction, Role, TileState};

/// Opaque tile identifier, stable for the tile's lifetime
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(String);

impl TileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TileId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TileId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A movable piece on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    /// Top-left anchor plus footprint
    pub rect: Rect,
    /// `None` when the level described a direction that is not one of the four diagonals
    pub direction: Option<Direction>,
    pub role: Role,
    pub state: TileState,
}

impl Tile {
    /// Create an Idle tile
    pub fn new(
        id: impl Into<TileId>,
        rect: Rect,
        direction: Option<Direction>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            rect,
            direction,
            role,
            state: TileState::Idle,
        }
    }

    /// Shorthand for an obstacle with a valid direction
    pub fn obstacle(id: impl Into<TileId>, rect: Rect, direction: Direction) -> Self {
        Self::new(id, rect, Some(direction), Role::Obstacle)
    }

    /// Shorthand for the target with a valid direction
    pub fn target(id: impl Into<TileId>, rect: Rect, direction: Direction) -> Self {
        Self::new(id, rect, Some(direction), Role::Target)
    }

    pub fn col(&self) -> i16 {
        self.rect.col
    }

    pub fn row(&self) -> i16 {
        self.rect.row
    }

    pub fn is_idle(&self) -> bool {
        self.state == TileState::Idle
    }

    pub fn is_target(&self) -> bool {
        self.role.is_target()
    }

    pub fn is_disappeared(&self) -> bool {
        self.state == TileState::Disappeared
    }

    /// Does this on-board tile occupy any cell of `rect`?
    pub fn blocks(&self, rect: &Rect) -> bool {
        self.state.is_on_board() && self.rect.overlaps(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tile_is_idle() {
        let t = Tile::obstacle("a", Rect::new(3, 4, 2, 1), Direction::UpLeft);
        assert!(t.is_idle());
        assert!(!t.is_target());
        assert_eq!((t.col(), t.row()), (3, 4));
        assert_eq!(t.id.as_str(), "a");
    }

    #[test]
    fn test_disappeared_tile_never_blocks() {
        let mut t = Tile::target("dog", Rect::new(5, 5, 1, 1), Direction::DownRight);
        let probe = Rect::new(5, 5, 1, 1);
        assert!(t.blocks(&probe));

        t.state = TileState::Disappeared;
        assert!(!t.blocks(&probe));
    }
}
