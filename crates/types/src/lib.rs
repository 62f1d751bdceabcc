//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the puzzle engine.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (play sessions, level validation, tooling).
//!
//! # Board Dimensions
//!
//! The reference level set uses a 14x14 grid, indexed from 1 in both axes:
//!
//! - **Columns**: 1..=14 (left to right)
//! - **Rows**: 1..=14 (top to bottom)
//! - **Center**: row/column 7 (`ceil(N / 2)`)
//!
//! Only the diamond-shaped region inside the grid is playable; see the
//! geometry module in `tile-escape-core`.
//!
//! # Directions
//!
//! Every tile travels along one fixed diagonal:
//!
//! | Direction | Step (col, row) |
//! |-----------|-----------------|
//! | `UpLeft` | (-1, -1) |
//! | `UpRight` | (+1, -1) |
//! | `DownLeft` | (-1, +1) |
//! | `DownRight` | (+1, +1) |
//!
//! # Difficulty Thresholds
//!
//! | Shortest solution | Difficulty |
//! |-------------------|------------|
//! | <= 10 moves | Easy |
//! | <= 20 moves | Medium |
//! | <= 30 moves | Hard |
//! | more | Very Hard |
//!
//! # Examples
//!
//! ```
//! use tile_escape_types::{Direction, Role, SlideReason, GRID_SIZE};
//!
//! // Parse from the level-file spelling (case-insensitive)
//! let dir = Direction::from_str("up_left").unwrap();
//! assert_eq!(dir, Direction::UpLeft);
//! assert_eq!(dir.vector(), (-1, -1));
//!
//! // Roles accept both the level-file and the descriptive names
//! assert_eq!(Role::from_str("dog"), Some(Role::Target));
//! assert_eq!(Role::from_str("obstacle"), Some(Role::Obstacle));
//!
//! assert_eq!(SlideReason::BlockedByCollision.code(), "blocked_by_collision");
//! assert_eq!(GRID_SIZE, 14);
//! ```

/// Grid size of the reference level set (14x14)
pub const GRID_SIZE: u8 = 14;

/// Maximum number of board snapshots kept for undo
pub const HISTORY_CAPACITY: usize = 50;

/// Default cap on states popped by the solvability search
pub const DEFAULT_MAX_STATES: usize = 10_000;

/// Default cap on solution depth explored by the solvability search
pub const DEFAULT_MAX_MOVES: u32 = 100;

/// Upper bounds (inclusive) on shortest-solution length per difficulty tier
///
/// Index 0 = Easy, 1 = Medium, 2 = Hard. Anything longer is Very Hard.
pub const DIFFICULTY_MOVE_LIMITS: [usize; 3] = [10, 20, 30];

/// Heuristic: target edge distance (inclusive) still considered likely easy
pub const LIKELY_EASY_DISTANCE: u32 = 2;

/// Heuristic: target edge distance (inclusive) still considered likely medium
pub const LIKELY_MEDIUM_DISTANCE: u32 = 4;

/// Base points for completing any level
pub const BASE_CLEAR_SCORE: u32 = 500;

/// Bonus points per remaining second on timed levels
pub const TIME_BONUS_PER_SECOND: u32 = 5;

/// Diagonal travel direction of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// All four directions in level-file order
    pub const ALL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Parse direction from string (case-insensitive, `_` or `-` separated)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "up_left" | "left_up" => Some(Direction::UpLeft),
            "up_right" | "right_up" => Some(Direction::UpRight),
            "down_left" | "left_down" => Some(Direction::DownLeft),
            "down_right" | "right_down" => Some(Direction::DownRight),
            _ => None,
        }
    }

    /// Convert to the level-file spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::UpLeft => "up_left",
            Direction::UpRight => "up_right",
            Direction::DownLeft => "down_left",
            Direction::DownRight => "down_right",
        }
    }

    /// Unit step as (column delta, row delta)
    pub fn vector(&self) -> (i16, i16) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (1, -1),
            Direction::DownLeft => (-1, 1),
            Direction::DownRight => (1, 1),
        }
    }

    /// Build a direction from a step vector; only the four diagonals are valid
    pub fn from_vector(dc: i16, dr: i16) -> Option<Self> {
        match (dc, dr) {
            (-1, -1) => Some(Direction::UpLeft),
            (1, -1) => Some(Direction::UpRight),
            (-1, 1) => Some(Direction::DownLeft),
            (1, 1) => Some(Direction::DownRight),
            _ => None,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::DownRight => Direction::UpLeft,
        }
    }
}

/// Role of a tile within a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The single tile whose exit wins the level
    Target,
    Obstacle,
}

impl Role {
    /// Parse role from string; accepts the level-file unit names too
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "target" | "dog" | "vegetable_dog" => Some(Role::Target),
            "obstacle" | "wolf" => Some(Role::Obstacle),
            _ => None,
        }
    }

    /// Convert to the level-file unit name
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Target => "dog",
            Role::Obstacle => "wolf",
        }
    }

    pub fn is_target(&self) -> bool {
        matches!(self, Role::Target)
    }
}

/// Lifecycle state of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileState {
    #[default]
    Idle,
    /// Transient, owned by the presentation layer while it animates a slide
    Sliding,
    Disappeared,
}

impl TileState {
    /// Whether the tile still takes part in collision checks
    pub fn is_on_board(&self) -> bool {
        !matches!(self, TileState::Disappeared)
    }
}

/// Why a slide request produced no movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideReason {
    /// The tile is not Idle (already sliding or gone)
    NotIdle,
    /// The tile carries no valid diagonal direction (malformed level)
    InvalidDirection,
    /// The first step would leave the outer grid
    BlockedByBoundary,
    /// The first step would overlap another on-board tile
    BlockedByCollision,
    /// No tile with the requested id exists on the board
    UnknownTile,
}

impl SlideReason {
    /// Stable snake_case code for logs and reports
    pub fn code(self) -> &'static str {
        match self {
            SlideReason::NotIdle => "tile_not_idle",
            SlideReason::InvalidDirection => "invalid_direction",
            SlideReason::BlockedByBoundary => "blocked_by_boundary",
            SlideReason::BlockedByCollision => "blocked_by_collision",
            SlideReason::UnknownTile => "unknown_tile",
        }
    }

    /// Legitimate no-op outcomes, as opposed to caller or level mistakes
    pub fn is_blocked(self) -> bool {
        matches!(
            self,
            SlideReason::BlockedByBoundary | SlideReason::BlockedByCollision
        )
    }
}

/// Level-type metadata, consumed only by scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LevelKind {
    #[default]
    Normal,
    Timed,
    Challenge,
}

impl LevelKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(LevelKind::Normal),
            "timed" => Some(LevelKind::Timed),
            "challenge" => Some(LevelKind::Challenge),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LevelKind::Normal => "normal",
            LevelKind::Timed => "timed",
            LevelKind::Challenge => "challenge",
        }
    }
}
