//! Core puzzle logic - pure, deterministic, and testable
//!
//! This crate holds the rules of the diagonal sliding-tile escape puzzle and
//! the live board state a player manipulates. It performs no I/O beyond
//! parsing a JSON string handed to it, and never installs a log subscriber.
//!
//! # Module Structure
//!
//! - [`geometry`]: N x N grid with the inscribed playable diamond
//! - [`tile`]: tile identity, footprint, direction, role and lifecycle state
//! - [`slide`]: the ray-march resolver shared by live play and the solver
//! - [`board`]: the live tile set, collision queries and slide commits
//! - [`history`]: bounded snapshot stack for single-step undo
//! - [`level`]: JSON level descriptions and structural validation
//! - [`session`]: one play-through wiring board and history together
//! - [`scoring`]: completion stars and points
//!
//! # Rules
//!
//! - Every tile travels along one fixed diagonal; a move only picks *which* tile slides
//! - A slide continues until the next cell would overlap another tile (stop)
//!   or leave the playable region (the tile exits and disappears)
//! - A first step off the outer grid is rejected outright
//! - The level is won once the single target tile has exited
//!
//! # Example
//!
//! ```
//! use tile_escape_core::{Geometry, Level, Rect, Session, Tile};
//! use tile_escape_core::types::Direction;
//!
//! let level = Level::new(
//!     1,
//!     "corner",
//!     vec![
//!         Tile::target("dog", Rect::new(2, 2, 1, 1), Direction::UpLeft),
//!         Tile::obstacle("wolf", Rect::new(5, 5, 1, 1), Direction::DownRight),
//!     ],
//! )
//! .unwrap();
//!
//! let mut session = Session::start(level, Geometry::new(14), 50);
//! let outcome = session.slide(&"dog".into());
//! assert!(outcome.moved && outcome.disappeared);
//! assert!(session.is_won());
//!
//! session.undo().unwrap();
//! assert!(!session.is_won());
//! ```

pub mod board;
pub mod error;
pub mod geometry;
pub mod history;
pub mod level;
pub mod scoring;
pub mod session;
pub mod slide;
pub mod snapshot;
pub mod tile;

pub use tile_escape_types as types;

// Re-export commonly used types for convenience
pub use board::{validate_tiles, Board};
pub use error::{HistoryError, LevelError};
pub use geometry::{Geometry, Rect};
pub use history::History;
pub use level::{load_levels, parse_levels, Level, LevelSpec, TileSpec};
pub use scoring::{calculate_score, calculate_stars, grade_clear, ClearResult};
pub use session::Session;
pub use slide::{
    resolve_slide, MarchStep, NoopObserver, Resolution, SlideObserver, SlideOutcome, StepVerdict,
};
pub use snapshot::{BoardSnapshot, TileSnapshot};
pub use tile::{Tile, TileId};
