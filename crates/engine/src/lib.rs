//! Solvability analyzer - offline level validation
//!
//! Decides whether a level can be won and how hard it is. Runs over an
//! immutable copy of the level, never over a live board, and is meant for
//! authoring tools rather than the play loop: the search is exponential in
//! tile count and always runs under explicit [`SearchLimits`].
//!
//! # Module Structure
//!
//! - [`state`]: immutable puzzle description, search states and the transition function
//! - [`search`]: bounded breadth-first search with cap reporting
//! - [`heuristics`]: cheap target-only pre-check
//! - [`difficulty`]: grading by solution length, or by estimate when capped
//! - [`metrics`]: branching, density, path complexity and the composite score
//!
//! # Example
//!
//! ```
//! use tile_escape_core::{Geometry, Level, Rect, Tile};
//! use tile_escape_core::types::Direction;
//! use tile_escape_engine::{analyze, CapKind, Difficulty, SearchLimits};
//!
//! let level = Level::new(
//!     1,
//!     "enclosed",
//!     vec![
//!         Tile::target("dog", Rect::new(7, 7, 1, 1), Direction::UpLeft),
//!         Tile::obstacle("w1", Rect::new(6, 6, 1, 1), Direction::DownRight),
//!         Tile::obstacle("w2", Rect::new(8, 6, 1, 1), Direction::DownLeft),
//!         Tile::obstacle("w3", Rect::new(6, 8, 1, 1), Direction::UpRight),
//!         Tile::obstacle("w4", Rect::new(8, 8, 1, 1), Direction::UpLeft),
//!     ],
//! )
//! .unwrap();
//!
//! let analysis = analyze(&level, Geometry::default(), &SearchLimits::new(10_000, 100));
//! assert!(!analysis.solved());
//! assert_eq!(analysis.capped_by(), CapKind::None);
//! assert_eq!(analysis.difficulty, Difficulty::Unsolvable);
//! ```

pub mod analyze;
pub mod difficulty;
pub mod heuristics;
pub mod metrics;
pub mod search;
pub mod state;

pub use analyze::{analyze, estimate_level, Analysis};
pub use difficulty::{classify, Difficulty};
pub use heuristics::{estimate, Estimate, Likelihood};
pub use metrics::{measure, LevelMetrics, ScoreBand};
pub use search::{solve, CapKind, SearchLimits, SearchReport};
pub use state::{Move, Piece, Puzzle, SearchState, Slot};
