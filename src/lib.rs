//! Tile Escape (workspace facade crate).
//!
//! Re-exports the puzzle crates under stable `tile_escape::{core,engine,types}`
//! paths and hosts the pieces of the level-validation tool that are useful
//! outside the binary: configuration loading and report rows.

pub use tile_escape_core as core;
pub use tile_escape_engine as engine;
pub use tile_escape_types as types;

pub mod config;
pub mod report;
