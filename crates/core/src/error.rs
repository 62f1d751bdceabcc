//! Error types for structural level failures and history misuse

use thiserror::Error;

use crate::tile::TileId;

/// Structural problems that abort building a board from a level description
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level has no target tile")]
    NoTarget,

    #[error("level has {count} target tiles, expected exactly one")]
    MultipleTargets { count: usize },

    #[error("tiles {first} and {second} overlap in the initial placement")]
    Overlap { first: TileId, second: TileId },

    #[error("tile {id} lies outside any playable grid")]
    OutOfGrid { id: TileId },

    #[error("tile id {id} is used more than once")]
    DuplicateId { id: TileId },

    #[error("invalid level json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Outcome of an undo request that had nothing to restore
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("no earlier snapshot to restore")]
    UndoUnavailable,
}
