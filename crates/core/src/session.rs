//! Session module - one play-through of a level
//!
//! Wires the board and history together the way an input layer drives them:
//! slide a tile, snapshot on success, undo on request. The session keeps the
//! level around so it can be restarted without reloading.

use tracing::debug;

use crate::board::Board;
use crate::error::HistoryError;
use crate::geometry::Geometry;
use crate::history::History;
use crate::level::Level;
use crate::slide::{SlideObserver, SlideOutcome};
use crate::snapshot::BoardSnapshot;
use crate::tile::{Tile, TileId};

#[derive(Debug, Clone)]
pub struct Session {
    level: Level,
    board: Board,
    history: History,
    moves: u32,
}

impl Session {
    /// Start a level on the default 14x14 grid
    pub fn new(level: Level) -> Self {
        Self::start(level, Geometry::default(), crate::types::HISTORY_CAPACITY)
    }

    /// Start a level, recording the initial placement as the first history entry
    pub fn start(level: Level, geometry: Geometry, history_capacity: usize) -> Self {
        let board = level.board(geometry);
        let mut history = History::new(history_capacity);
        history.snapshot(&board);
        debug!(level = level.id, tiles = board.tiles().len(), "session started");
        Self {
            level,
            board,
            history,
            moves: 0,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access for presentation hooks such as [`Board::mark_sliding`]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn slide(&mut self, id: &TileId) -> SlideOutcome {
        let outcome = self.board.slide(id);
        self.commit(&outcome);
        outcome
    }

    pub fn slide_observed<O>(&mut self, id: &TileId, observer: &mut O) -> SlideOutcome
    where
        O: SlideObserver + ?Sized,
    {
        let outcome = self.board.slide_observed(id, observer);
        self.commit(&outcome);
        outcome
    }

    fn commit(&mut self, outcome: &SlideOutcome) {
        if outcome.moved {
            self.history.snapshot(&self.board);
            self.moves += 1;
        }
    }

    pub fn undo(&mut self) -> Result<(), HistoryError> {
        self.history.undo(&mut self.board)?;
        self.moves = self.moves.saturating_sub(1);
        Ok(())
    }

    /// Put every tile back in its initial placement and forget all moves
    pub fn reset(&mut self) {
        self.board = self.level.board(*self.board.geometry());
        self.history.clear();
        self.history.snapshot(&self.board);
        self.moves = 0;
    }

    pub fn hint(&self) -> Option<&Tile> {
        self.board.hint()
    }

    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }

    /// Committed slides, net of undos
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Positions and lifecycle states for a renderer to poll
    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }
}
