//! Immutable search state and the pure transition function
//!
//! A [`Puzzle`] holds everything about a level that never changes during
//! play: footprints, directions, roles and the board geometry. A
//! [`SearchState`] holds only what a slide can change: each tile's anchor and
//! whether it has exited. States are cheap to clone and hash, so the solver
//! can branch freely without aliasing a live board.

use tile_escape_core::types::{Direction, Role, SlideReason};
use tile_escape_core::{
    resolve_slide, Board, Geometry, Level, NoopObserver, Rect, Resolution, TileId,
};

/// Fixed attributes of one tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub id: TileId,
    pub col_span: u8,
    pub row_span: u8,
    pub direction: Option<Direction>,
    pub role: Role,
}

/// Mutable attributes of one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub col: i16,
    pub row: i16,
    pub exited: bool,
}

/// Canonical board configuration, one slot per tile in level order.
///
/// Exited tiles stay in the list so the target's exit remains observable;
/// roles are fixed per index, so equal slot lists mean equal boards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchState {
    slots: Box<[Slot]>,
}

impl SearchState {
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }
}

/// One legal slide between two states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub tile: usize,
    pub from: (i16, i16),
    pub to: (i16, i16),
    pub exited: bool,
}

impl Move {
    /// Straight-line length of the slide in cells
    pub fn length(&self) -> f64 {
        let dc = (self.to.0 - self.from.0) as f64;
        let dr = (self.to.1 - self.from.1) as f64;
        (dc * dc + dr * dr).sqrt()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    geometry: Geometry,
    pieces: Vec<Piece>,
    target: usize,
    initial: SearchState,
}

impl Puzzle {
    /// Puzzle in the level's initial placement
    pub fn from_level(level: &Level, geometry: Geometry) -> Self {
        Self::from_board(&level.board(geometry))
    }

    /// Puzzle in a live board's current configuration
    pub fn from_board(board: &Board) -> Self {
        let pieces = board
            .tiles()
            .iter()
            .map(|t| Piece {
                id: t.id.clone(),
                col_span: t.rect.col_span,
                row_span: t.rect.row_span,
                direction: t.direction,
                role: t.role,
            })
            .collect();
        let slots = board
            .tiles()
            .iter()
            .map(|t| Slot {
                col: t.rect.col,
                row: t.rect.row,
                exited: t.is_disappeared(),
            })
            .collect();
        Self {
            geometry: *board.geometry(),
            pieces,
            target: board.target_index(),
            initial: SearchState { slots },
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn initial_state(&self) -> &SearchState {
        &self.initial
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Footprint of tile `index` in `state`
    pub fn rect(&self, state: &SearchState, index: usize) -> Rect {
        let piece = &self.pieces[index];
        let slot = &state.slots[index];
        Rect::new(slot.col, slot.row, piece.col_span, piece.row_span)
    }

    pub fn is_goal(&self, state: &SearchState) -> bool {
        state.slots[self.target].exited
    }

    /// Same rules as a live slide, with exited tiles ignored for collision
    pub fn resolve(&self, state: &SearchState, index: usize) -> Resolution {
        let Some(slot) = state.slots.get(index) else {
            return Resolution::Rejected(SlideReason::UnknownTile);
        };
        if slot.exited {
            return Resolution::Rejected(SlideReason::NotIdle);
        }
        let blocked = |candidate: &Rect| {
            state.slots.iter().enumerate().any(|(j, other)| {
                j != index && !other.exited && self.rect(state, j).overlaps(candidate)
            })
        };
        resolve_slide(
            &self.geometry,
            self.rect(state, index),
            self.pieces[index].direction,
            blocked,
            &mut NoopObserver,
        )
    }

    /// The state after sliding tile `index`, or `None` if it cannot move
    pub fn apply(&self, state: &SearchState, index: usize) -> Option<(Move, SearchState)> {
        let resolution = self.resolve(state, index);
        let rect = resolution.destination()?;
        let from = state.slots[index];
        let mut slots = state.slots.clone();
        slots[index] = Slot {
            col: rect.col,
            row: rect.row,
            exited: resolution.exited(),
        };
        let mv = Move {
            tile: index,
            from: (from.col, from.row),
            to: (rect.col, rect.row),
            exited: resolution.exited(),
        };
        Some((mv, SearchState { slots }))
    }

    /// Every legal slide from `state`, in tile order
    pub fn successors<'a>(
        &'a self,
        state: &'a SearchState,
    ) -> impl Iterator<Item = (Move, SearchState)> + 'a {
        (0..self.pieces.len()).filter_map(move |i| self.apply(state, i))
    }

    /// Number of tiles with a legal slide from `state`
    pub fn branching(&self, state: &SearchState) -> usize {
        (0..self.pieces.len())
            .filter(|&i| self.resolve(state, i).moved())
            .count()
    }
}
