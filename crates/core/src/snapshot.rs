use crate::tile::{Tile, TileId};
use crate::types::TileState;

/// Per-tile mutable state captured for undo and for render polling
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileSnapshot {
    pub id: TileId,
    pub col: i16,
    pub row: i16,
    pub state: TileState,
}

impl From<&Tile> for TileSnapshot {
    fn from(value: &Tile) -> Self {
        Self {
            id: value.id.clone(),
            col: value.rect.col,
            row: value.rect.row,
            state: value.state,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BoardSnapshot {
    pub tiles: Vec<TileSnapshot>,
}

impl BoardSnapshot {
    pub fn capture<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> Self {
        Self {
            tiles: tiles.into_iter().map(TileSnapshot::from).collect(),
        }
    }

    pub fn get(&self, id: &TileId) -> Option<&TileSnapshot> {
        self.tiles.iter().find(|t| &t.id == id)
    }

    /// Number of tiles still on the board in this snapshot
    pub fn on_board(&self) -> usize {
        self.tiles.iter().filter(|t| t.state.is_on_board()).count()
    }
}
