//! Board module - the live tile set and slide commits
//!
//! The board owns every tile of a level, including disappeared ones, so that
//! history restores can bring them back. Tiles are kept in level order; the
//! target's index is cached at construction.
//!
//! Access is single-threaded: one slide is fully resolved before the next is
//! accepted.

use tracing::debug;

use crate::error::LevelError;
use crate::geometry::{Geometry, Rect};
use crate::slide::{resolve_slide, NoopObserver, Resolution, SlideObserver, SlideOutcome};
use crate::snapshot::BoardSnapshot;
use crate::tile::{Tile, TileId};
use crate::types::{SlideReason, TileState};

/// Check the structural rules every level must satisfy before play.
///
/// Requires exactly one target, unique ids and no overlapping on-board
/// footprints. On-board footprints must also fit [`Geometry::MAX`]; a level
/// is not tied to a grid size until it is played. Returns the target's index.
pub fn validate_tiles(tiles: &[Tile]) -> Result<usize, LevelError> {
    let mut target = None;
    let mut target_count = 0;
    for (i, tile) in tiles.iter().enumerate() {
        if tile.is_target() {
            target_count += 1;
            target.get_or_insert(i);
        }
    }
    let target = match (target, target_count) {
        (None, _) => return Err(LevelError::NoTarget),
        (Some(i), 1) => i,
        (Some(_), count) => return Err(LevelError::MultipleTargets { count }),
    };

    if let Some(tile) = tiles
        .iter()
        .find(|t| t.state.is_on_board() && !Geometry::MAX.rect_in_bounds(&t.rect))
    {
        return Err(LevelError::OutOfGrid {
            id: tile.id.clone(),
        });
    }

    for (i, a) in tiles.iter().enumerate() {
        for b in &tiles[i + 1..] {
            if a.id == b.id {
                return Err(LevelError::DuplicateId { id: a.id.clone() });
            }
            if a.state.is_on_board() && b.state.is_on_board() && a.rect.overlaps(&b.rect) {
                return Err(LevelError::Overlap {
                    first: a.id.clone(),
                    second: b.id.clone(),
                });
            }
        }
    }

    Ok(target)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    geometry: Geometry,
    tiles: Vec<Tile>,
    target: usize,
}

impl Board {
    /// Build a board, rejecting structurally invalid placements
    pub fn new(geometry: Geometry, tiles: Vec<Tile>) -> Result<Self, LevelError> {
        let target = validate_tiles(&tiles)?;
        Ok(Self {
            geometry,
            tiles,
            target,
        })
    }

    /// Tiles already checked by [`validate_tiles`], with the target index it returned
    pub(crate) fn from_validated(geometry: Geometry, tiles: Vec<Tile>, target: usize) -> Self {
        Self {
            geometry,
            tiles,
            target,
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// All tiles in level order, including disappeared ones
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tiles still taking part in play
    pub fn on_board(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| t.state.is_on_board())
    }

    pub fn tile(&self, id: &TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| &t.id == id)
    }

    pub fn index_of(&self, id: &TileId) -> Option<usize> {
        self.tiles.iter().position(|t| &t.id == id)
    }

    pub fn target(&self) -> &Tile {
        &self.tiles[self.target]
    }

    pub fn target_index(&self) -> usize {
        self.target
    }

    /// Win condition: the target has left the board
    pub fn is_won(&self) -> bool {
        self.target().is_disappeared()
    }

    /// Would `rect` overlap any on-board tile other than `exclude`?
    pub fn is_blocked(&self, rect: &Rect, exclude: usize) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .any(|(i, t)| i != exclude && t.blocks(rect))
    }

    /// Compute where the tile at `index` would end up, without committing
    pub fn resolve(&self, index: usize) -> Resolution {
        self.resolve_observed(index, &mut NoopObserver)
    }

    pub fn resolve_observed<O>(&self, index: usize, observer: &mut O) -> Resolution
    where
        O: SlideObserver + ?Sized,
    {
        let Some(tile) = self.tiles.get(index) else {
            return Resolution::Rejected(SlideReason::UnknownTile);
        };
        if !tile.is_idle() {
            return Resolution::Rejected(SlideReason::NotIdle);
        }
        resolve_slide(
            &self.geometry,
            tile.rect,
            tile.direction,
            |candidate| self.is_blocked(candidate, index),
            observer,
        )
    }

    /// Slide a tile along its direction and commit the result
    pub fn slide(&mut self, id: &TileId) -> SlideOutcome {
        self.slide_observed(id, &mut NoopObserver)
    }

    /// Like [`Board::slide`], reporting every ray-march step to `observer`
    pub fn slide_observed<O>(&mut self, id: &TileId, observer: &mut O) -> SlideOutcome
    where
        O: SlideObserver + ?Sized,
    {
        let Some(index) = self.index_of(id) else {
            debug!(tile = %id, "slide rejected: unknown tile");
            return SlideOutcome::rejected(SlideReason::UnknownTile);
        };

        let resolution = self.resolve_observed(index, observer);
        let tile = &mut self.tiles[index];
        match resolution {
            Resolution::Stopped { rect, distance } => {
                tile.rect = rect;
                debug!(tile = %id, col = rect.col, row = rect.row, distance, "slide stopped");
            }
            Resolution::Exited { rect, distance } => {
                tile.rect = rect;
                tile.state = TileState::Disappeared;
                debug!(tile = %id, col = rect.col, row = rect.row, distance, "slide exited");
            }
            Resolution::Rejected(reason) => {
                debug!(tile = %id, reason = reason.code(), "slide rejected");
            }
        }
        resolution.outcome()
    }

    /// Indices of tiles that currently have a legal move
    pub fn movable(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.tiles.len()).filter(|&i| self.resolve(i).moved())
    }

    /// Suggest a tile to slide: the target if it can move, else the first movable tile
    pub fn hint(&self) -> Option<&Tile> {
        if self.resolve(self.target).moved() {
            return Some(self.target());
        }
        self.movable().next().map(|i| &self.tiles[i])
    }

    /// Presentation hook: flag an Idle tile as animating
    pub fn mark_sliding(&mut self, id: &TileId) -> bool {
        match self.tiles.iter_mut().find(|t| &t.id == id) {
            Some(tile) if tile.is_idle() => {
                tile.state = TileState::Sliding;
                true
            }
            _ => false,
        }
    }

    /// Presentation hook: a Sliding tile finished animating
    pub fn settle(&mut self, id: &TileId) -> bool {
        match self.tiles.iter_mut().find(|t| &t.id == id) {
            Some(tile) if tile.state == TileState::Sliding => {
                tile.state = TileState::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(&self.tiles)
    }

    /// Restore positions and lifecycle states by id; unknown ids are ignored
    pub fn restore(&mut self, snapshot: &BoardSnapshot) {
        for saved in &snapshot.tiles {
            if let Some(tile) = self.tiles.iter_mut().find(|t| t.id == saved.id) {
                tile.rect = tile.rect.at(saved.col, saved.row);
                tile.state = saved.state;
            }
        }
    }

    /// True when no two on-board tiles overlap
    pub fn is_consistent(&self) -> bool {
        let live: Vec<&Tile> = self.on_board().collect();
        live.iter()
            .enumerate()
            .all(|(i, a)| live[i + 1..].iter().all(|b| !a.rect.overlaps(&b.rect)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    fn board(tiles: Vec<Tile>) -> Board {
        Board::new(Geometry::default(), tiles).unwrap()
    }

    #[test]
    fn test_rejects_missing_and_duplicate_targets() {
        let g = Geometry::default();
        let a = Tile::obstacle("a", Rect::new(5, 5, 1, 1), Direction::UpLeft);
        assert!(matches!(
            Board::new(g, vec![a.clone()]),
            Err(LevelError::NoTarget)
        ));

        let t1 = Tile::target("t1", Rect::new(7, 7, 1, 1), Direction::UpLeft);
        let t2 = Tile::target("t2", Rect::new(9, 9, 1, 1), Direction::UpLeft);
        assert!(matches!(
            Board::new(g, vec![t1, t2, a]),
            Err(LevelError::MultipleTargets { count: 2 })
        ));
    }

    #[test]
    fn test_rejects_overlap_and_duplicate_ids() {
        let g = Geometry::default();
        let t = Tile::target("t", Rect::new(7, 7, 2, 1), Direction::UpLeft);
        let a = Tile::obstacle("a", Rect::new(8, 6, 1, 2), Direction::UpLeft);
        assert!(matches!(
            Board::new(g, vec![t.clone(), a]),
            Err(LevelError::Overlap { .. })
        ));

        let b = Tile::obstacle("t", Rect::new(3, 3, 1, 1), Direction::UpLeft);
        assert!(matches!(
            Board::new(g, vec![t, b]),
            Err(LevelError::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_rejects_footprint_off_every_grid() {
        let g = Geometry::default();
        let t = Tile::target("t", Rect::new(7, 7, 1, 1), Direction::UpLeft);
        let far = Tile::obstacle("far", Rect::new(i16::MAX, 7, 2, 1), Direction::UpLeft);
        assert!(matches!(
            Board::new(g, vec![t, far]),
            Err(LevelError::OutOfGrid { id }) if id.as_str() == "far"
        ));

        let low = Tile::target("low", Rect::new(i16::MIN, 7, 1, 1), Direction::UpLeft);
        assert!(matches!(
            Board::new(g, vec![low]),
            Err(LevelError::OutOfGrid { .. })
        ));
    }

    #[test]
    fn test_slide_commits_position() {
        let mut b = board(vec![
            Tile::target("t", Rect::new(6, 6, 1, 1), Direction::DownRight),
            Tile::obstacle("a", Rect::new(9, 9, 1, 1), Direction::UpLeft),
        ]);
        let out = b.slide(&"t".into());
        assert_eq!(out, SlideOutcome::stopped());
        assert_eq!(b.target().rect, Rect::new(8, 8, 1, 1));
        assert!(b.target().is_idle());
    }

    #[test]
    fn test_disappeared_tile_stops_blocking() {
        let mut b = board(vec![
            Tile::target("t", Rect::new(6, 6, 1, 1), Direction::DownRight),
            Tile::obstacle("a", Rect::new(7, 7, 1, 1), Direction::DownRight),
        ]);
        assert_eq!(
            b.slide(&"t".into()).reason,
            Some(SlideReason::BlockedByCollision)
        );

        let out = b.slide(&"a".into());
        assert!(out.moved && out.disappeared);

        let out = b.slide(&"t".into());
        assert!(out.moved && out.disappeared);
        assert!(b.is_won());
    }

    #[test]
    fn test_sliding_tile_is_not_idle() {
        let mut b = board(vec![Tile::target(
            "t",
            Rect::new(7, 7, 1, 1),
            Direction::UpLeft,
        )]);
        assert!(b.mark_sliding(&"t".into()));
        assert_eq!(b.slide(&"t".into()).reason, Some(SlideReason::NotIdle));
        assert!(b.settle(&"t".into()));
        assert!(b.slide(&"t".into()).moved);
    }

    #[test]
    fn test_hint_prefers_target() {
        let b = board(vec![
            Tile::obstacle("a", Rect::new(3, 7, 1, 1), Direction::UpLeft),
            Tile::target("t", Rect::new(7, 7, 1, 1), Direction::UpLeft),
        ]);
        assert_eq!(b.hint().map(|t| t.id.as_str()), Some("t"));
    }
}
