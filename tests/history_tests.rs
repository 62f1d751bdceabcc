//! History tests - snapshot/undo behaviour through a session and directly

use tile_escape::core::types::{Direction, TileState};
use tile_escape::core::{Board, Geometry, History, HistoryError, Level, Rect, Session, Tile};

fn tiles() -> Vec<Tile> {
    vec![
        Tile::target("dog", Rect::new(6, 6, 1, 1), Direction::DownRight),
        Tile::obstacle("w1", Rect::new(9, 9, 1, 1), Direction::UpRight),
        Tile::obstacle("w2", Rect::new(3, 7, 1, 1), Direction::UpLeft),
    ]
}

#[test]
fn test_undo_is_inverse_of_single_slide() {
    for id in ["dog", "w1", "w2"] {
        let mut board = Board::new(Geometry::default(), tiles()).unwrap();
        let mut history = History::default();
        let before = board.tile(&id.into()).unwrap().clone();

        history.snapshot(&board);
        assert!(board.slide(&id.into()).moved, "{} should move", id);
        history.snapshot(&board);
        assert_eq!(history.undo(&mut board), Ok(()));

        let after = board.tile(&id.into()).unwrap();
        assert_eq!(after.rect, before.rect);
        assert_eq!(after.state, before.state);
    }
}

#[test]
fn test_undo_without_history_is_neutral() {
    let mut board = Board::new(Geometry::default(), tiles()).unwrap();
    let before = board.snapshot();
    let mut history = History::default();
    assert_eq!(history.undo(&mut board), Err(HistoryError::UndoUnavailable));
    assert_eq!(board.snapshot(), before);
}

#[test]
fn test_multi_step_undo_walks_back() {
    let level = Level::new(1, "walk", tiles()).unwrap();
    let mut session = Session::new(level);
    let start = session.snapshot();

    assert!(session.slide(&"w1".into()).moved);
    assert!(session.slide(&"w2".into()).disappeared);
    let disappeared = session.board().tile(&"w2".into()).unwrap().state;
    assert_eq!(disappeared, TileState::Disappeared);

    let latest = session.history().latest().unwrap();
    assert_eq!(latest.get(&"w2".into()).unwrap().state, TileState::Disappeared);
    assert_eq!(latest.on_board(), 2);

    session.undo().unwrap();
    assert_eq!(
        session.board().tile(&"w2".into()).unwrap().state,
        TileState::Idle
    );
    assert_eq!(session.history().latest().unwrap().on_board(), 3);
    session.undo().unwrap();
    assert_eq!(session.snapshot(), start);
    assert!(session.undo().is_err());
    assert_eq!(session.moves(), 0);
}

#[test]
fn test_history_capacity_bounds_undo_depth() {
    let level = Level::new(1, "shallow", tiles()).unwrap();
    let mut session = Session::start(level, Geometry::default(), 2);
    assert!(session.slide(&"w1".into()).moved);
    assert!(session.slide(&"w2".into()).moved);
    assert_eq!(session.history().len(), 2);

    assert!(session.undo().is_ok());
    assert!(session.undo().is_err());
    // The initial placement was evicted; w1 stays where it slid.
    assert_ne!(
        session.board().tile(&"w1".into()).unwrap().rect,
        Rect::new(9, 9, 1, 1)
    );
}
