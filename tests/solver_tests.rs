//! Solvability analyzer tests

use std::time::Duration;

use tile_escape::core::types::{Direction, Role};
use tile_escape::core::{Board, Geometry, Level, Rect, Tile};
use tile_escape::engine::{
    analyze, estimate_level, solve, CapKind, Difficulty, Likelihood, Puzzle, SearchLimits,
};

fn level(tiles: Vec<Tile>) -> Level {
    Level::new(1, "t", tiles).unwrap()
}

fn enclosed() -> Level {
    level(vec![
        Tile::target("dog", Rect::new(7, 7, 1, 1), Direction::UpLeft),
        Tile::obstacle("w1", Rect::new(6, 6, 1, 1), Direction::DownRight),
        Tile::obstacle("w2", Rect::new(8, 6, 1, 1), Direction::DownLeft),
        Tile::obstacle("w3", Rect::new(6, 8, 1, 1), Direction::UpRight),
        Tile::obstacle("w4", Rect::new(8, 8, 1, 1), Direction::UpLeft),
    ])
}

fn chain() -> Level {
    // Each tile must leave before the one behind it can pass.
    level(vec![
        Tile::target("dog", Rect::new(5, 5, 1, 1), Direction::DownRight),
        Tile::obstacle("w1", Rect::new(6, 6, 1, 1), Direction::DownRight),
        Tile::obstacle("w2", Rect::new(7, 7, 1, 1), Direction::DownRight),
        Tile::obstacle("w3", Rect::new(8, 8, 1, 1), Direction::DownRight),
    ])
}

#[test]
fn test_enclosed_target_exhausts_without_cap() {
    let a = analyze(&enclosed(), Geometry::default(), &SearchLimits::new(10_000, 100));
    assert!(!a.solved());
    assert_eq!(a.move_count(), None);
    assert_eq!(a.states_explored(), 1);
    assert_eq!(a.capped_by(), CapKind::None);
    assert_eq!(a.difficulty, Difficulty::Unsolvable);
}

#[test]
fn test_chain_needs_every_blocker_cleared() {
    let a = analyze(&chain(), Geometry::default(), &SearchLimits::new(10_000, 100));
    assert!(a.solved());
    let ids: Vec<&str> = a.solution_ids.iter().map(|id| id.as_str()).collect();
    assert_eq!(ids, ["w3", "w2", "w1", "dog"]);
    assert_eq!(a.difficulty, Difficulty::Easy);
}

#[test]
fn test_solution_replays_on_live_board() {
    let lvl = chain();
    let a = analyze(&lvl, Geometry::default(), &SearchLimits::new(10_000, 100));
    let mut board = lvl.board(Geometry::default());
    for id in &a.solution_ids {
        assert!(board.slide(id).moved);
        assert!(board.is_consistent());
    }
    assert!(board.is_won());
}

#[test]
fn test_state_cap_falls_back_to_estimate() {
    let lvl = chain();
    let a = analyze(&lvl, Geometry::default(), &SearchLimits::new(2, 100));
    assert!(!a.solved());
    assert_eq!(a.capped_by(), CapKind::States);
    assert!(a.states_explored() <= 2);
    // The target cannot move at the start, so the estimate calls it blocked.
    assert_eq!(a.difficulty, Difficulty::Blocked);
    assert_eq!(estimate_level(&lvl, Geometry::default()).likelihood, Likelihood::Blocked);
}

#[test]
fn test_move_cap_is_distinguishable_from_exhaustion() {
    let a = analyze(&chain(), Geometry::default(), &SearchLimits::new(10_000, 3));
    assert!(!a.solved());
    assert_eq!(a.capped_by(), CapKind::Moves);
    assert!(!a.difficulty.is_proven());
}

#[test]
fn test_time_budget_is_honoured() {
    let puzzle = Puzzle::from_level(&chain(), Geometry::default());
    let r = solve(
        &puzzle,
        &SearchLimits::new(10_000, 100).with_time_budget(Duration::ZERO),
    );
    assert_eq!(r.capped_by, CapKind::Time);
}

#[test]
fn test_exhaustion_counts_whole_reachable_space() {
    // The target stops one short of an immovable tile; the other obstacle can
    // only exit. Reachable: 2 target positions x 2 obstacle states.
    let lvl = level(vec![
        Tile::target("dog", Rect::new(7, 7, 1, 1), Direction::UpLeft),
        Tile::new("stuck", Rect::new(5, 5, 1, 1), None, Role::Obstacle),
        Tile::obstacle("w1", Rect::new(7, 11, 1, 1), Direction::DownLeft),
    ]);
    assert_eq!(lvl.malformed_tiles().len(), 1);

    let puzzle = Puzzle::from_level(&lvl, Geometry::default());
    let r = solve(&puzzle, &SearchLimits::new(10_000, 100));
    assert!(!r.solved);
    assert!(r.is_exhausted());
    assert_eq!(r.states_explored, 4);
}

#[test]
fn test_puzzle_from_live_board_starts_mid_game() {
    let lvl = chain();
    let mut board: Board = lvl.board(Geometry::default());
    assert!(board.slide(&"w3".into()).disappeared);
    let puzzle = Puzzle::from_board(&board);
    let r = solve(&puzzle, &SearchLimits::new(10_000, 100));
    assert_eq!(r.solution.len(), 3);
}
