//! Breadth-first solvability search
//!
//! Explores board configurations in order of move count, so the first goal
//! state popped carries a shortest solution. Nodes live in an arena with
//! parent links; the visited set holds every state ever enqueued.
//!
//! Every run is bounded. The caller must pass [`SearchLimits`]; the report
//! says which limit, if any, ended the run:
//!
//! | `capped_by` | meaning                                                      |
//! |-------------|--------------------------------------------------------------|
//! | `None`      | solved, or the whole reachable space was exhausted          |
//! | `States`    | `max_states` nodes were expanded without reaching the goal  |
//! | `Moves`     | space exhausted, but some nodes sat at the `max_moves` depth |
//! | `Time`      | the wall-clock budget ran out                                |

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::state::{Move, Puzzle, SearchState};

/// How often the wall clock is consulted, in expanded nodes
const TIME_CHECK_INTERVAL: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of states popped from the queue
    pub max_states: usize,
    /// Maximum solution length considered
    pub max_moves: u32,
    pub time_budget: Option<Duration>,
}

impl SearchLimits {
    pub fn new(max_states: usize, max_moves: u32) -> Self {
        Self {
            max_states,
            max_moves,
            time_budget: None,
        }
    }

    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }
}

/// Which limit ended a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CapKind {
    #[default]
    None,
    States,
    Moves,
    Time,
}

impl CapKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(CapKind::None),
            "states" => Some(CapKind::States),
            "moves" => Some(CapKind::Moves),
            "time" => Some(CapKind::Time),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CapKind::None => "none",
            CapKind::States => "states",
            CapKind::Moves => "moves",
            CapKind::Time => "time",
        }
    }

    pub fn is_capped(&self) -> bool {
        *self != CapKind::None
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub solved: bool,
    /// Shortest solution, empty unless solved
    pub solution: Vec<Move>,
    pub states_explored: usize,
    pub capped_by: CapKind,
    pub elapsed: Duration,
}

impl SearchReport {
    pub fn move_count(&self) -> Option<usize> {
        self.solved.then_some(self.solution.len())
    }

    /// Unsolved with nothing left to explore
    pub fn is_exhausted(&self) -> bool {
        !self.solved && !self.capped_by.is_capped()
    }
}

struct Node {
    state: SearchState,
    parent: Option<usize>,
    via: Option<Move>,
    depth: u32,
}

fn reconstruct(nodes: &[Node], mut idx: usize) -> Vec<Move> {
    let mut moves = Vec::new();
    while let (Some(parent), Some(mv)) = (nodes[idx].parent, nodes[idx].via) {
        moves.push(mv);
        idx = parent;
    }
    moves.reverse();
    moves
}

/// Search for the shortest sequence of slides that makes the target exit
pub fn solve(puzzle: &Puzzle, limits: &SearchLimits) -> SearchReport {
    let started = Instant::now();
    let initial = puzzle.initial_state().clone();

    let mut visited: FxHashSet<SearchState> = FxHashSet::default();
    visited.insert(initial.clone());
    let mut nodes = vec![Node {
        state: initial,
        parent: None,
        via: None,
        depth: 0,
    }];
    let mut queue = VecDeque::from([0usize]);

    let mut explored = 0usize;
    let mut pruned = false;
    let mut capped_by = CapKind::None;
    let mut goal = None;

    while let Some(idx) = queue.pop_front() {
        if explored >= limits.max_states {
            capped_by = CapKind::States;
            break;
        }
        if let Some(budget) = limits.time_budget {
            if explored % TIME_CHECK_INTERVAL == 0 && started.elapsed() >= budget {
                capped_by = CapKind::Time;
                break;
            }
        }
        explored += 1;

        if puzzle.is_goal(&nodes[idx].state) {
            goal = Some(idx);
            break;
        }

        let depth = nodes[idx].depth;
        if depth >= limits.max_moves {
            pruned = true;
            continue;
        }

        let children: Vec<(Move, SearchState)> = puzzle
            .successors(&nodes[idx].state)
            .filter(|(_, next)| !visited.contains(next))
            .collect();
        for (mv, next) in children {
            visited.insert(next.clone());
            queue.push_back(nodes.len());
            nodes.push(Node {
                state: next,
                parent: Some(idx),
                via: Some(mv),
                depth: depth + 1,
            });
        }
    }

    if goal.is_none() && capped_by == CapKind::None && pruned {
        capped_by = CapKind::Moves;
    }

    let solution = goal.map(|idx| reconstruct(&nodes, idx)).unwrap_or_default();
    let report = SearchReport {
        solved: goal.is_some(),
        solution,
        states_explored: explored,
        capped_by,
        elapsed: started.elapsed(),
    };
    debug!(
        solved = report.solved,
        moves = report.solution.len(),
        states = report.states_explored,
        capped_by = report.capped_by.as_str(),
        elapsed_ms = report.elapsed.as_millis() as u64,
        "search finished"
    );
    report
}
