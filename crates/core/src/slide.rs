//! Slide resolution - ray-march a tile along its diagonal
//!
//! The resolver is a pure function over a start footprint, a direction and a
//! caller-supplied collision predicate. The live [`Board`](crate::Board) and
//! the offline solver share it, so both apply exactly the same rules:
//!
//! 1. Missing direction -> `InvalidDirection`.
//! 2. Step one cell. Leaving the outer grid on the first step -> `BlockedByBoundary`.
//! 3. Leaving the grid later, or leaving the diamond at any step -> exit at the
//!    last valid position.
//! 4. Overlapping an on-board tile -> stop at the last valid position, or
//!    `BlockedByCollision` on the first step.
//!
//! Exit is checked before collision within the same step.

use crate::geometry::{Geometry, Rect};
use crate::types::{Direction, SlideReason};

/// What happened at one ray-march step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepVerdict {
    /// Candidate is free; the cursor moves onto it
    Advance,
    /// Candidate leaves the playable region; the tile exits
    Exit,
    /// Candidate overlaps another tile
    Collide,
    /// First step leaves the outer grid; the tile cannot move
    Wall,
}

/// One ray-march step, reported to a [`SlideObserver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarchStep {
    /// 1-based step index
    pub step: u32,
    pub candidate: Rect,
    pub verdict: StepVerdict,
}

/// Caller-supplied trace hook, invoked once per ray-march step
pub trait SlideObserver {
    fn on_step(&mut self, step: &MarchStep);
}

impl<F: FnMut(&MarchStep)> SlideObserver for F {
    fn on_step(&mut self, step: &MarchStep) {
        self(step)
    }
}

/// Observer that ignores every step
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SlideObserver for NoopObserver {
    fn on_step(&mut self, _step: &MarchStep) {}
}

/// Terminal result of a ray march
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Stopped against another tile after `distance` steps
    Stopped { rect: Rect, distance: u32 },
    /// Left the playable region; `rect` is the last valid position
    Exited { rect: Rect, distance: u32 },
    Rejected(SlideReason),
}

impl Resolution {
    pub fn moved(&self) -> bool {
        !matches!(self, Resolution::Rejected(_))
    }

    pub fn exited(&self) -> bool {
        matches!(self, Resolution::Exited { .. })
    }

    /// Final footprint for a legal move
    pub fn destination(&self) -> Option<Rect> {
        match *self {
            Resolution::Stopped { rect, .. } | Resolution::Exited { rect, .. } => Some(rect),
            Resolution::Rejected(_) => None,
        }
    }

    pub fn distance(&self) -> u32 {
        match *self {
            Resolution::Stopped { distance, .. } | Resolution::Exited { distance, .. } => distance,
            Resolution::Rejected(_) => 0,
        }
    }

    pub fn outcome(&self) -> SlideOutcome {
        match *self {
            Resolution::Stopped { .. } => SlideOutcome::stopped(),
            Resolution::Exited { .. } => SlideOutcome::disappeared(),
            Resolution::Rejected(reason) => SlideOutcome::rejected(reason),
        }
    }
}

/// Result record handed back to callers of `slide`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideOutcome {
    pub moved: bool,
    pub disappeared: bool,
    pub reason: Option<SlideReason>,
}

impl SlideOutcome {
    pub fn stopped() -> Self {
        Self {
            moved: true,
            disappeared: false,
            reason: None,
        }
    }

    pub fn disappeared() -> Self {
        Self {
            moved: true,
            disappeared: true,
            reason: None,
        }
    }

    pub fn rejected(reason: SlideReason) -> Self {
        Self {
            moved: false,
            disappeared: false,
            reason: Some(reason),
        }
    }
}

/// Ray-march `start` along `direction` until it stops, exits, or is rejected.
///
/// `blocked` answers whether a candidate footprint overlaps any *other*
/// on-board tile. Terminates within `geometry.size()` steps since every step
/// moves one row.
pub fn resolve_slide<O>(
    geometry: &Geometry,
    start: Rect,
    direction: Option<Direction>,
    blocked: impl Fn(&Rect) -> bool,
    observer: &mut O,
) -> Resolution
where
    O: SlideObserver + ?Sized,
{
    let Some(direction) = direction else {
        return Resolution::Rejected(SlideReason::InvalidDirection);
    };
    let (dc, dr) = direction.vector();

    let mut cursor = start;
    let mut distance: u32 = 0;

    loop {
        let candidate = cursor.offset(dc, dr);
        let step = distance + 1;
        let mut report = |verdict| {
            observer.on_step(&MarchStep {
                step,
                candidate,
                verdict,
            })
        };

        if !geometry.rect_in_bounds(&candidate) {
            if distance == 0 {
                report(StepVerdict::Wall);
                return Resolution::Rejected(SlideReason::BlockedByBoundary);
            }
            report(StepVerdict::Exit);
            return Resolution::Exited {
                rect: cursor,
                distance,
            };
        }

        if !geometry.rect_in_diamond(&candidate) {
            report(StepVerdict::Exit);
            return Resolution::Exited {
                rect: cursor,
                distance,
            };
        }

        if blocked(&candidate) {
            report(StepVerdict::Collide);
            if distance == 0 {
                return Resolution::Rejected(SlideReason::BlockedByCollision);
            }
            return Resolution::Stopped {
                rect: cursor,
                distance,
            };
        }

        report(StepVerdict::Advance);
        cursor = candidate;
        distance = step;
    }
}
