//! Lifecycle of a directional drag.
//!
//! The gesture starts when the modifier is engaged, records an anchor on
//! pointer-down and resolves a [`Direction`] on pointer-up. Releasing the
//! modifier at any point cancels without resolving.

use tracing::trace;

use crate::model::direction::{Direction, classify};
use crate::sys::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Tracking,
    Dragging {
        anchor: Point,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    EngageModifier,
    ReleaseModifier,
    PointerDown(Point),
    /// Intermediate pointer position; never changes state.
    PointerDragged(Point),
    PointerUp(Point),
}

/// Pure transition function. Unexpected `(state, event)` pairs leave the
/// state untouched and resolve nothing.
pub fn transition(state: GestureState, event: GestureEvent) -> (GestureState, Option<Direction>) {
    use GestureEvent::*;
    use GestureState::*;
    match (state, event) {
        (Idle, EngageModifier) => (Tracking, None),
        (Tracking, PointerDown(point)) => (Dragging { anchor: point }, None),
        (Dragging { anchor }, PointerUp(point)) => {
            let delta = point - anchor;
            (Tracking, Some(classify(delta.dx, delta.dy)))
        }
        (Tracking | Dragging { .. }, ReleaseModifier) => (Idle, None),
        (state, _) => (state, None),
    }
}

/// Owns the current [`GestureState`]; the only writer is [`GestureTracker::handle`].
#[derive(Debug, Default)]
pub struct GestureTracker {
    state: GestureState,
}

impl GestureTracker {
    pub fn new() -> Self { Self::default() }

    pub fn state(&self) -> GestureState { self.state }

    pub fn anchor(&self) -> Option<Point> {
        match self.state {
            GestureState::Dragging { anchor } => Some(anchor),
            _ => None,
        }
    }

    pub fn is_engaged(&self) -> bool { !matches!(self.state, GestureState::Idle) }

    pub fn handle(&mut self, event: GestureEvent) -> Option<Direction> {
        let (next, resolved) = transition(self.state, event);
        if next != self.state {
            trace!(from = ?self.state, to = ?next, ?event, "gesture transition");
        }
        self.state = next;
        resolved
    }

    /// The direction a release at `point` would resolve to.
    pub fn preview(&self, point: Point) -> Option<Direction> {
        let anchor = self.anchor()?;
        let delta = point - anchor;
        if delta.is_zero() {
            return None;
        }
        Some(classify(delta.dx, delta.dy))
    }
}
