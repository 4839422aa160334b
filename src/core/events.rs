//! Global events used for cross-system communication.
//!
//! The input layer turns window clicks into `PointerDown` events; the round
//! systems answer each one with exactly one `WhackOutcome`. Audio and the
//! cursor listen to outcomes without knowing anything about targets.
//! Targets that sink back unhit are reported with `ZombieExpired`.

use bevy::prelude::*;

/// Sent when the primary pointer button goes down over the board.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PointerDown {
    /// Pointer position in screen pixels (top-left origin, y down)
    pub position: Vec2,
}

/// Result of resolving one `PointerDown` against the live targets.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum WhackOutcome {
    /// A clickable target was under the pointer and is now being hit.
    Hit { position: Vec2 },
    /// Nothing clickable was under the pointer.
    Miss { position: Vec2 },
}

impl WhackOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, WhackOutcome::Hit { .. })
    }
}

/// A target idled past its limit and started sinking back unhit.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ZombieExpired {
    pub position: Vec2,
}
