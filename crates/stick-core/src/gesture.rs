//! Pointer-drag gesture tracking.
//!
//! ```text
//!          press              move (self)
//!  Idle ───────────▶ Dragging ◀──────────┐
//!   ▲                   │   └────────────┘
//!   └─────── release ───┘
//! ```
//!
//! The idle state carries no positions, so `start`, `current` and `movement`
//! read as zero whenever the gesture is inactive.

use crate::model::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        start: Vector2,
        current: Vector2,
    },
}

impl Gesture {
    /// Begin (or restart) a drag at `position`.
    pub fn press(&mut self, position: Vector2) {
        let position = position.rounded();
        log::trace!("gesture press at ({}, {})", position.x, position.y);
        *self = Gesture::Dragging {
            start: position,
            current: position,
        };
    }

    /// Follow the pointer. Returns `true` if a drag is in progress and the
    /// gesture changed; moves while idle are ignored.
    pub fn drag(&mut self, position: Vector2) -> bool {
        match self {
            Gesture::Dragging { current, .. } => {
                *current = position.rounded();
                true
            }
            Gesture::Idle => false,
        }
    }

    /// End the drag and forget every position.
    pub fn release(&mut self) {
        if self.is_active() {
            log::trace!("gesture release");
        }
        *self = Gesture::Idle;
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Gesture::Dragging { .. })
    }

    pub fn start(&self) -> Vector2 {
        match self {
            Gesture::Dragging { start, .. } => *start,
            Gesture::Idle => Vector2::ZERO,
        }
    }

    pub fn current(&self) -> Vector2 {
        match self {
            Gesture::Dragging { current, .. } => *current,
            Gesture::Idle => Vector2::ZERO,
        }
    }

    /// Displacement since the press, rounded to 2 decimals.
    pub fn movement(&self) -> Vector2 {
        (self.current() - self.start()).rounded()
    }
}
