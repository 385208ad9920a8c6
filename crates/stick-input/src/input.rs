//! Input abstraction layer.
//!
//! Normalizes keyboard, pointer/mouse, and focus events into a unified
//! `InputEvent` enum consumed by the input state engine. Pointer coordinates
//! are already element-local when an event is built.

use stick_core::key::KeyCode;

/// DOM `MouseEvent.button` index (0 = primary, 1 = middle, 2 = secondary).
pub type Button = i16;

/// A normalized input event from any source.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Key pressed (`keydown`). Repeats arrive as further `KeyDown`s.
    KeyDown { code: KeyCode },

    /// Key released (`keyup`).
    KeyUp { code: KeyCode },

    /// Pointer pressed (`pointerdown` / `mousedown`).
    PointerDown { x: f64, y: f64, button: Button },

    /// Pointer moved (`pointermove` / `mousemove`).
    PointerMove { x: f64, y: f64 },

    /// Pointer released (`pointerup` / `mouseup`).
    PointerUp { x: f64, y: f64, button: Button },

    /// The surface lost focus.
    Blur,
}

/// Subscription key: which event type a handler listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    KeyUp,
    PointerDown,
    PointerMove,
    PointerUp,
    Blur,
}

impl EventKind {
    pub const ALL: [EventKind; 6] = [
        EventKind::KeyDown,
        EventKind::KeyUp,
        EventKind::PointerDown,
        EventKind::PointerMove,
        EventKind::PointerUp,
        EventKind::Blur,
    ];

    /// DOM event type name. Pointer kinds map to `pointer*` or `mouse*`.
    pub fn dom_name(self, pointer_events: bool) -> &'static str {
        match (self, pointer_events) {
            (EventKind::KeyDown, _) => "keydown",
            (EventKind::KeyUp, _) => "keyup",
            (EventKind::PointerDown, true) => "pointerdown",
            (EventKind::PointerDown, false) => "mousedown",
            (EventKind::PointerMove, true) => "pointermove",
            (EventKind::PointerMove, false) => "mousemove",
            (EventKind::PointerUp, true) => "pointerup",
            (EventKind::PointerUp, false) => "mouseup",
            (EventKind::Blur, _) => "blur",
        }
    }

    /// Keyboard kinds listen on the document rather than the surface.
    pub fn is_keyboard(self) -> bool {
        matches!(self, EventKind::KeyDown | EventKind::KeyUp)
    }
}

impl InputEvent {
    /// Create a KeyDown from a `KeyboardEvent.code` string.
    pub fn key_down(code: &str) -> Self {
        Self::KeyDown {
            code: KeyCode::intern(code),
        }
    }

    pub fn key_up(code: &str) -> Self {
        Self::KeyUp {
            code: KeyCode::intern(code),
        }
    }

    /// Create a PointerDown from local coordinates.
    /// (Used when bridging from JS via wasm-bindgen.)
    pub fn from_pointer_down(x: f64, y: f64, button: Button) -> Self {
        Self::PointerDown { x, y, button }
    }

    pub fn from_pointer_move(x: f64, y: f64) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn from_pointer_up(x: f64, y: f64, button: Button) -> Self {
        Self::PointerUp { x, y, button }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::KeyDown { .. } => EventKind::KeyDown,
            Self::KeyUp { .. } => EventKind::KeyUp,
            Self::PointerDown { .. } => EventKind::PointerDown,
            Self::PointerMove { .. } => EventKind::PointerMove,
            Self::PointerUp { .. } => EventKind::PointerUp,
            Self::Blur => EventKind::Blur,
        }
    }

    /// Extract position if this is a pointer event.
    pub fn position(&self) -> Option<(f64, f64)> {
        match self {
            Self::PointerDown { x, y, .. }
            | Self::PointerMove { x, y }
            | Self::PointerUp { x, y, .. } => Some((*x, *y)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(InputEvent::key_down("KeyW").kind(), EventKind::KeyDown);
        assert_eq!(InputEvent::from_pointer_move(1.0, 2.0).kind(), EventKind::PointerMove);
        assert_eq!(InputEvent::Blur.kind(), EventKind::Blur);
    }

    #[test]
    fn dom_names() {
        assert_eq!(EventKind::PointerDown.dom_name(true), "pointerdown");
        assert_eq!(EventKind::PointerDown.dom_name(false), "mousedown");
        assert_eq!(EventKind::PointerUp.dom_name(false), "mouseup");
        assert_eq!(EventKind::KeyUp.dom_name(false), "keyup");
        assert_eq!(EventKind::Blur.dom_name(true), "blur");
    }

    #[test]
    fn position_only_for_pointer_events() {
        assert_eq!(
            InputEvent::from_pointer_down(3.0, 4.0, 0).position(),
            Some((3.0, 4.0))
        );
        assert_eq!(InputEvent::key_up("KeyA").position(), None);
        assert_eq!(InputEvent::Blur.position(), None);
    }
}
