//! Input state engine: events in, snapshot out.
//!
//! `InputState` owns the key map, the mouse state, the drag gesture, and the
//! derived axis state. Every event is applied synchronously and, when it can
//! affect the joystick, is followed by a full axis recompute before
//! `handle` returns. There is no buffering and no frame boundary.
//!
//! | Event | Keys | Buttons | Gesture | Recompute |
//! |-------|------|---------|---------|-----------|
//! | KeyDown / KeyUp | set / clear | | | yes |
//! | PointerDown | | set | press | yes |
//! | PointerMove | | | drag (if active) | if active |
//! | PointerUp | | clear | release | yes |
//! | Blur | clear all | clear all | kept* | yes |
//!
//! \* released too when `Options::blur_ends_gesture` is set.

use crate::input::{Button, InputEvent};
use crate::keys::{KeyMap, MouseState};
use stick_core::axis::derive_axes;
use stick_core::gesture::Gesture;
use stick_core::key::KeyCode;
use stick_core::model::{AxisState, Joystick, Vector2};
use stick_core::options::Options;

/// The authoritative input state for one instance.
#[derive(Debug, Clone)]
pub struct InputState {
    options: Options,
    pub keys: KeyMap,
    pub mouse: MouseState,
    gesture: Gesture,
    axis: AxisState,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl InputState {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            keys: KeyMap::default(),
            mouse: MouseState::default(),
            gesture: Gesture::default(),
            axis: AxisState::default(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Apply one event.
    pub fn handle(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { code } => {
                self.keys.press(code);
                self.recompute();
            }
            InputEvent::KeyUp { code } => {
                self.keys.release(code);
                self.recompute();
            }
            InputEvent::PointerDown { x, y, button } => {
                let position = Vector2::new(x, y).rounded();
                self.mouse.press(button);
                self.mouse.position = position;
                if self.options.joystick {
                    self.gesture.press(position);
                }
                self.recompute();
            }
            InputEvent::PointerMove { x, y } => {
                let position = Vector2::new(x, y).rounded();
                self.mouse.position = position;
                if self.gesture.drag(position) {
                    self.recompute();
                }
            }
            InputEvent::PointerUp { x, y, button } => {
                self.mouse.release(button);
                self.mouse.position = Vector2::new(x, y).rounded();
                self.gesture.release();
                self.recompute();
            }
            InputEvent::Blur => {
                self.keys.clear();
                self.mouse.clear_buttons();
                if self.options.blur_ends_gesture {
                    self.gesture.release();
                }
                self.recompute();
            }
        }
    }

    /// Re-derive both axes from the current keys and gesture.
    fn recompute(&mut self) {
        if !self.options.joystick {
            return;
        }
        let keys = &self.keys;
        self.axis = derive_axes(
            |code| keys.is_down(code),
            self.gesture.movement(),
            self.options.threshold(),
            self.options.normalization,
        );
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    pub fn is_key_down(&self, code: KeyCode) -> bool {
        self.keys.is_down(code)
    }

    pub fn last_key_pressed(&self) -> Option<KeyCode> {
        self.keys.last_pressed()
    }

    pub fn is_button_down(&self, button: Button) -> bool {
        self.mouse.is_down(button)
    }

    pub fn mouse_position(&self) -> Vector2 {
        self.mouse.position
    }

    pub fn axis(&self) -> AxisState {
        self.axis
    }

    /// A fresh snapshot of the joystick.
    pub fn joystick(&self) -> Joystick {
        Joystick {
            active: self.gesture.is_active(),
            start: self.gesture.start(),
            current: self.gesture.current(),
            movement: self.gesture.movement(),
            axis: self.axis,
        }
    }
}
