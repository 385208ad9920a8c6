//! Key and mouse button maps.
//!
//! Unknown keys and buttons read as released; nothing has to be registered
//! before it can be queried.

use crate::input::Button;
use stick_core::key::KeyCode;
use stick_core::model::Vector2;
use std::collections::HashMap;

/// Held keys plus the most recent `keydown`.
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    pressed: HashMap<KeyCode, bool>,
    last_pressed: Option<KeyCode>,
}

impl KeyMap {
    pub fn press(&mut self, code: KeyCode) {
        self.pressed.insert(code, true);
        self.last_pressed = Some(code);
    }

    pub fn release(&mut self, code: KeyCode) {
        self.pressed.insert(code, false);
    }

    pub fn is_down(&self, code: KeyCode) -> bool {
        self.pressed.get(&code).copied().unwrap_or(false)
    }

    pub fn last_pressed(&self) -> Option<KeyCode> {
        self.last_pressed
    }

    /// Codes currently held, in no particular order.
    pub fn held(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.pressed
            .iter()
            .filter(|(_, down)| **down)
            .map(|(code, _)| *code)
    }

    /// Release every key and forget the last one pressed.
    pub fn clear(&mut self) {
        self.pressed.values_mut().for_each(|down| *down = false);
        self.last_pressed = None;
    }
}

/// Held mouse buttons and the last known pointer position.
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    buttons: HashMap<Button, bool>,
    /// Element-local, rounded to 2 decimals.
    pub position: Vector2,
}

impl MouseState {
    pub fn press(&mut self, button: Button) {
        self.buttons.insert(button, true);
    }

    pub fn release(&mut self, button: Button) {
        self.buttons.insert(button, false);
    }

    pub fn is_down(&self, button: Button) -> bool {
        self.buttons.get(&button).copied().unwrap_or(false)
    }

    pub fn any_down(&self) -> bool {
        self.buttons.values().any(|down| *down)
    }

    /// Release every button. The position is kept.
    pub fn clear_buttons(&mut self) {
        self.buttons.values_mut().for_each(|down| *down = false);
    }
}
