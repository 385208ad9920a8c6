//! Key codes and the fixed directional binding tables.
//!
//! Key codes are the `KeyboardEvent.code` strings delivered by the browser
//! (`"KeyW"`, `"ArrowUp"`, ...). They are interned so the key map can hash
//! and compare them in O(1) on every event.

use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Global string interner for key codes.
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// An interned `KeyboardEvent.code` value. 4 bytes, Copy, Eq, Hash in O(1).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(Spur);

impl KeyCode {
    /// Intern a code string, or return the existing handle.
    pub fn intern(code: &str) -> Self {
        KeyCode(INTERNER.get_or_intern(code))
    }

    /// Look up a code without interning it. `None` if it was never seen.
    pub fn get(code: &str) -> Option<Self> {
        INTERNER.get(code).map(KeyCode)
    }

    /// Intern a code coming from an untrusted source.
    ///
    /// # Errors
    /// Returns an error for an empty code (synthetic or IME events).
    pub fn parse(code: &str) -> Result<Self, String> {
        if code.is_empty() {
            return Err("empty key code".to_string());
        }
        Ok(Self::intern(code))
    }

    /// Resolve back to the code string.
    pub fn as_str(&self) -> &str {
        INTERNER.resolve(&self.0)
    }
}

impl fmt::Debug for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyCode({})", self.as_str())
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for KeyCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for KeyCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        KeyCode::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ─── Binding tables ──────────────────────────────────────────────────────

/// Which way a bound key pulls its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pull {
    /// Up on the vertical axis, left on the horizontal axis.
    Negative,
    /// Down on the vertical axis, right on the horizontal axis.
    Positive,
}

impl Pull {
    pub fn value(self) -> f64 {
        match self {
            Pull::Negative => -1.0,
            Pull::Positive => 1.0,
        }
    }
}

/// A key and the signed contribution it makes to one axis while held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub pull: Pull,
}

impl KeyBinding {
    fn new(code: &str, pull: Pull) -> Self {
        Self {
            code: KeyCode::intern(code),
            pull,
        }
    }

    pub fn value(&self) -> f64 {
        self.pull.value()
    }
}

/// WASD + arrows, vertical half. Screen coordinates: up is negative.
pub static VERTICAL_KEYS: LazyLock<[KeyBinding; 4]> = LazyLock::new(|| {
    [
        KeyBinding::new("KeyW", Pull::Negative),
        KeyBinding::new("KeyS", Pull::Positive),
        KeyBinding::new("ArrowUp", Pull::Negative),
        KeyBinding::new("ArrowDown", Pull::Positive),
    ]
});

/// WASD + arrows, horizontal half.
pub static HORIZONTAL_KEYS: LazyLock<[KeyBinding; 4]> = LazyLock::new(|| {
    [
        KeyBinding::new("KeyA", Pull::Negative),
        KeyBinding::new("KeyD", Pull::Positive),
        KeyBinding::new("ArrowLeft", Pull::Negative),
        KeyBinding::new("ArrowRight", Pull::Positive),
    ]
});
