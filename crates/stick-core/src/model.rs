//! Published value types: vectors, axis state, and the joystick snapshot.
//!
//! Every value here is immutable once handed out. The engine builds a fresh
//! snapshot on each read instead of mutating a shared one.

use crate::normalize::Normalized;
use serde::{Deserialize, Serialize};
use std::ops::Sub;

// ─── Numeric helpers ─────────────────────────────────────────────────────

/// Round to 2 decimal places, half away from zero. Never returns `-0.0`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

/// Sign with `sign(0) == 0`. NaN maps to 0.
pub fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Clamp without panicking on inverted bounds or NaN input.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

// ─── Vector2 ─────────────────────────────────────────────────────────────

/// A 2D point or displacement in element-local units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise [`round2`].
    pub fn rounded(self) -> Self {
        Self::new(round2(self.x), round2(self.y))
    }

    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ─── Axis state ──────────────────────────────────────────────────────────

/// The derived joystick direction.
///
/// `vertical` and `horizontal` are in `[-1, 1]`. `normalized` points the same
/// way with magnitude ≤ 1. `clamped` is only present under
/// [`NormalizePolicy::Extended`](crate::normalize::NormalizePolicy::Extended).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisState {
    pub vertical: f64,
    pub horizontal: f64,
    pub normalized: Vector2,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clamped: Option<Vector2>,
}

impl AxisState {
    pub fn new(horizontal: f64, vertical: f64, normalized: Normalized) -> Self {
        Self {
            vertical,
            horizontal,
            normalized: normalized.normalized,
            clamped: normalized.clamped,
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.vertical == 0.0 && self.horizontal == 0.0
    }
}

// ─── Joystick snapshot ───────────────────────────────────────────────────

/// Read-only snapshot of the virtual joystick.
///
/// While no gesture is active, `start`, `current` and `movement` are zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Joystick {
    pub active: bool,
    pub start: Vector2,
    pub current: Vector2,
    /// `current - start`, rounded.
    #[serde(rename = "move")]
    pub movement: Vector2,
    pub axis: AxisState,
}
