//! Joystick axis derivation.
//!
//! Each axis is derived independently:
//!
//! ```text
//! digital  = Σ pull of every held key in the axis table     (unclamped, ±2 max)
//! analog   = min(|move| / threshold, 1) · sign(move)        (0 when disabled)
//! combined = clamp(digital + analog, -1, 1)
//! ```
//!
//! The combined pair feeds [`normalize`]. Only the published values are
//! rounded; normalization sees the unrounded pair.

use crate::key::{HORIZONTAL_KEYS, KeyBinding, KeyCode, VERTICAL_KEYS};
use crate::model::{AxisState, Vector2, clamp, round2, sign};
use crate::normalize::{NormalizePolicy, normalize};

/// One of the two independent directional channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The fixed key table feeding this axis.
    pub fn bindings(self) -> &'static [KeyBinding; 4] {
        match self {
            Axis::Horizontal => &*HORIZONTAL_KEYS,
            Axis::Vertical => &*VERTICAL_KEYS,
        }
    }

    /// The drag component feeding this axis.
    pub fn component(self, movement: Vector2) -> f64 {
        match self {
            Axis::Horizontal => movement.x,
            Axis::Vertical => movement.y,
        }
    }
}

/// Sum of the pulls of every held key in `table`.
pub fn digital_contribution(table: &[KeyBinding], is_key_down: impl Fn(KeyCode) -> bool) -> f64 {
    table
        .iter()
        .filter(|binding| is_key_down(binding.code))
        .map(KeyBinding::value)
        .sum()
}

/// Linear drag contribution saturating at `threshold`.
///
/// `threshold` is the already-validated effective threshold; `None` means
/// pointer dragging does not steer.
pub fn analog_contribution(move_component: f64, threshold: Option<f64>) -> f64 {
    let Some(threshold) = threshold.filter(|t| t.is_finite() && *t > 0.0) else {
        return 0.0;
    };
    let ratio = (move_component.abs() / threshold).min(1.0);
    ratio * sign(move_component)
}

/// Merge both contributions for one axis.
pub fn combine(digital: f64, analog: f64) -> f64 {
    clamp(digital + analog, -1.0, 1.0)
}

/// Unrounded combined value for one axis.
pub fn sample_axis(
    axis: Axis,
    is_key_down: impl Fn(KeyCode) -> bool,
    movement: Vector2,
    threshold: Option<f64>,
) -> f64 {
    let digital = digital_contribution(axis.bindings(), is_key_down);
    let analog = analog_contribution(axis.component(movement), threshold);
    combine(digital, analog)
}

/// Full recompute: both axes, normalization, rounding.
pub fn derive_axes(
    is_key_down: impl Fn(KeyCode) -> bool,
    movement: Vector2,
    threshold: Option<f64>,
    policy: NormalizePolicy,
) -> AxisState {
    let horizontal = sample_axis(Axis::Horizontal, &is_key_down, movement, threshold);
    let vertical = sample_axis(Axis::Vertical, &is_key_down, movement, threshold);
    let normalized = normalize(horizontal, vertical, policy);

    log::trace!(
        "axes h={horizontal:.4} v={vertical:.4} -> {:?}",
        normalized.normalized
    );

    AxisState::new(round2(horizontal), round2(vertical), normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn held(codes: &[&str]) -> impl Fn(KeyCode) -> bool {
        let codes: Vec<KeyCode> = codes.iter().map(|c| KeyCode::intern(c)).collect();
        move |code| codes.contains(&code)
    }

    #[test]
    fn digital_single_keys() {
        let table = Axis::Vertical.bindings();
        assert_eq!(digital_contribution(table, held(&["KeyW"])), -1.0);
        assert_eq!(digital_contribution(table, held(&["KeyS"])), 1.0);
        assert_eq!(digital_contribution(table, held(&["ArrowUp"])), -1.0);
        assert_eq!(digital_contribution(table, held(&[])), 0.0);
    }

    #[test]
    fn digital_is_unclamped() {
        let table = Axis::Vertical.bindings();
        assert_eq!(digital_contribution(table, held(&["KeyW", "ArrowUp"])), -2.0);
        assert_eq!(digital_contribution(table, held(&["KeyW", "KeyS"])), 0.0);
    }

    #[test]
    fn digital_ignores_other_axis() {
        let table = Axis::Horizontal.bindings();
        assert_eq!(digital_contribution(table, held(&["KeyW", "KeyS"])), 0.0);
    }

    #[test]
    fn analog_disabled_without_threshold() {
        assert_eq!(analog_contribution(150.0, None), 0.0);
        assert_eq!(analog_contribution(150.0, Some(0.0)), 0.0);
        assert_eq!(analog_contribution(150.0, Some(-10.0)), 0.0);
        assert_eq!(analog_contribution(150.0, Some(f64::NAN)), 0.0);
    }

    #[test]
    fn analog_is_linear_then_saturates() {
        assert_eq!(analog_contribution(0.0, Some(300.0)), 0.0);
        assert_eq!(analog_contribution(150.0, Some(300.0)), 0.5);
        assert_eq!(analog_contribution(-75.0, Some(300.0)), -0.25);
        assert_eq!(analog_contribution(900.0, Some(300.0)), 1.0);
        assert_eq!(analog_contribution(-301.0, Some(300.0)), -1.0);
    }

    #[test]
    fn combine_clamps() {
        assert_eq!(combine(-2.0, 0.0), -1.0);
        assert_eq!(combine(1.0, 0.5), 1.0);
        assert_eq!(combine(-1.0, 0.5), -0.5);
    }

    #[test]
    fn diagonal_drag_scales_each_axis_independently() {
        let state = derive_axes(
            held(&[]),
            Vector2::new(150.0, 150.0),
            Some(300.0),
            NormalizePolicy::Extended,
        );
        assert_eq!(state.horizontal, 0.5);
        assert_eq!(state.vertical, 0.5);
    }

    #[test]
    fn keys_and_drag_are_summed() {
        // KeyA pulls left, a 150px drag right pushes back half way.
        let state = derive_axes(
            held(&["KeyA"]),
            Vector2::new(150.0, 0.0),
            Some(300.0),
            NormalizePolicy::Canonical,
        );
        assert_eq!(state.horizontal, -0.5);
        assert_eq!(state.vertical, 0.0);
    }

    #[test]
    fn neutral_when_idle() {
        let state = derive_axes(held(&[]), Vector2::ZERO, None, NormalizePolicy::Extended);
        assert!(state.is_neutral());
        assert_eq!(state.normalized, Vector2::ZERO);
    }

    #[test]
    fn published_values_are_rounded() {
        let state = derive_axes(
            held(&[]),
            Vector2::new(100.0, -200.0),
            Some(300.0),
            NormalizePolicy::Extended,
        );
        assert_eq!(state.horizontal, 0.33);
        assert_eq!(state.vertical, -0.67);
        for v in [
            state.horizontal,
            state.vertical,
            state.normalized.x,
            state.normalized.y,
        ] {
            assert!(((v * 100.0).round() - v * 100.0).abs() < 1e-9, "{v}");
        }
    }

    #[test]
    fn tiny_negative_drag_serializes_as_plain_zero() {
        let state = derive_axes(
            |_| false,
            Vector2::new(-0.3, 0.0),
            Some(300.0),
            NormalizePolicy::Canonical,
        );
        assert_eq!(
            serde_json::to_string(&state).unwrap(),
            r#"{"vertical":0.0,"horizontal":0.0,"normalized":{"x":0.0,"y":0.0}}"#
        );
    }
}
