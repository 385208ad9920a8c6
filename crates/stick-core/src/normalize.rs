//! Normalization of the combined axis pair onto the unit circle.
//!
//! Two policies are supported and they do not agree numerically:
//!
//! | Policy | `normalized.v` | `clamped.v` |
//! |--------|----------------|-------------|
//! | `Canonical` | `clamp(|v|, 0, round(|v| / m)) · sign(v)` | |
//! | `Extended` | `round(v / m)` | `clamp(|v|, 0, |normalized.v|) · sign(v)` |
//!
//! `m` is the magnitude of `(horizontal, vertical)`, with 1 substituted for a
//! zero vector. Under `Canonical` no component ever grows past its raw
//! absolute value; under `Extended` the projection can grow a small component
//! up to the unit circle and `clamped` re-imposes the raw ceiling.

use crate::model::{Vector2, clamp, round2, sign};
use serde::{Deserialize, Serialize};

/// Which normalization to publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizePolicy {
    /// Single vector, pre-clamped against each component's raw magnitude.
    Canonical,
    /// Plain unit-circle projection plus a separate `clamped` vector.
    #[default]
    Extended,
}

/// Output of [`normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Normalized {
    pub normalized: Vector2,
    /// Present only under [`NormalizePolicy::Extended`].
    pub clamped: Option<Vector2>,
}

/// Magnitude of the pair, or 1 for the zero vector.
fn safe_magnitude(horizontal: f64, vertical: f64) -> f64 {
    let m = Vector2::new(horizontal, vertical).magnitude();
    if m == 0.0 || !m.is_finite() { 1.0 } else { m }
}

fn canonical_component(value: f64, magnitude: f64) -> f64 {
    let abs = value.abs();
    let projected = round2(abs / magnitude);
    round2(clamp(abs, 0.0, projected) * sign(value))
}

fn clamped_component(value: f64, normalized: f64) -> f64 {
    round2(clamp(value.abs(), 0.0, normalized.abs()) * sign(value))
}

/// Normalize the unrounded combined `(horizontal, vertical)` pair.
pub fn normalize(horizontal: f64, vertical: f64, policy: NormalizePolicy) -> Normalized {
    let magnitude = safe_magnitude(horizontal, vertical);

    match policy {
        NormalizePolicy::Canonical => Normalized {
            normalized: Vector2::new(
                canonical_component(horizontal, magnitude),
                canonical_component(vertical, magnitude),
            ),
            clamped: None,
        },
        NormalizePolicy::Extended => {
            let normalized = Vector2::new(
                round2(horizontal / magnitude),
                round2(vertical / magnitude),
            );
            let clamped = Vector2::new(
                clamped_component(horizontal, normalized.x),
                clamped_component(vertical, normalized.y),
            );
            Normalized {
                normalized,
                clamped: Some(clamped),
            }
        }
    }
}
