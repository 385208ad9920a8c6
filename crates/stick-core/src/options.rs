//! Per-instance configuration.
//!
//! Options are fixed for the lifetime of one input instance. Every field has
//! a default, so `{}` and a missing options object behave the same.

use crate::normalize::NormalizePolicy;
use serde::{Deserialize, Serialize};

/// Configuration for one input instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Drag distance, in local coordinate units, that maps to a full ±1 on
    /// an axis. Missing, zero, negative or non-finite disables pointer
    /// steering; read it through [`Options::threshold`].
    pub threshold: Option<f64>,

    /// Normalization policy for the published vector. Default: **extended**.
    pub normalization: NormalizePolicy,

    /// Track the gesture and derive joystick axes. When `false` only the
    /// key and button maps are maintained. Default: **true**.
    pub joystick: bool,

    /// DOM sources listen to `pointer*` events when `true`, `mouse*` events
    /// when `false`. Default: **true**.
    pub pointer_events: bool,

    /// Release an in-progress gesture on blur as well. Off by default, which
    /// leaves a drag active until the next pointer up.
    pub blur_ends_gesture: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            threshold: None,
            normalization: NormalizePolicy::default(),
            joystick: true,
            pointer_events: true,
            blur_ends_gesture: false,
        }
    }
}

impl Options {
    /// Options with pointer steering enabled at `threshold`.
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold: Some(threshold),
            ..Self::default()
        }
    }

    /// Parse options from a JSON object (`{"threshold": 300}`).
    ///
    /// # Errors
    /// Returns the serde error message for malformed JSON or mistyped fields.
    /// Out-of-range thresholds are not errors; they disable pointer steering.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let trimmed = json.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(Self::default());
        }
        serde_json::from_str(trimmed).map_err(|e| format!("invalid options: {e}"))
    }

    /// The effective threshold: `Some` only when finite and positive.
    pub fn threshold(&self) -> Option<f64> {
        self.threshold.filter(|t| t.is_finite() && *t > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let o = Options::default();
        assert_eq!(o.threshold(), None);
        assert_eq!(o.normalization, NormalizePolicy::Extended);
        assert!(o.joystick);
        assert!(o.pointer_events);
        assert!(!o.blur_ends_gesture);
    }

    #[test]
    fn parse_threshold() {
        let o = Options::from_json(r#"{"threshold": 300}"#).unwrap();
        assert_eq!(o.threshold(), Some(300.0));
        assert_eq!(o, Options::with_threshold(300.0));
    }

    #[test]
    fn parse_all_fields() {
        let o = Options::from_json(
            r#"{"threshold": 120.5, "normalization": "canonical", "joystick": false,
                "pointerEvents": false, "blurEndsGesture": true}"#,
        )
        .unwrap();
        assert_eq!(o.threshold(), Some(120.5));
        assert_eq!(o.normalization, NormalizePolicy::Canonical);
        assert!(!o.joystick);
        assert!(!o.pointer_events);
        assert!(o.blur_ends_gesture);
    }

    #[test]
    fn empty_and_null_are_defaults() {
        assert_eq!(Options::from_json("").unwrap(), Options::default());
        assert_eq!(Options::from_json("null").unwrap(), Options::default());
        assert_eq!(Options::from_json("{}").unwrap(), Options::default());
    }

    #[test]
    fn bad_thresholds_disable_steering() {
        assert_eq!(Options::with_threshold(0.0).threshold(), None);
        assert_eq!(Options::with_threshold(-5.0).threshold(), None);
        assert_eq!(Options::with_threshold(f64::NAN).threshold(), None);
        assert_eq!(Options::with_threshold(f64::INFINITY).threshold(), None);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = Options::from_json(r#"{"threshold": "far"}"#).unwrap_err();
        assert!(err.starts_with("invalid options"), "{err}");
        assert!(Options::from_json("{").is_err());
    }
}
