//! Core configuration for motionplay-core.

use serde::{Deserialize, Serialize};

use crate::error::MotionError;
use crate::transform::Viewport;

/// Configuration for viewport mapping, readout formatting and event buffering.
/// Every field has a default so hosts can pass a partial JSON object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Normalized drawing area the transform maps into.
    pub viewport: Viewport,

    /// Decimal places shown for every readout value.
    pub readout_precision: usize,

    /// Playback speed multiplier a fresh timeline starts with.
    pub default_speed: f64,

    /// Maximum timeline events retained between drains; oldest are dropped past this.
    pub max_events_per_tick: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            readout_precision: 2,
            default_speed: 1.0,
            max_events_per_tick: 64,
        }
    }
}

impl Config {
    /// Reject configurations that would leave no drawable area or an unusable clock.
    pub fn validate(&self) -> Result<(), MotionError> {
        let vp = &self.viewport;
        if !(vp.width.is_finite() && vp.width > 0.0 && vp.height.is_finite() && vp.height > 0.0) {
            return Err(MotionError::InvalidConfig {
                reason: format!("viewport must be positive, got {}x{}", vp.width, vp.height),
            });
        }
        if !vp.padding.is_finite()
            || vp.padding < 0.0
            || 2.0 * vp.padding >= vp.width
            || 2.0 * vp.padding >= vp.height
        {
            return Err(MotionError::InvalidConfig {
                reason: format!(
                    "padding {} leaves no drawable area in {}x{}",
                    vp.padding, vp.width, vp.height
                ),
            });
        }
        if !self.default_speed.is_finite() || self.default_speed < 0.0 {
            return Err(MotionError::InvalidConfig {
                reason: format!("default_speed must be finite and >= 0, got {}", self.default_speed),
            });
        }
        if self.max_events_per_tick == 0 {
            return Err(MotionError::InvalidConfig {
                reason: "max_events_per_tick must be > 0".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: Config = serde_json::from_str(r#"{ "readout_precision": 3 }"#).unwrap();
        assert_eq!(cfg.readout_precision, 3);
        assert_eq!(cfg.viewport, Viewport::default());
        assert_eq!(cfg.default_speed, 1.0);
    }

    #[test]
    fn padding_swallowing_viewport_is_rejected() {
        let mut cfg = Config::default();
        cfg.viewport.padding = 50.0;
        assert!(matches!(
            cfg.validate(),
            Err(MotionError::InvalidConfig { .. })
        ));
    }
}
