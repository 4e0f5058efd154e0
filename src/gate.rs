//! The ID-card unlock gate: pointer tracking, tilt mapping, scanner hit
//! testing and the bounce-back animation, independent of any DOM.
//!
//! The host feeds pointer events and animation frames into a
//! [`GateController`] and renders the [`Pose`] it exposes. Geometry comes
//! from the host through the [`Layout`] trait.

mod animator;
mod controller;
mod easing;
mod geometry;
mod transform;

pub use animator::FrameToken;
pub use controller::{FrameStep, GateController, Release};
pub use geometry::{GateElement, Layout, LayoutError, Rect, Vec2};
pub use transform::{map_offset, Pose};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be a finite number")]
    NotFinite(&'static str),
    #[error("{0} must not be negative")]
    Negative(&'static str),
}

/// Tunables for the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Degrees of tilt per container-size of offset.
    pub tilt_range: f64,
    /// Tilt is clamped to `[-max_tilt, max_tilt]` on both axes.
    pub max_tilt: f64,
    pub lanyard_x_factor: f64,
    pub lanyard_y_factor: f64,
    pub return_duration_ms: f64,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            tilt_range: 30.0,
            max_tilt: 15.0,
            lanyard_x_factor: 0.3,
            lanyard_y_factor: 0.2,
            return_duration_ms: 800.0,
        }
    }
}

impl GateConfig {
    /// Rejects values the gesture cannot run with. Lanyard factors may be
    /// negative; every other tunable is a magnitude.
    pub fn validate(self) -> Result<Self, ConfigError> {
        let fields = [
            ("tilt_range", self.tilt_range, true),
            ("max_tilt", self.max_tilt, true),
            ("lanyard_x_factor", self.lanyard_x_factor, false),
            ("lanyard_y_factor", self.lanyard_y_factor, false),
            ("return_duration_ms", self.return_duration_ms, true),
        ];
        for (name, value, magnitude) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite(name));
            }
            if magnitude && value < 0.0 {
                return Err(ConfigError::Negative(name));
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_partial_override() {
        let config: GateConfig =
            serde_json::from_str(r#"{ "max_tilt": 10.0, "return_duration_ms": 400.0 }"#)
                .expect("config should parse");
        assert_eq!(config.max_tilt, 10.0);
        assert_eq!(config.return_duration_ms, 400.0);
        assert_eq!(config.tilt_range, 30.0);
        assert_eq!(config.lanyard_y_factor, 0.2);
    }

    #[test]
    fn test_custom_config_drives_controller() {
        let config = GateConfig {
            max_tilt: 5.0,
            return_duration_ms: 100.0,
            ..GateConfig::default()
        };
        let pose = map_offset(
            &config,
            Vec2::new(0.0, 500.0),
            &Rect::new(0.0, 0.0, 100.0, 100.0),
        );
        assert_eq!(pose.rotation.x, 5.0);
        assert_eq!(GateController::new(config).config().return_duration_ms, 100.0);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        let config = GateConfig::default();
        assert_eq!(config.validate(), Ok(config));
        let mirrored = GateConfig {
            lanyard_x_factor: -0.3,
            ..GateConfig::default()
        };
        assert!(mirrored.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unusable_values() {
        let negative_tilt: GateConfig =
            serde_json::from_str(r#"{ "max_tilt": -5.0 }"#).expect("config should parse");
        assert_eq!(
            negative_tilt.validate(),
            Err(ConfigError::Negative("max_tilt"))
        );

        let nan_duration = GateConfig {
            return_duration_ms: f64::NAN,
            ..GateConfig::default()
        };
        assert_eq!(
            nan_duration.validate(),
            Err(ConfigError::NotFinite("return_duration_ms"))
        );

        let infinite_range = GateConfig {
            tilt_range: f64::INFINITY,
            ..GateConfig::default()
        };
        let err = infinite_range.validate().unwrap_err();
        assert_eq!(err.to_string(), "tilt_range must be a finite number");
    }

    #[test]
    fn test_controller_falls_back_on_invalid_config() {
        let config = GateConfig {
            max_tilt: -5.0,
            return_duration_ms: f64::NAN,
            ..GateConfig::default()
        };
        let gate = GateController::new(config);
        assert_eq!(gate.config(), &GateConfig::default());

        let pose = map_offset(
            gate.config(),
            Vec2::new(10.0, 10.0),
            &Rect::new(0.0, 0.0, 100.0, 100.0),
        );
        assert_eq!(pose.rotation, Vec2::new(3.0, -3.0));
    }

    #[test]
    fn test_map_offset_tolerates_negative_max_tilt() {
        let config = GateConfig {
            max_tilt: -5.0,
            ..GateConfig::default()
        };
        let pose = map_offset(
            &config,
            Vec2::new(0.0, 500.0),
            &Rect::new(0.0, 0.0, 100.0, 100.0),
        );
        assert_eq!(pose.rotation.x, 5.0);
    }
}
