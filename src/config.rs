//! Display configuration.
//!
//! Every field has a default matching the tuned values of the display, so an
//! empty JSON object (`{}`) is a complete configuration. Speeds are given in
//! degrees per second and converted to degrees per frame with the configured
//! frame rate.

use serde::{Deserialize, Serialize};

use crate::error::{ClockError, Result};

/// How the hour is presented in the time readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourFormat {
    /// 1 through 12.
    #[default]
    Twelve,
    /// 0 through 23.
    TwentyFour,
}

/// Where the canvas width comes from. Resolved once at startup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CanvasSizing {
    /// A fixed width in pixels.
    Fixed { width: f64 },
    /// The browser viewport width.
    #[default]
    Viewport,
    /// The measured width of the element with this id.
    Container { element_id: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub frame_rate: u32,
    /// Seconds before the minute at which the time readout starts.
    pub pre_roll_seconds: u32,
    /// Seconds after the minute during which the time readout is held.
    pub post_roll_seconds: u32,
    pub min_lerp_factor: f64,
    pub max_lerp_factor: f64,
    /// Hands closer than this to their target ease in by interpolation.
    pub lerp_within_degrees: f64,
    /// Velocity added (degrees/frame) to a hand that would miss its deadline.
    pub acceleration_step: f64,
    /// Idle speed range in degrees per second.
    pub min_angular_speed: f64,
    pub max_angular_speed: f64,
    /// Digits are sampled ahead only once the second passes this value.
    pub lookahead_after_second: u32,
    pub lookahead_seconds: i64,
    pub hour_format: HourFormat,
    pub initial_angles: [f64; 2],
    pub canvas: CanvasSizing,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_rate: 30,
            pre_roll_seconds: 7,
            post_roll_seconds: 4,
            min_lerp_factor: 0.01,
            max_lerp_factor: 0.04,
            lerp_within_degrees: 45.0,
            acceleration_step: 0.005,
            min_angular_speed: 20.0,
            max_angular_speed: 90.0,
            lookahead_after_second: 40,
            lookahead_seconds: 30,
            hour_format: HourFormat::Twelve,
            initial_angles: [0.0, -180.0],
            canvas: CanvasSizing::Viewport,
        }
    }
}

impl DisplayConfig {
    /// Parses a JSON document and validates it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| invalid(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.frame_rate == 0 {
            return Err(invalid("frame_rate must be at least 1"));
        }
        if self.pre_roll_seconds >= 60 || self.post_roll_seconds >= 60 {
            return Err(invalid("pre_roll_seconds and post_roll_seconds must be below 60"));
        }
        if !(self.min_lerp_factor > 0.0
            && self.min_lerp_factor < self.max_lerp_factor
            && self.max_lerp_factor <= 1.0)
        {
            return Err(invalid("lerp factors must satisfy 0 < min < max <= 1"));
        }
        if !(self.min_angular_speed > 0.0 && self.min_angular_speed < self.max_angular_speed)
            || !self.max_angular_speed.is_finite()
        {
            return Err(invalid("angular speeds must satisfy 0 < min < max"));
        }
        if !(self.lerp_within_degrees > 0.0) || !(self.acceleration_step > 0.0) {
            return Err(invalid(
                "lerp_within_degrees and acceleration_step must be positive",
            ));
        }
        if self.lookahead_after_second >= 60 {
            return Err(invalid("lookahead_after_second must be below 60"));
        }
        if self.initial_angles.iter().any(|a| !a.is_finite()) {
            return Err(invalid("initial_angles must be finite"));
        }
        if let CanvasSizing::Fixed { width } = self.canvas {
            if !(width.is_finite() && width > 0.0) {
                return Err(ClockError::InvalidCanvasWidth(width));
            }
        }
        Ok(())
    }

    /// Idle speed range converted to degrees per frame.
    pub fn angular_velocity_range(&self) -> (f64, f64) {
        let fps = f64::from(self.frame_rate);
        (self.min_angular_speed / fps, self.max_angular_speed / fps)
    }
}

fn invalid(reason: impl Into<String>) -> ClockError {
    ClockError::InvalidConfig {
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = DisplayConfig::default();
        assert!(config.validate().is_ok());
        let (min, max) = config.angular_velocity_range();
        assert!((min - 20.0 / 30.0).abs() < 1e-12);
        assert!((max - 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_json_yields_defaults() {
        let config = DisplayConfig::from_json("{}").unwrap();
        assert_eq!(config, DisplayConfig::default());
    }

    #[test]
    fn json_overrides_fields() {
        let config = DisplayConfig::from_json(
            r#"{
                "pre_roll_seconds": 10,
                "hour_format": "twenty_four",
                "canvas": { "kind": "container", "element_id": "clock" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.pre_roll_seconds, 10);
        assert_eq!(config.post_roll_seconds, 4);
        assert_eq!(config.hour_format, HourFormat::TwentyFour);
        assert_eq!(
            config.canvas,
            CanvasSizing::Container {
                element_id: "clock".to_owned()
            }
        );
    }

    #[test]
    fn rejects_inverted_lerp_range() {
        let config = DisplayConfig {
            min_lerp_factor: 0.05,
            max_lerp_factor: 0.04,
            ..DisplayConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ClockError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn rejects_zero_frame_rate_and_bad_width() {
        let config = DisplayConfig {
            frame_rate: 0,
            ..DisplayConfig::default()
        };
        assert!(config.validate().is_err());

        let config = DisplayConfig {
            canvas: CanvasSizing::Fixed { width: -1.0 },
            ..DisplayConfig::default()
        };
        assert_eq!(config.validate(), Err(ClockError::InvalidCanvasWidth(-1.0)));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            DisplayConfig::from_json("{ \"frame_rate\": \"fast\" }"),
            Err(ClockError::InvalidConfig { .. })
        ));
    }
}
