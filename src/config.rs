//! Session configuration
//!
//! Every tunable constant of a breathing session lives here. The defaults
//! reproduce the calibrated values of the demo: an 800x600 canvas, 4s inhale,
//! 10s exhale, three repetitions.

use crate::error::{OxiSignError, Result};
use serde::Deserialize;
use std::time::Duration;

/// Configuration for a single breathing session
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Canvas width in logical pixels
    pub width: f32,

    /// Canvas height in logical pixels
    pub height: f32,

    /// Preparation (rest) phase length in seconds
    pub inhale_secs: f32,

    /// Active exertion phase length in seconds
    pub exhale_secs: f32,

    /// Total cycles for the session
    pub required_reps: u32,

    /// Upward movement per tick at full breath strength
    pub lift_power: f32,

    /// Distance the target line moves up per cycle
    pub target_step: f32,

    /// The target line never goes above this y coordinate
    pub top_margin: f32,

    /// How close to the target line counts as reaching it
    pub target_tolerance: f32,

    /// Starting y coordinate of the balloon centre
    pub rest_y: f32,

    /// Balloon radius
    pub balloon_radius: f32,

    /// Simulation ticks per second (also the repaint rate)
    pub ticks_per_second: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            inhale_secs: 4.0,
            exhale_secs: 10.0,
            required_reps: 3,
            lift_power: 0.8,
            target_step: 120.0,
            top_margin: 100.0,
            target_tolerance: 2.0,
            rest_y: 500.0,
            balloon_radius: 40.0,
            ticks_per_second: 60,
        }
    }
}

impl SessionConfig {
    /// Longest accepted phase, in seconds
    pub const MAX_PHASE_SECS: f32 = 3600.0;

    /// Parse a configuration from TOML; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SessionConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the phase durations in seconds
    pub fn with_durations(mut self, inhale_secs: f32, exhale_secs: f32) -> Self {
        self.inhale_secs = inhale_secs;
        self.exhale_secs = exhale_secs;
        self
    }

    /// Set the number of repetitions needed to finish the session
    pub fn with_required_reps(mut self, required_reps: u32) -> Self {
        self.required_reps = required_reps;
        self
    }

    /// Set the lift applied per tick at full breath strength
    pub fn with_lift_power(mut self, lift_power: f32) -> Self {
        self.lift_power = lift_power;
        self
    }

    /// Set the "close enough" margin around the target line
    pub fn with_target_tolerance(mut self, target_tolerance: f32) -> Self {
        self.target_tolerance = target_tolerance;
        self
    }

    /// Horizontal centre of the canvas, where the balloon floats
    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    /// Length of one simulation tick
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.ticks_per_second.max(1) as f64)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let floats = [
            ("width", self.width),
            ("height", self.height),
            ("inhale_secs", self.inhale_secs),
            ("exhale_secs", self.exhale_secs),
            ("lift_power", self.lift_power),
            ("target_step", self.target_step),
            ("top_margin", self.top_margin),
            ("target_tolerance", self.target_tolerance),
            ("rest_y", self.rest_y),
            ("balloon_radius", self.balloon_radius),
        ];
        if let Some((name, value)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(OxiSignError::ConfigError(format!(
                "{} must be a finite number, got {}",
                name, value
            )));
        }

        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(OxiSignError::ConfigError(format!(
                "Canvas size must be positive, got {}x{}",
                self.width, self.height
            )));
        }

        if self.inhale_secs <= 0.0 || self.exhale_secs <= 0.0 {
            return Err(OxiSignError::ConfigError(format!(
                "Phase durations must be positive, got inhale={}s exhale={}s",
                self.inhale_secs, self.exhale_secs
            )));
        }

        if self.inhale_secs > Self::MAX_PHASE_SECS || self.exhale_secs > Self::MAX_PHASE_SECS {
            return Err(OxiSignError::ConfigError(format!(
                "Phase durations must not exceed {}s, got inhale={}s exhale={}s",
                Self::MAX_PHASE_SECS,
                self.inhale_secs,
                self.exhale_secs
            )));
        }

        if self.required_reps == 0 {
            return Err(OxiSignError::ConfigError(
                "required_reps must be at least 1".to_string(),
            ));
        }

        if self.lift_power <= 0.0 {
            return Err(OxiSignError::ConfigError(format!(
                "lift_power must be positive, got {}",
                self.lift_power
            )));
        }

        if self.target_step < 0.0 || self.target_tolerance < 0.0 {
            return Err(OxiSignError::ConfigError(
                "target_step and target_tolerance must not be negative".to_string(),
            ));
        }

        if !(0.0..=self.height).contains(&self.top_margin) {
            return Err(OxiSignError::ConfigError(format!(
                "top_margin {} is outside the canvas",
                self.top_margin
            )));
        }

        if self.rest_y < self.top_margin || self.rest_y > self.height {
            return Err(OxiSignError::ConfigError(format!(
                "rest_y {} must lie between top_margin {} and the canvas bottom {}",
                self.rest_y, self.top_margin, self.height
            )));
        }

        if self.ticks_per_second == 0 {
            return Err(OxiSignError::ConfigError(
                "ticks_per_second must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.required_reps, 3);
        assert_eq!(config.rest_y, 500.0);
        assert_eq!(config.center_x(), 400.0);
    }

    #[test]
    fn test_config_builder() {
        let config = SessionConfig::default()
            .with_durations(1.0, 2.0)
            .with_required_reps(5)
            .with_target_tolerance(0.5);

        assert_eq!(config.inhale_secs, 1.0);
        assert_eq!(config.exhale_secs, 2.0);
        assert_eq!(config.required_reps, 5);
        assert_eq!(config.target_tolerance, 0.5);
    }

    #[test]
    fn test_zero_reps_rejected() {
        let config = SessionConfig::default().with_required_reps(0);
        assert!(matches!(
            config.validate(),
            Err(OxiSignError::ConfigError(_))
        ));
    }

    #[test]
    fn test_rest_above_margin_rejected() {
        let config = SessionConfig {
            rest_y: 50.0,
            ..SessionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SessionConfig::from_toml_str(
            r#"
            required_reps = 2
            lift_power = 1.5
        "#,
        )
        .unwrap();

        assert_eq!(config.required_reps, 2);
        assert_eq!(config.lift_power, 1.5);
        assert_eq!(config.inhale_secs, 4.0);
        assert_eq!(config.ticks_per_second, 60);
    }

    #[test]
    fn test_invalid_toml_value_rejected() {
        let result = SessionConfig::from_toml_str("exhale_secs = -1.0");
        assert!(result.is_err());
    }

    #[test]
    fn test_infinite_inhale_rejected() {
        let result = SessionConfig::from_toml_str("inhale_secs = inf");
        assert!(matches!(
            result,
            Err(OxiSignError::ConfigError(msg)) if msg.contains("inhale_secs")
        ));
    }

    #[test]
    fn test_oversized_exhale_rejected() {
        let result = SessionConfig::from_toml_str("exhale_secs = 1e30");
        assert!(matches!(result, Err(OxiSignError::ConfigError(_))));

        let at_limit = SessionConfig::default().with_durations(4.0, SessionConfig::MAX_PHASE_SECS);
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_nan_lift_power_rejected() {
        let result = SessionConfig::from_toml_str("lift_power = nan");
        assert!(matches!(
            result,
            Err(OxiSignError::ConfigError(msg)) if msg.contains("lift_power")
        ));

        let config = SessionConfig::default().with_lift_power(f32::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tick_interval() {
        let config = SessionConfig::default();
        let tick = config.tick_interval();
        assert!((tick.as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);
    }
}
