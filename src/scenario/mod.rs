//! Scripted breathing sessions
//!
//! A scenario is a TOML file of timed pointer actions and assertions that is
//! replayed against a headless [`Session`](crate::session::Session), frame by
//! frame at the configured tick rate. Scenarios are how session behaviour is
//! exercised end to end without opening a window.
//!
//! ```toml
//! [scenario]
//! name = "Reach the first target"
//!
//! [config]
//! required_reps = 1
//!
//! [[steps]]
//! at_ms = 4100
//! action = { type = "press" }
//! assert = { type = "phase", phase = "exhale" }
//!
//! [[steps]]
//! at_ms = 7000
//! action = { type = "quit" }
//! assert = { type = "finished" }
//! ```

mod runner;

pub use runner::{ScenarioReport, ScenarioRunner};

use crate::config::SessionConfig;
use crate::error::{OxiSignError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// A scenario loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Scenario metadata
    pub scenario: ScenarioMetadata,
    /// Session settings; omitted keys use the defaults
    #[serde(default)]
    pub config: SessionConfig,
    /// Timed steps, ordered by time
    pub steps: Vec<ScenarioStep>,
}

/// Metadata about the scenario
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioMetadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A single timed step
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioStep {
    /// Session time in milliseconds at which the step runs
    pub at_ms: u64,
    /// The action to perform
    pub action: ScenarioAction,
    /// Checked after the frame in which the action ran
    #[serde(default)]
    pub assert: Option<Expectation>,
}

/// Simulated user input
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioAction {
    /// Press and hold the primary pointer button
    Press,
    /// Release the pointer button
    Release,
    /// Write a message to the log
    Log { message: String },
    /// Close the window
    Quit,
}

/// Phase names usable in assertions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedPhase {
    Inhale,
    Exhale,
    Finished,
}

/// Conditions checked against the session
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expectation {
    /// The session is in the given phase
    Phase { phase: ExpectedPhase },
    /// Exactly this many repetitions have been completed
    Reps { count: u32 },
    /// The session has finished
    Finished,
    /// The balloon sits exactly on the target line
    BalloonAtTarget,
    /// The balloon centre is at `y`, within `tolerance`
    BalloonY {
        y: f32,
        #[serde(default = "default_balloon_tolerance")]
        tolerance: f32,
    },
}

fn default_balloon_tolerance() -> f32 {
    0.01
}

impl Scenario {
    /// Load a scenario from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            OxiSignError::IOError(format!("Failed to read scenario '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a scenario
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(content)
            .map_err(|e| OxiSignError::ScenarioError(format!("Failed to parse scenario: {}", e)))?;
        scenario.validate()?;
        Ok(scenario)
    }

    fn validate(&self) -> Result<()> {
        self.config.validate()?;

        if self.steps.is_empty() {
            return Err(OxiSignError::ScenarioError(
                "Scenario must have at least one step".to_string(),
            ));
        }

        let mut last = 0;
        for step in &self.steps {
            if step.at_ms < last {
                return Err(OxiSignError::ScenarioError(format!(
                    "Steps must be ordered by time. Found step at {}ms after step at {}ms",
                    step.at_ms, last
                )));
            }
            last = step.at_ms;
        }

        if self.steps.last().map(|s| &s.action) != Some(&ScenarioAction::Quit) {
            return Err(OxiSignError::ScenarioError(
                "Scenario must end with a quit step".to_string(),
            ));
        }

        Ok(())
    }
}

impl ScenarioStep {
    /// Session time at which this step runs
    pub fn at(&self) -> Duration {
        Duration::from_millis(self.at_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        let scenario = Scenario::from_toml_str(
            r#"
            [scenario]
            name = "Hold through one exhale"

            [[steps]]
            at_ms = 4100
            action = { type = "press" }
            assert = { type = "phase", phase = "exhale" }

            [[steps]]
            at_ms = 5000
            action = { type = "log", message = "halfway" }
            assert = { type = "balloon_y", y = 450.0, tolerance = 5.0 }

            [[steps]]
            at_ms = 9000
            action = { type = "quit" }
        "#,
        )
        .unwrap();

        assert_eq!(scenario.scenario.name, "Hold through one exhale");
        assert_eq!(scenario.steps.len(), 3);
        assert_eq!(scenario.steps[0].action, ScenarioAction::Press);
        assert_eq!(
            scenario.steps[0].assert,
            Some(Expectation::Phase {
                phase: ExpectedPhase::Exhale
            })
        );
        assert!(matches!(
            scenario.steps[1].assert,
            Some(Expectation::BalloonY { tolerance, .. }) if tolerance == 5.0
        ));
        assert_eq!(scenario.config, SessionConfig::default());
    }

    #[test]
    fn test_config_override() {
        let scenario = Scenario::from_toml_str(
            r#"
            [scenario]
            name = "Short session"

            [config]
            required_reps = 1
            exhale_secs = 2.0

            [[steps]]
            at_ms = 100
            action = { type = "quit" }
        "#,
        )
        .unwrap();

        assert_eq!(scenario.config.required_reps, 1);
        assert_eq!(scenario.config.exhale_secs, 2.0);
        assert_eq!(scenario.config.inhale_secs, 4.0);
    }

    #[test]
    fn test_rejects_unordered_steps() {
        let result = Scenario::from_toml_str(
            r#"
            [scenario]
            name = "Out of order"

            [[steps]]
            at_ms = 500
            action = { type = "press" }

            [[steps]]
            at_ms = 100
            action = { type = "quit" }
        "#,
        );
        assert!(matches!(result, Err(OxiSignError::ScenarioError(_))));
    }

    #[test]
    fn test_requires_final_quit() {
        let result = Scenario::from_toml_str(
            r#"
            [scenario]
            name = "Never quits"

            [[steps]]
            at_ms = 500
            action = { type = "press" }
        "#,
        );
        assert!(matches!(result, Err(OxiSignError::ScenarioError(_))));
    }

    #[test]
    fn test_rejects_infinite_phase_override() {
        let result = Scenario::from_toml_str(
            r#"
            [scenario]
            name = "Endless inhale"

            [config]
            inhale_secs = inf

            [[steps]]
            at_ms = 100
            action = { type = "quit" }
        "#,
        );
        assert!(matches!(result, Err(OxiSignError::ConfigError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Scenario::load("/nonexistent/oxisign/scenario.toml");
        assert!(matches!(result, Err(OxiSignError::IOError(_))));
    }
}
