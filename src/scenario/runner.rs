//! Frame-by-frame scenario replay
//!
//! The runner drives a [`Session`] the same way the window does: the pointer
//! state is written into a [`PointerSensor`] and the session is advanced once
//! per tick, with each tick's session time derived from the tick rate.

use super::{ExpectedPhase, Expectation, Scenario, ScenarioAction};
use crate::input::PointerSensor;
use crate::session::{Phase, Session, SessionEvent};
use std::time::Duration;
use tracing::{debug, error, info};

/// Outcome of a scenario replay
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    /// Scenario name
    pub name: String,
    /// Reasons for every failed assertion, in order
    pub failures: Vec<String>,
    /// Number of assertions that were checked
    pub assertions_checked: usize,
    /// Session events in the order they happened
    pub events: Vec<SessionEvent>,
    /// Session time at which the quit step ran
    pub quit_at: Duration,
    /// Repetitions completed when the scenario ended
    pub reps: u32,
    /// Whether the session had finished when the scenario ended
    pub finished: bool,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        let status = if self.passed() { "PASSED" } else { "FAILED" };
        format!(
            "[SCENARIO] '{}' {}: {} assertions, {} failed, {} reps, quit at {:?}",
            self.name,
            status,
            self.assertions_checked,
            self.failures.len(),
            self.reps,
            self.quit_at
        )
    }
}

/// Replays a [`Scenario`] against a fresh session
pub struct ScenarioRunner {
    scenario: Scenario,
    session: Session,
    sensor: PointerSensor,
}

impl ScenarioRunner {
    pub fn new(scenario: Scenario) -> Self {
        info!("[SCENARIO] Loaded scenario: {}", scenario.scenario.name);
        if !scenario.scenario.description.is_empty() {
            info!("[SCENARIO] Description: {}", scenario.scenario.description);
        }

        let session = Session::new(scenario.config.clone());
        Self {
            scenario,
            session,
            sensor: PointerSensor::new(),
        }
    }

    /// Run the scenario to its quit step.
    ///
    /// Each frame runs the steps that are due, advances the session by one
    /// tick, then checks the assertions of the steps that ran.
    pub fn run(mut self) -> ScenarioReport {
        let interval = self.scenario.config.tick_interval();
        let steps = std::mem::take(&mut self.scenario.steps);

        let mut report = ScenarioReport {
            name: self.scenario.scenario.name.clone(),
            failures: Vec::new(),
            assertions_checked: 0,
            events: Vec::new(),
            quit_at: Duration::ZERO,
            reps: 0,
            finished: false,
        };

        let mut next_step = 0;
        let mut frame: u32 = 0;
        let mut quit = false;

        while !quit && next_step < steps.len() {
            let now = interval * frame;

            let first_due = next_step;
            while next_step < steps.len() && steps[next_step].at() <= now {
                let step = &steps[next_step];
                debug!("[SCENARIO] {:?} at {}ms", step.action, step.at_ms);
                match &step.action {
                    ScenarioAction::Press => self.sensor.set_pressed(true),
                    ScenarioAction::Release => self.sensor.set_pressed(false),
                    ScenarioAction::Log { message } => info!("[SCENARIO] Log: {}", message),
                    ScenarioAction::Quit => {
                        quit = true;
                        report.quit_at = now;
                    }
                }
                next_step += 1;
            }

            if let Some(event) = self.session.advance(&mut self.sensor, now) {
                report.events.push(event);
            }

            for step in &steps[first_due..next_step] {
                if let Some(expectation) = &step.assert {
                    report.assertions_checked += 1;
                    if let Err(reason) = self.check(expectation) {
                        error!(
                            "[SCENARIO] FAIL at {}ms: {:?} - {}",
                            step.at_ms, expectation, reason
                        );
                        report.failures.push(format!("at {}ms: {}", step.at_ms, reason));
                    } else {
                        info!("[SCENARIO] PASS at {}ms: {:?}", step.at_ms, expectation);
                    }
                }
            }

            frame += 1;
        }

        report.reps = self.session.reps();
        report.finished = self.session.is_finished();
        info!("{}", report.summary());
        report
    }

    /// Check one expectation against the current session state
    fn check(&self, expectation: &Expectation) -> Result<(), String> {
        let session = &self.session;
        match expectation {
            Expectation::Phase { phase } => {
                let actual = match session.phase() {
                    Some(Phase::Inhale) => ExpectedPhase::Inhale,
                    Some(Phase::Exhale) => ExpectedPhase::Exhale,
                    None => ExpectedPhase::Finished,
                };
                if actual == *phase {
                    Ok(())
                } else {
                    Err(format!("expected phase {:?}, got {:?}", phase, actual))
                }
            }
            Expectation::Reps { count } => {
                if session.reps() == *count {
                    Ok(())
                } else {
                    Err(format!("expected {} reps, got {}", count, session.reps()))
                }
            }
            Expectation::Finished => {
                if session.is_finished() {
                    Ok(())
                } else {
                    Err(format!(
                        "expected session to be finished, {} of {} reps done",
                        session.reps(),
                        session.required_reps()
                    ))
                }
            }
            Expectation::BalloonAtTarget => {
                let y = session.balloon().y;
                if y == session.target_y() {
                    Ok(())
                } else {
                    Err(format!(
                        "expected balloon on target {}, got {}",
                        session.target_y(),
                        y
                    ))
                }
            }
            Expectation::BalloonY { y, tolerance } => {
                let actual = session.balloon().y;
                if (actual - y).abs() <= *tolerance {
                    Ok(())
                } else {
                    Err(format!("expected balloon at {} ± {}, got {}", y, tolerance, actual))
                }
            }
        }
    }
}
