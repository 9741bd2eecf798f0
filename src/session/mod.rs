//! Breath session state machine
//!
//! A session alternates between a timed [`Phase::Inhale`] and an
//! [`Phase::Exhale`] in which airflow lifts the balloon toward a target line.
//! Every exhale that ends, whether the balloon reached the line or the timer
//! ran out, counts as one repetition. After the required number of
//! repetitions the session moves to [`SessionState::Finished`] and stays there.
//!
//! The session owns no clock. Callers pass `now`, the time elapsed since the
//! session started, into [`Session::advance`] once per simulation tick.

mod balloon;
mod phase;

pub use balloon::{next_target, Balloon};
pub use phase::Phase;

use crate::config::SessionConfig;
use crate::input::BreathSensor;
use std::time::Duration;
use tracing::debug;

/// Where the session currently is
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    /// Cycling through inhale and exhale
    Active {
        phase: Phase,
        /// Session time at which the current phase began
        phase_started: Duration,
    },
    /// All repetitions done. Absorbing: nothing leaves this state.
    Finished,
}

/// How an exhale ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepOutcome {
    /// The balloon reached the target line
    Reached,
    /// The exhale timer expired first.
    ///
    /// Still counted as a completed repetition; whether a timeout should
    /// instead ask the user to retry is undecided.
    TimedOut,
}

/// Something noteworthy that happened during one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// Inhale ended and a new target line was set
    ExhaleStarted { target_y: f32 },
    /// An exhale ended and the session went back to inhale
    RepCompleted { reps: u32, outcome: RepOutcome },
    /// The final exhale ended and the session is over
    Finished { reps: u32, outcome: RepOutcome },
}

/// One breathing session
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    state: SessionState,
    reps: u32,
    balloon: Balloon,
    target_y: f32,
}

impl Session {
    /// Start a session in the inhale phase at session time zero
    pub fn new(config: SessionConfig) -> Self {
        let balloon = Balloon::at_rest(&config);
        let target_y = balloon.y - config.target_step;
        Self {
            state: SessionState::Active {
                phase: Phase::Inhale,
                phase_started: Duration::ZERO,
            },
            reps: 0,
            balloon,
            target_y,
            config,
        }
    }

    /// Advance the session by one tick.
    ///
    /// The sensor is polled exactly once when the session is exhaling and not
    /// at all otherwise. Once finished this is a no-op.
    pub fn advance(
        &mut self,
        sensor: &mut dyn BreathSensor,
        now: Duration,
    ) -> Option<SessionEvent> {
        let SessionState::Active {
            phase,
            phase_started,
        } = self.state
        else {
            return None;
        };

        let expired = now.saturating_sub(phase_started) >= phase.duration(&self.config);

        match phase {
            Phase::Inhale => {
                if !expired {
                    return None;
                }
                self.target_y = next_target(self.balloon.y, &self.config);
                self.enter(Phase::Exhale, now);
                Some(SessionEvent::ExhaleStarted {
                    target_y: self.target_y,
                })
            }
            Phase::Exhale => {
                let signal = sensor.read_breath_signal();
                self.balloon
                    .lift(signal.lift(self.config.lift_power), self.target_y);

                let outcome = if self
                    .balloon
                    .settle(self.target_y, self.config.target_tolerance)
                {
                    RepOutcome::Reached
                } else if expired {
                    RepOutcome::TimedOut
                } else {
                    return None;
                };

                Some(self.complete_rep(outcome, now))
            }
        }
    }

    fn complete_rep(&mut self, outcome: RepOutcome, now: Duration) -> SessionEvent {
        self.reps += 1;
        debug!(
            "Rep {}/{} complete ({:?}), balloon at {:.1}",
            self.reps, self.config.required_reps, outcome, self.balloon.y
        );

        if self.reps >= self.config.required_reps {
            self.state = SessionState::Finished;
            SessionEvent::Finished {
                reps: self.reps,
                outcome,
            }
        } else {
            self.enter(Phase::Inhale, now);
            SessionEvent::RepCompleted {
                reps: self.reps,
                outcome,
            }
        }
    }

    fn enter(&mut self, phase: Phase, now: Duration) {
        self.state = SessionState::Active {
            phase,
            phase_started: now,
        };
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current phase, or `None` once finished
    pub fn phase(&self) -> Option<Phase> {
        match self.state {
            SessionState::Active { phase, .. } => Some(phase),
            SessionState::Finished => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    pub fn reps(&self) -> u32 {
        self.reps
    }

    pub fn required_reps(&self) -> u32 {
        self.config.required_reps
    }

    pub fn balloon(&self) -> &Balloon {
        &self.balloon
    }

    /// The target line for the current (or next) exhale
    pub fn target_y(&self) -> f32 {
        self.target_y
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Seconds left in the current phase, floored at zero
    pub fn time_left(&self, now: Duration) -> f32 {
        match self.state {
            SessionState::Active {
                phase,
                phase_started,
            } => {
                let elapsed = now.saturating_sub(phase_started);
                phase
                    .duration(&self.config)
                    .saturating_sub(elapsed)
                    .as_secs_f32()
            }
            SessionState::Finished => 0.0,
        }
    }

    /// Instruction for the current phase; empty once finished
    pub fn instruction(&self) -> &'static str {
        self.phase().map(Phase::instruction).unwrap_or_default()
    }
}
