use crate::config::SessionConfig;
use std::time::Duration;

/// One of the two timed halves of a repetition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Preparation phase; the user rests and breathes in
    Inhale,
    /// Active phase; airflow lifts the balloon toward the target line
    Exhale,
}

impl Phase {
    /// How long this phase lasts before its timer expires
    pub fn duration(self, config: &SessionConfig) -> Duration {
        let secs = match self {
            Phase::Inhale => config.inhale_secs,
            Phase::Exhale => config.exhale_secs,
        };
        // Unvalidated configs saturate instead of panicking
        Duration::try_from_secs_f32(secs.max(0.0)).unwrap_or(Duration::MAX)
    }

    /// Instruction shown to the user during this phase
    pub fn instruction(self) -> &'static str {
        match self {
            Phase::Inhale => "INHALE (Relax...)",
            Phase::Exhale => "EXHALE (Blow Steady...)",
        }
    }
}
