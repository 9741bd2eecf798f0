//! OxiSign - gamified breathing-exercise trainer
//!
//! A balloon rises while the user blows (simulated by holding the primary
//! pointer button) through timed inhale/exhale cycles. After the required
//! number of repetitions a results dashboard is shown.

pub mod config;
pub mod error;
pub mod input;
pub mod metrics;
pub mod pacing;
pub mod scenario;
pub mod session;
pub mod ui;

// Re-export error types
pub use error::{OxiSignError, Result};

pub use config::SessionConfig;
pub use input::{BreathSensor, BreathSignal, PointerSensor, ScriptedSensor};
pub use metrics::{MetricsProvider, MockMetrics, ResultMetric, Severity};
pub use session::{Phase, RepOutcome, Session, SessionEvent, SessionState};
