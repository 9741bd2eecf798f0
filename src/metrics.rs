//! Session analytics shown on the results dashboard
//!
//! The dashboard asks a [`MetricsProvider`] for its four cards and renders
//! whatever comes back. [`MockMetrics`] is the only provider so far and
//! returns fixed demo values; a provider backed by real airflow analysis can
//! replace it without touching the rendering code.

/// How a metric value should be read, which drives its colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Good result
    Success,
    /// Informational, steady
    Info,
    /// Plain measurement
    Neutral,
}

/// A labelled value for one result card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultMetric {
    pub label: String,
    pub value: String,
    pub severity: Severity,
}

impl ResultMetric {
    pub fn new(label: impl Into<String>, value: impl Into<String>, severity: Severity) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            severity,
        }
    }
}

/// Source of the four result-card metrics
pub trait MetricsProvider {
    fn session_metrics(&self) -> [ResultMetric; 4];
}

/// Fixed demo analytics
#[derive(Debug, Clone, Copy, Default)]
pub struct MockMetrics;

impl MetricsProvider for MockMetrics {
    fn session_metrics(&self) -> [ResultMetric; 4] {
        [
            // Flow rate
            ResultMetric::new("Avg Breath Strength", "88% (Strong)", Severity::Success),
            // Variance in flow
            ResultMetric::new("Flow Stability", "94% (Steady)", Severity::Info),
            ResultMetric::new("Lung Capacity Used", "2.1 Liters", Severity::Neutral),
            ResultMetric::new("Chest Expansion", "+5.2% Improved", Severity::Success),
        ]
    }
}
