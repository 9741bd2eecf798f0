//! Main OxiSign application struct and eframe integration
//!
//! This module contains the main OxiSignApp that implements eframe::App.

use crate::config::SessionConfig;
use crate::input::PointerSensor;
use crate::metrics::{MetricsProvider, MockMetrics};
use crate::pacing::FramePacer;
use crate::session::{RepOutcome, Session, SessionEvent};
use crate::ui::components::{ResultsDashboard, SessionView};
use crate::ui::theme::Theme;
use egui::{CentralPanel, Frame};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Main OxiSign application
pub struct OxiSignApp {
    /// Whether the app has been initialized
    initialized: bool,
    /// The breathing session being played
    session: Session,
    /// Pointer-button stand-in for the airflow sensor
    sensor: PointerSensor,
    /// Fixed-rate simulation clock
    pacer: FramePacer,
    /// Session time zero
    started: Instant,
    /// Source of the results-dashboard cards
    metrics: Box<dyn MetricsProvider>,
    /// UI theme
    theme: Theme,
}

impl OxiSignApp {
    /// Create a new OxiSign application
    pub fn new(cc: &eframe::CreationContext<'_>, config: SessionConfig) -> Self {
        let theme = Theme::calm();

        // Apply theme to egui context
        theme.apply(&cc.egui_ctx);

        Self::with_metrics(config, theme, Box::new(MockMetrics))
    }

    /// Create the application with a specific metrics provider
    pub fn with_metrics(
        config: SessionConfig,
        theme: Theme,
        metrics: Box<dyn MetricsProvider>,
    ) -> Self {
        let pacer = FramePacer::new(config.tick_interval());
        Self {
            initialized: false,
            session: Session::new(config),
            sensor: PointerSensor::new(),
            pacer,
            started: Instant::now(),
            metrics,
            theme,
        }
    }

    /// Initialize the application (called on first frame)
    fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        // Session time starts when the first frame is shown, not at window creation
        self.started = Instant::now();

        let config = self.session.config();
        info!(
            "OxiSign UI initialized: {} reps, inhale {}s, exhale {}s",
            config.required_reps, config.inhale_secs, config.exhale_secs
        );
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run one frame with the session clock at `elapsed`.
    ///
    /// Samples the pointer, runs the due ticks, draws the current view and
    /// schedules the next repaint.
    pub fn frame(&mut self, ctx: &egui::Context, elapsed: Duration) {
        self.step_session(ctx, elapsed);

        CentralPanel::default()
            .frame(Frame::none())
            .show(ctx, |ui| {
                if self.session.is_finished() {
                    ResultsDashboard::new(
                        self.metrics.as_ref(),
                        &self.theme,
                        self.session.config(),
                    )
                    .show(ui);
                } else {
                    SessionView::new(&self.session, &self.theme)
                        .now(self.pacer.simulated())
                        .show(ui);
                }
            });

        // Results page is static; only the running session needs a steady frame rate
        if !self.session.is_finished() {
            ctx.request_repaint_after(self.pacer.interval());
        }
    }

    /// Run every simulation tick that is due
    fn step_session(&mut self, ctx: &egui::Context, elapsed: Duration) {
        if self.session.is_finished() {
            return;
        }

        // Sampled once per frame and held for all ticks of the frame
        let pressed = ctx.input(|i| i.pointer.primary_down());
        self.sensor.set_pressed(pressed);

        for tick in self.pacer.due_ticks(elapsed) {
            if let Some(event) = self.session.advance(&mut self.sensor, tick) {
                log_event(event);
            }
        }
    }
}

fn log_event(event: SessionEvent) {
    match event {
        SessionEvent::ExhaleStarted { target_y } => {
            info!("[SESSION] Exhale started, target line at {:.0}", target_y);
        }
        SessionEvent::RepCompleted { reps, outcome } => {
            info!("[SESSION] Rep {} complete ({})", reps, outcome_label(outcome));
        }
        SessionEvent::Finished { reps, outcome } => {
            info!(
                "[SESSION] Final rep {} complete ({}), showing results",
                reps,
                outcome_label(outcome)
            );
        }
    }
}

fn outcome_label(outcome: RepOutcome) -> &'static str {
    match outcome {
        RepOutcome::Reached => "target reached",
        RepOutcome::TimedOut => "timed out",
    }
}

impl eframe::App for OxiSignApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Initialize on first frame
        self.initialize();

        let elapsed = self.started.elapsed();
        self.frame(ctx, elapsed);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        debug!(
            "Session state at exit: {:?}, {} reps",
            self.session.state(),
            self.session.reps()
        );
        info!("OxiSign shutting down");
    }
}
