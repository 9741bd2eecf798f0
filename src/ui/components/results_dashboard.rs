//! Results dashboard shown once the session has finished
//!
//! Non-interactive: a title, four metric cards from the [`MetricsProvider`],
//! the overall verdict and a recommendation, plus a small balloon.

use crate::config::SessionConfig;
use crate::metrics::MetricsProvider;
use crate::ui::components::{BalloonShape, Canvas, ResultCard};
use crate::ui::theme::Theme;
use egui::{RichText, Stroke, Vec2};

pub const TITLE: &str = "AI Session Analysis";
pub const SUBTITLE: &str = "Based on airflow sensors & deep learning model";
pub const VERDICT: &str = "Overall Health Status: EXCELLENT";
pub const RECOMMENDATION: &str = "Recommendation: Maintain current exercise level.";

/// Top-left corners of the four cards: two columns, two rows
const CARD_POSITIONS: [(f32, f32); 4] = [
    (80.0, 150.0),
    (80.0, 250.0),
    (420.0, 150.0),
    (420.0, 250.0),
];

/// The end-of-session results page
pub struct ResultsDashboard<'a> {
    metrics: &'a dyn MetricsProvider,
    theme: &'a Theme,
    config: &'a SessionConfig,
}

impl<'a> ResultsDashboard<'a> {
    pub fn new(
        metrics: &'a dyn MetricsProvider,
        theme: &'a Theme,
        config: &'a SessionConfig,
    ) -> Self {
        Self {
            metrics,
            theme,
            config,
        }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let canvas = Canvas::new(ui, Vec2::new(self.config.width, self.config.height));
        let painter = ui.painter().clone();
        let center_x = self.config.center_x();

        painter.rect_filled(canvas.rect(), 0.0, self.theme.bg_results);

        canvas.centered_label(
            ui,
            40.0,
            RichText::new(TITLE)
                .size(self.theme.font_header)
                .color(self.theme.heading),
        );
        canvas.centered_label(
            ui,
            80.0,
            RichText::new(SUBTITLE)
                .size(self.theme.font_small)
                .color(self.theme.text_muted),
        );

        let metrics = self.metrics.session_metrics();
        for (metric, (x, y)) in metrics.iter().zip(CARD_POSITIONS) {
            ResultCard::new(metric, self.theme).show(ui, &canvas, x, y);
        }

        painter.line_segment(
            [canvas.pos(50.0, 360.0), canvas.pos(self.config.width - 50.0, 360.0)],
            Stroke::new(2.0, self.theme.card_border),
        );

        canvas.centered_label(
            ui,
            400.0,
            RichText::new(VERDICT)
                .size(self.theme.font_value)
                .color(self.theme.heading),
        );
        canvas.centered_label(
            ui,
            440.0,
            RichText::new(RECOMMENDATION)
                .size(self.theme.font_small)
                .color(self.theme.text_muted),
        );

        // Decorative
        BalloonShape::new(center_x, 530.0, 30.0, self.theme).paint(&painter, &canvas);
    }
}
