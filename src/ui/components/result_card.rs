//! Result card component for the results dashboard

use crate::metrics::ResultMetric;
use crate::ui::components::Canvas;
use crate::ui::theme::Theme;
use egui::{RichText, Stroke};

/// Card size in canvas pixels
pub const CARD_WIDTH: f32 = 300.0;
pub const CARD_HEIGHT: f32 = 80.0;

/// Inset of the label and value from the card corner
const PADDING: f32 = 15.0;
/// Offset of the value line from the card top
const VALUE_OFFSET: f32 = 45.0;

/// A rounded card showing one metric: grey label above a coloured value
pub struct ResultCard<'a> {
    metric: &'a ResultMetric,
    theme: &'a Theme,
}

impl<'a> ResultCard<'a> {
    pub fn new(metric: &'a ResultMetric, theme: &'a Theme) -> Self {
        Self { metric, theme }
    }

    /// Draw the card with its top-left corner at canvas point `(x, y)`
    pub fn show(self, ui: &mut egui::Ui, canvas: &Canvas, x: f32, y: f32) {
        let rect = canvas.rect_at(x, y, CARD_WIDTH, CARD_HEIGHT);
        let painter = ui.painter();
        painter.rect_filled(rect, self.theme.card_rounding, self.theme.card_fill);
        painter.rect_stroke(
            rect,
            self.theme.card_rounding,
            Stroke::new(2.0, self.theme.card_border),
        );

        canvas.label_at(
            ui,
            x + PADDING,
            y + PADDING,
            RichText::new(&self.metric.label)
                .size(self.theme.font_label)
                .color(self.theme.text_muted),
        );
        canvas.label_at(
            ui,
            x + PADDING,
            y + VALUE_OFFSET,
            RichText::new(&self.metric.value)
                .size(self.theme.font_value)
                .color(self.theme.severity_color(self.metric.severity)),
        );
    }
}
