//! Play-field view shown while the session is running
//!
//! Draws the sky, the target line (exhale only), the balloon and the overlay
//! text: phase instruction, countdown and repetition counter.

use crate::session::{Phase, Session};
use crate::ui::components::{BalloonShape, Canvas};
use crate::ui::theme::Theme;
use egui::{RichText, Stroke, Vec2};
use std::time::Duration;

/// Text shown next to the target line
pub const TARGET_LABEL: &str = "Target Line";

/// View of an active session
pub struct SessionView<'a> {
    session: &'a Session,
    theme: &'a Theme,
    now: Duration,
}

impl<'a> SessionView<'a> {
    pub fn new(session: &'a Session, theme: &'a Theme) -> Self {
        Self {
            session,
            theme,
            now: Duration::ZERO,
        }
    }

    /// Session time used for the countdown
    pub fn now(mut self, now: Duration) -> Self {
        self.now = now;
        self
    }

    /// Countdown text, one decimal place
    pub fn timer_text(&self) -> String {
        format!("{:.1} s", self.session.time_left(self.now))
    }

    /// Repetition counter text
    pub fn reps_text(&self) -> String {
        format!(
            "Reps: {} / {}",
            self.session.reps(),
            self.session.required_reps()
        )
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let config = self.session.config();
        let canvas = Canvas::new(ui, Vec2::new(config.width, config.height));
        let painter = ui.painter().clone();

        painter.rect_filled(canvas.rect(), 0.0, self.theme.sky);

        let Some(phase) = self.session.phase() else {
            return;
        };

        if phase == Phase::Exhale {
            let target_y = self.session.target_y();
            painter.line_segment(
                [canvas.pos(0.0, target_y), canvas.pos(config.width, target_y)],
                Stroke::new(3.0, self.theme.target),
            );
            canvas.label_at(
                ui,
                config.width - 150.0,
                target_y - 25.0,
                RichText::new(TARGET_LABEL)
                    .size(self.theme.font_small)
                    .color(self.theme.target),
            );
        }

        let balloon = self.session.balloon();
        BalloonShape::new(balloon.x, balloon.y, balloon.radius, self.theme)
            .paint(&painter, &canvas);

        let phase_color = self.theme.phase_color(phase);
        canvas.centered_label(
            ui,
            50.0,
            RichText::new(phase.instruction())
                .size(self.theme.font_value)
                .color(phase_color),
        );
        canvas.centered_label(
            ui,
            100.0,
            RichText::new(self.timer_text())
                .size(self.theme.font_header)
                .color(phase_color),
        );
        canvas.label_at(
            ui,
            20.0,
            20.0,
            RichText::new(self.reps_text())
                .size(self.theme.font_small)
                .color(self.theme.text_muted),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;

    #[test]
    fn test_overlay_text() {
        let session = Session::new(SessionConfig::default());
        let theme = Theme::calm();

        let view = SessionView::new(&session, &theme).now(Duration::from_millis(1200));
        assert_eq!(view.timer_text(), "2.8 s");
        assert_eq!(view.reps_text(), "Reps: 0 / 3");
    }

    #[test]
    fn test_timer_floors_at_zero() {
        let session = Session::new(SessionConfig::default());
        let theme = Theme::calm();

        let view = SessionView::new(&session, &theme).now(Duration::from_secs(30));
        assert_eq!(view.timer_text(), "0.0 s");
    }
}
