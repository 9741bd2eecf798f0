//! Hot-air balloon drawing

use crate::ui::components::Canvas;
use crate::ui::theme::Theme;
use egui::Stroke;

/// Balloon with a basket hanging under it
pub struct BalloonShape<'a> {
    x: f32,
    y: f32,
    radius: f32,
    theme: &'a Theme,
}

impl<'a> BalloonShape<'a> {
    /// Balloon centred at canvas point `(x, y)`
    pub fn new(x: f32, y: f32, radius: f32, theme: &'a Theme) -> Self {
        Self {
            x,
            y,
            radius,
            theme,
        }
    }

    /// Paint the envelope, basket and ropes
    pub fn paint(&self, painter: &egui::Painter, canvas: &Canvas) {
        let (x, y, r) = (self.x, self.y.round(), self.radius);

        painter.circle_filled(canvas.pos(x, y), r, self.theme.balloon);

        // Basket is as wide as the radius, half as tall, 10px under the envelope
        let basket_w = r;
        let basket_h = (r / 2.0).floor();
        let basket_x = x - (basket_w / 2.0).floor();
        let basket_y = y + r + 10.0;
        painter.rect_filled(
            canvas.rect_at(basket_x, basket_y, basket_w, basket_h),
            0.0,
            self.theme.basket,
        );

        let rope = Stroke::new(2.0, self.theme.text_muted);
        let half = (r / 2.0).floor();
        painter.line_segment(
            [
                canvas.pos(x - half, y + r * 0.8),
                canvas.pos(basket_x + 5.0, basket_y),
            ],
            rope,
        );
        painter.line_segment(
            [
                canvas.pos(x + half, y + r * 0.8),
                canvas.pos(basket_x + basket_w - 5.0, basket_y),
            ],
            rope,
        );
    }
}
