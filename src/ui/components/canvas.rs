//! Fixed-size logical canvas
//!
//! Every view is laid out in the session's canvas coordinates (800x600 by
//! default, y down) and anchored at the top-left of the panel it is drawn in.

use egui::{Align, Layout, Pos2, Rect, RichText, UiBuilder, Vec2};

/// Maps canvas coordinates onto the screen
#[derive(Debug, Clone, Copy)]
pub struct Canvas {
    rect: Rect,
}

impl Canvas {
    /// Canvas of `size` anchored at the top-left of the available area
    pub fn new(ui: &egui::Ui, size: Vec2) -> Self {
        Self {
            rect: Rect::from_min_size(ui.max_rect().min, size),
        }
    }

    /// Screen rectangle covered by the canvas
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Screen position of a canvas point
    pub fn pos(&self, x: f32, y: f32) -> Pos2 {
        self.rect.min + Vec2::new(x, y)
    }

    /// Screen rectangle of a canvas rectangle
    pub fn rect_at(&self, x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::from_min_size(self.pos(x, y), Vec2::new(w, h))
    }

    /// Place a label with its top-left corner at `(x, y)`
    pub fn label_at(&self, ui: &mut egui::Ui, x: f32, y: f32, text: RichText) -> egui::Response {
        let max_rect = Rect::from_min_max(self.pos(x, y), self.rect.max);
        self.place(ui, max_rect, Align::Min, text)
    }

    /// Place a label horizontally centred on the canvas, its top at `y`
    pub fn centered_label(&self, ui: &mut egui::Ui, y: f32, text: RichText) -> egui::Response {
        let max_rect = Rect::from_min_max(self.pos(0.0, y), self.rect.max);
        self.place(ui, max_rect, Align::Center, text)
    }

    fn place(
        &self,
        ui: &mut egui::Ui,
        max_rect: Rect,
        align: Align,
        text: RichText,
    ) -> egui::Response {
        ui.allocate_new_ui(
            UiBuilder::new()
                .max_rect(max_rect)
                .layout(Layout::top_down(align)),
            |ui| ui.add(egui::Label::new(text).extend().selectable(false)),
        )
        .inner
    }
}
