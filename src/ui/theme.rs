//! Theme and styling for the OxiSign UI
//!
//! Colours are chosen for a calm, clinical feel: sky-blue play field, soft
//! off-white results page.

use crate::metrics::Severity;
use crate::session::Phase;
use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Visuals};

/// Application theme configuration
#[derive(Clone, Debug)]
pub struct Theme {
    /// Primary brand colour, also the inhale colour
    pub primary: Color32,
    /// Header text on the results page
    pub heading: Color32,
    /// Success indicators and the exhale colour
    pub success: Color32,
    /// Target line
    pub target: Color32,

    /// Play-field background
    pub sky: Color32,
    /// Results page background
    pub bg_results: Color32,
    /// Result card fill
    pub card_fill: Color32,
    /// Result card border and separators
    pub card_border: Color32,

    /// Secondary text and balloon ropes
    pub text_muted: Color32,

    pub balloon: Color32,
    pub basket: Color32,

    /// Border radius for result cards
    pub card_rounding: Rounding,

    /// Large timer / page title
    pub font_header: f32,
    /// Instruction line and card values
    pub font_value: f32,
    /// Card labels
    pub font_label: f32,
    /// Counters, captions
    pub font_small: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::calm()
    }
}

impl Theme {
    /// The default calm palette
    pub fn calm() -> Self {
        Self {
            primary: Color32::from_rgb(0, 120, 255),  // Blue
            heading: Color32::from_rgb(0, 50, 150),   // Dark blue
            success: Color32::from_rgb(0, 180, 0),    // Green
            target: Color32::from_rgb(200, 0, 0),     // Red

            sky: Color32::from_rgb(135, 206, 235),
            bg_results: Color32::from_rgb(245, 245, 250),
            card_fill: Color32::WHITE,
            card_border: Color32::from_rgb(220, 220, 220),

            text_muted: Color32::from_rgb(100, 100, 100),

            balloon: Color32::from_rgb(255, 100, 100),
            basket: Color32::from_rgb(139, 69, 19), // Saddle brown

            card_rounding: Rounding::same(10.0),

            font_header: 36.0,
            font_value: 28.0,
            font_label: 24.0,
            font_small: 20.0,
        }
    }

    /// Apply this theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::light();

        visuals.panel_fill = self.sky;
        visuals.window_fill = self.bg_results;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_muted);
        visuals.selection.bg_fill = self.primary.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.primary);

        ctx.set_visuals(visuals);

        // Use default fonts (egui's built-in fonts)
        ctx.set_fonts(egui::FontDefinitions::default());

        let mut style = (*ctx.style()).clone();
        style.text_styles.insert(
            egui::TextStyle::Heading,
            FontId::new(self.font_header, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            FontId::new(self.font_small, FontFamily::Proportional),
        );

        ctx.set_style(style);
    }

    /// Colour of the instruction and timer for a phase
    pub fn phase_color(&self, phase: Phase) -> Color32 {
        match phase {
            Phase::Inhale => self.primary,
            Phase::Exhale => self.success,
        }
    }

    /// Colour of a result-card value
    pub fn severity_color(&self, severity: Severity) -> Color32 {
        match severity {
            Severity::Success => self.success,
            Severity::Info => self.primary,
            Severity::Neutral => self.heading,
        }
    }
}
