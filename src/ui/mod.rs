//! UI components and application module
//!
//! This module provides the egui/eframe-based user interface for OxiSign.

mod app;
pub mod components;
mod theme;

pub use app::OxiSignApp;
pub use components::{ResultCard, ResultsDashboard, SessionView};
pub use theme::Theme;
