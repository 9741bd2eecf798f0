//! UI components module
//!
//! Drawing components for the play field and the results dashboard.

pub mod balloon;
pub mod canvas;
pub mod result_card;
pub mod results_dashboard;
pub mod session_view;

pub use balloon::BalloonShape;
pub use canvas::Canvas;
pub use result_card::ResultCard;
pub use results_dashboard::ResultsDashboard;
pub use session_view::SessionView;
