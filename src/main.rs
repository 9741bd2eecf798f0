//! OxiSign - breathing trainer
//!
//! Main entry point for the OxiSign application.

use anyhow::Result;
use eframe::egui;
use oxisign::ui::OxiSignApp;
use oxisign::SessionConfig;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oxisign=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting OxiSign breathing trainer");

    let config = SessionConfig::default();
    if let Err(e) = config.validate() {
        error!("{}", e);
        anyhow::bail!(e.user_message());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width, config.height])
            .with_resizable(false)
            .with_title("OxiSign - AI Respiratory Analysis"),
        ..Default::default()
    };

    eframe::run_native(
        "OxiSign",
        options,
        Box::new(|cc| Ok(Box::new(OxiSignApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to start display: {}", e))?;

    info!("OxiSign exited");
    Ok(())
}
