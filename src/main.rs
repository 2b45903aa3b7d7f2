//! Dashboard UI - Showcase Entry Point

use dashboard_ui::app::application::run_app;
use dashboard_ui::helpers::is_development;

fn main() {
    let level = if is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    tracing::info!("Starting Dashboard UI showcase...");

    run_app();
}
