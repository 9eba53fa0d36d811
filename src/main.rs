//! Online Learning - Main Entry Point

use online_learning::app::application::run_app;
use online_learning::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let _log_guard = init_logging()?;

    tracing::info!("Starting Online Learning...");

    // Run the GPUI application
    run_app()?;
    Ok(())
}
