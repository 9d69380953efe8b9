//! fileview entry point.
//!
//! Mounts a single file view against the configured update endpoint
//! and runs until interrupted.

use tracing_subscriber::EnvFilter;

use fileview_client::config::ViewConfig;
use fileview_client::view::{FileView, TerminalSurface};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = ViewConfig::from_env();
    tracing::info!(
        endpoint = %config.endpoint,
        file = %config.file,
        mode = config.mode.as_str(),
        "starting fileview"
    );

    // Mount the view
    let view = FileView::new(config.file, config.mode);
    let mounted = view
        .mount(&config.endpoint, Box::new(TerminalSurface::new()))
        .await?;

    // Run until interrupted, then release the connection
    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");
    mounted.unmount().await;

    Ok(())
}
