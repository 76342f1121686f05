//! Feature Extraction Service - Main Entry Point

use api::{init_logging, run_server, ServerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== Feature Extraction Service v{} ===", env!("CARGO_PKG_VERSION"));

    let config = ServerConfig::default();
    run_server(&config).await?;

    Ok(())
}
