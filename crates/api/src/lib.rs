//! Feature Extraction Demo Server
//!
//! Minimal HTTP surface in front of the extraction service: a single index
//! endpoint serving a static greeting. Carries no state.

use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind, e.g. "0.0.0.0:8080"
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Static greeting payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

/// The stateless greeting served by the index route
pub fn hello() -> Greeting {
    Greeting {
        message: "Hello from the feature extraction service".to_string(),
    }
}

/// Create the application router
pub fn create_router() -> Router {
    Router::new().route("/", get(index_handler))
}

/// Index handler
async fn index_handler() -> Json<Greeting> {
    Json(hello())
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server
pub async fn run_server(config: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router();

    info!("Starting API server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
