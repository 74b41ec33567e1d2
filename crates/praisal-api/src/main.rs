#![forbid(unsafe_code)]

//! Praisal API server
//!
//! Boots the HTTP process: environment configuration first, then logging,
//! middleware, documentation, and the listener.

use anyhow::Result;
use axum::Router;
use praisal_api::{Server, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Environment must be resolved before anything else initializes.
    let config = ServerConfig::from_env();

    tracing_subscriber::fmt::init();

    if config.database_url.is_none() {
        tracing::warn!("DATABASE_URL is not set; application routes that need storage will fail");
    }

    // Business routes are mounted by the application crate through
    // `Server::serve`; the shipped binary serves the bootstrap-owned
    // surface.
    let app = Router::new();

    Server::new(config).serve(app, None).await?;
    Ok(())
}
