#![recursion_limit = "256"]

mod config;
mod routes;

use crate::config::{HostConfig, HostError};

#[tokio::main]
async fn main() -> Result<(), HostError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env();
    let app = routes::app(&config)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(HostError::Bind)?;

    tracing::info!(port = config.port, audio_dir = %config.audio_dir.display(), "keepsake listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
