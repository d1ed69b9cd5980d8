//! Binary entrypoint for the posts HTTP server.
//!
//! Reads configuration from environment variables:
//! - `POSTS_DB_PATH`: SQLite database file path (unset: in-memory store)
//! - `POSTS_HOST`: bind host (default: "0.0.0.0")
//! - `POSTS_PORT`: listen port (default: "4000")

use posts_server::config::ServerConfig;
use posts_server::router::build_router;
use posts_server::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let state = AppState::from_config(&config)?;
    let app = build_router(state);

    let addr = config.bind_addr();
    match &config.db_path {
        Some(path) => tracing::info!("posts server starting on {} (sqlite: {})", addr, path),
        None => tracing::info!("posts server starting on {} (in-memory store)", addr),
    }

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
