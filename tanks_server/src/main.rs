use std::net::SocketAddr;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::ServerConfig;

mod config;
mod routes;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let config = ServerConfig::from_env()?;

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let app = routes::router(config.settings, &config.dist_dir);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("serving {} on {}", config.dist_dir.display(), addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .context("server stopped unexpectedly")?;

    Ok(())
}
