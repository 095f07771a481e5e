use anyhow::{Context, Result};
use catalog::{handler::AppRouter, state::AppState};
use dotenv::dotenv;
use shared::{config::Config, utils::init_logger};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    init_logger("catalog-service");

    let config = Config::init().context("Failed to load configuration")?;

    let state = AppState::new(&config)
        .await
        .context("Failed to create AppState")?;

    info!(
        "🚀 Starting catalog service | port: {}, store: {}",
        config.port,
        config.products_file.display()
    );

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Server stopped.");

    Ok(())
}
