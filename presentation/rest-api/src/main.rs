use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes logging and configuration, wires the in-memory cart, and
/// starts the HTTP server.
///
/// - config/: Application configuration (server, CORS, store seeding)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    if let Err(err) = dotenv() {
        tracing::debug!("No .env file loaded: {}", err);
    }

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.store);
    tracing::info!(
        seed_sample_items = config.store.seed_sample_items,
        "Shopping cart store ready"
    );

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
