//! Pokedex Server
//!
//! Serves the in-memory Pokemon store over HTTP.

use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_server::{
    api,
    config::{AppConfig, LoggingConfig},
    repository::{InMemoryPokemonStore, PokemonStore},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(&config.logging);

    tracing::info!("Starting Pokedex Server v{}", env!("CARGO_PKG_VERSION"));

    // Startup data is mandatory: a missing or malformed file aborts here
    let store = InMemoryPokemonStore::load(&config.data.path)
        .with_context(|| format!("Failed to load pokemons from {}", config.data.path))?;

    tracing::info!("Loaded {} pokemons from {}", store.count()?, config.data.path);

    let addr = SocketAddr::new(
        config
            .server
            .host
            .parse()
            .with_context(|| format!("Invalid host address {}", config.server.host))?,
        config.server.port,
    );

    let state = AppState::new(config, Arc::new(store));
    let app = api::create_router(state)?;

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("pokedex_server={},tower_http=debug", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format.eq_ignore_ascii_case("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
