mod applications;
mod auth;
mod config;
mod db;
mod errors;
mod jobs;
mod matching;
mod models;
mod profiles;
mod routes;
mod state;
mod store;
mod students;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, run_migrations};
use crate::matching::weights::MatchWeights;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::postgres::PgStore;
use crate::store::Stores;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Matchboard API v{}", env!("CARGO_PKG_VERSION"));

    let pool = create_pool(&config.database_url, config.db_max_connections).await?;
    run_migrations(&pool).await?;

    let match_weights = MatchWeights::default();
    info!(
        "Match weights: skills {} / location {} / experience {}",
        match_weights.skills, match_weights.location, match_weights.experience
    );

    let state = AppState {
        stores: Stores::from_backend(Arc::new(PgStore::new(pool))),
        config: config.clone(),
        match_weights,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the frontend host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
