use crate::config::Config;
use crate::matching::weights::MatchWeights;
use crate::store::Stores;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Document-store collaborators. Postgres in production, in-memory in tests.
    pub stores: Stores,
    pub config: Config,
    pub match_weights: MatchWeights,
}

#[cfg(test)]
impl AppState {
    pub fn for_tests(stores: Stores) -> Self {
        AppState {
            stores,
            config: Config {
                database_url: "postgres://unused".to_string(),
                db_max_connections: 1,
                auth_email_header: "x-authenticated-email".to_string(),
                port: 0,
                rust_log: "debug".to_string(),
            },
            match_weights: MatchWeights::default(),
        }
    }
}
