pub mod postgres;
pub mod warehouse;

use std::sync::Arc;

use sqlx::PgPool;

use shared_config::AppConfig;

/// Shared state handed to every router: configuration plus the connection
/// pool. Repositories never touch the pool directly; services acquire a
/// connection or open a transaction and pass the handle down.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub pool: PgPool,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, pool: PgPool) -> Self {
        Self { config, pool }
    }
}
