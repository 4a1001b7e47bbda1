use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub access_token_ttl_seconds: u64,
    pub refresh_token_ttl_seconds: u64,
    pub port: u16,
    pub warehouse_base_url: String,
    pub warehouse_api_key: String,
    pub sync_interval_seconds: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| {
                    warn!("DATABASE_URL not set, using empty value");
                    String::new()
                }),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| {
                    warn!("JWT_SECRET not set, using empty value");
                    String::new()
                }),
            access_token_ttl_seconds: parse_env_u64("JWT_ACCESS_TTL_SECONDS", 3600),
            refresh_token_ttl_seconds: parse_env_u64("JWT_REFRESH_TTL_SECONDS", 2_592_000),
            port: parse_env_u64("PORT", 3000) as u16,
            warehouse_base_url: env::var("WAREHOUSE_BASE_URL")
                .unwrap_or_else(|_| {
                    warn!("WAREHOUSE_BASE_URL not set, using empty value");
                    String::new()
                }),
            warehouse_api_key: env::var("WAREHOUSE_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("WAREHOUSE_API_KEY not set, using empty value");
                    String::new()
                }),
            sync_interval_seconds: parse_env_u64("SYNC_INTERVAL_SECONDS", 3600),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.database_url.is_empty() && !self.jwt_secret.is_empty()
    }

    pub fn is_warehouse_configured(&self) -> bool {
        !self.warehouse_base_url.is_empty() && !self.warehouse_api_key.is_empty()
    }
}

fn parse_env_u64(key: &str, default: u64) -> u64 {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{} is not a valid number, using default {}", key, default);
            default
        }),
        Err(_) => default,
    }
}
