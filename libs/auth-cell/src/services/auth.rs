use std::sync::Arc;

use sqlx::PgPool;
use tracing::debug;

use shared_config::AppConfig;
use shared_models::auth::TokenPair;
use shared_models::error::AppError;
use shared_utils::jwt::{issue_token, ACCESS_TOKEN_USE, REFRESH_TOKEN_USE};
use shared_utils::password::verify_password;

pub struct AuthService {
    pool: PgPool,
    config: Arc<AppConfig>,
}

impl AuthService {
    pub fn new(pool: PgPool, config: Arc<AppConfig>) -> Self {
        Self { pool, config }
    }

    /// Verifies the credentials and issues a token pair bound to the
    /// employee id. Unknown usernames and wrong passwords both come back as
    /// `None`; callers must not be able to tell them apart.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<TokenPair>, AppError> {
        let mut conn = self.pool.acquire().await?;

        let Some(employee) =
            employee_cell::repository::find_by_username(&mut conn, username).await?
        else {
            debug!("Login failed: no session for {}", username);
            return Ok(None);
        };

        if !verify_password(password, &employee.password).unwrap_or(false) {
            debug!("Login failed: no session for {}", username);
            return Ok(None);
        }

        let access_token = issue_token(
            employee.id,
            ACCESS_TOKEN_USE,
            self.config.access_token_ttl_seconds,
            &self.config.jwt_secret,
        )
        .map_err(|e| AppError::internal("internal/token-issue", e))?;

        let refresh_token = issue_token(
            employee.id,
            REFRESH_TOKEN_USE,
            self.config.refresh_token_ttl_seconds,
            &self.config.jwt_secret,
        )
        .map_err(|e| AppError::internal("internal/token-issue", e))?;

        Ok(Some(TokenPair {
            access_token,
            refresh_token,
        }))
    }
}
