use axum::{extract::State, Json};
use serde_json::Value;

use shared_database::AppState;
use shared_models::error::AppError;
use shared_models::response::success;

use crate::models::LoginRequest;
use crate::services::AuthService;

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Value>, AppError> {
    let service = AuthService::new(state.pool.clone(), state.config.clone());

    match service.login(&request.username, &request.password).await? {
        Some(tokens) => Ok(success(tokens)),
        None => Err(AppError::unauthenticated(
            "auth/invalid-credentials",
            "Invalid username or password",
        )),
    }
}
