use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use shared_database::AppState;
use shared_models::auth::AuthUser;
use shared_models::error::AppError;

use crate::jwt::{validate_token, ACCESS_TOKEN_USE};

/// Middleware guarding every non-auth route: validates the bearer token and
/// attaches the authenticated employee to the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .ok_or_else(|| {
            AppError::unauthenticated("auth/missing-token", "Missing authorization header")
        })?;

    let auth_value = auth_header.to_str().map_err(|_| {
        AppError::unauthenticated("auth/invalid-token", "Invalid authorization header format")
    })?;

    if !auth_value.starts_with("Bearer ") {
        return Err(AppError::unauthenticated(
            "auth/invalid-token",
            "Invalid authorization header format",
        ));
    }

    let token = &auth_value[7..];

    let claims = validate_token(token, &state.config.jwt_secret)
        .map_err(|e| AppError::unauthenticated("auth/invalid-token", e))?;

    if claims.token_use != ACCESS_TOKEN_USE {
        return Err(AppError::unauthenticated(
            "auth/invalid-token",
            "Token is not usable for API access",
        ));
    }

    let id: i32 = claims.sub.parse().map_err(|_| {
        AppError::unauthenticated("auth/invalid-token", "Invalid subject claim")
    })?;

    request.extensions_mut().insert(AuthUser { id });

    Ok(next.run(request).await)
}
