use axum::{routing::post, Router};

use shared_database::AppState;

use crate::handlers;

/// Login is the only unauthenticated route in the API.
pub fn auth_routes(state: AppState) -> Router {
    Router::new()
        .route("/login", post(handlers::login))
        .with_state(state)
}
