use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;

use shared_models::error::AppError;

async fn body_json(err: AppError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn not_found_maps_to_404_envelope() {
    let (status, body) =
        body_json(AppError::not_found("doctor/not-found", "Doctor with id 7 not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"]["code"], "doctor/not-found");
    assert_eq!(body["error"]["message"], "Doctor with id 7 not found");
}

#[tokio::test]
async fn validation_maps_to_400() {
    let (status, body) = body_json(AppError::validation(
        "appointment/validation-error",
        "Appointment time is outside of doctor's working hours",
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "appointment/validation-error");
}

#[tokio::test]
async fn conflict_maps_to_409() {
    let (status, body) = body_json(AppError::conflict(
        "patient/duplicate",
        "A patient with KTP number 1234567890123456 already exists.",
    ))
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["ok"], false);
}

#[tokio::test]
async fn unauthenticated_maps_to_401() {
    let (status, _) = body_json(AppError::unauthenticated(
        "auth/invalid-credentials",
        "Invalid username or password",
    ))
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn internal_detail_is_not_leaked() {
    let (status, body) = body_json(AppError::internal(
        "internal/database",
        "connection refused on 10.0.0.3:5432",
    ))
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["message"], "Internal server error");
    assert_eq!(body["error"]["code"], "internal/database");
}
