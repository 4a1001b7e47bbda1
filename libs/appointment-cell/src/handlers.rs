use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use shared_database::AppState;
use shared_models::error::AppError;
use shared_models::response::{success, success_empty};

use crate::models::{AppointmentFilter, CreateAppointmentRequest, UpdateAppointmentRequest};
use crate::services::AppointmentService;

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let service = AppointmentService::new(state.pool.clone());
    let appointment = service.create(request).await?;
    Ok((StatusCode::CREATED, success(appointment)))
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<AppState>,
    Query(filter): Query<AppointmentFilter>,
) -> Result<Json<Value>, AppError> {
    let service = AppointmentService::new(state.pool.clone());
    let appointments = service.filter(filter).await?;
    Ok(success(appointments))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    let service = AppointmentService::new(state.pool.clone());
    let appointment = service.get(id).await?;
    Ok(success(appointment))
}

#[axum::debug_handler]
pub async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<UpdateAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let service = AppointmentService::new(state.pool.clone());
    let appointment = service.update(id, patch).await?;
    Ok(success(appointment))
}

#[axum::debug_handler]
pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    let service = AppointmentService::new(state.pool.clone());
    if service.delete(id).await? {
        Ok(success_empty())
    } else {
        Err(AppError::not_found(
            "appointment/not-found",
            format!("Appointment with id {} not found", id),
        ))
    }
}
