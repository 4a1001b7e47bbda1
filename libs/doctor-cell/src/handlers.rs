use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use shared_database::AppState;
use shared_models::error::AppError;
use shared_models::response::{success, success_empty};

use crate::models::{CreateDoctorRequest, UpdateDoctorRequest};
use crate::services::DoctorService;

#[axum::debug_handler]
pub async fn create_doctor(
    State(state): State<AppState>,
    Json(request): Json<CreateDoctorRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let service = DoctorService::new(state.pool.clone());
    let doctor = service.create(request).await?;
    Ok((StatusCode::CREATED, success(doctor)))
}

#[axum::debug_handler]
pub async fn list_doctors(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(state.pool.clone());
    let doctors = service.list().await?;
    Ok(success(doctors))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(state.pool.clone());
    let doctor = service.get(id).await?;
    Ok(success(doctor))
}

#[axum::debug_handler]
pub async fn update_doctor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<UpdateDoctorRequest>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(state.pool.clone());
    let doctor = service.update(id, patch).await?;
    Ok(success(doctor))
}

#[axum::debug_handler]
pub async fn delete_doctor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(state.pool.clone());
    if service.delete(id).await? {
        Ok(success_empty())
    } else {
        Err(AppError::not_found(
            "doctor/not-found",
            format!("Doctor with id {} not found", id),
        ))
    }
}
