use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use shared_database::AppState;
use shared_models::error::AppError;
use shared_models::response::{success, success_empty};

use crate::models::{CreatePatientRequest, UpdatePatientRequest};
use crate::services::PatientService;

#[axum::debug_handler]
pub async fn create_patient(
    State(state): State<AppState>,
    Json(request): Json<CreatePatientRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let service = PatientService::new(state.pool.clone());
    let patient = service.create(request).await?;
    Ok((StatusCode::CREATED, success(patient)))
}

#[axum::debug_handler]
pub async fn list_patients(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(state.pool.clone());
    let patients = service.list().await?;
    Ok(success(patients))
}

#[axum::debug_handler]
pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(state.pool.clone());
    let patient = service.get(id).await?;
    Ok(success(patient))
}

#[axum::debug_handler]
pub async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<UpdatePatientRequest>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(state.pool.clone());
    let patient = service.update(id, patch).await?;
    Ok(success(patient))
}

#[axum::debug_handler]
pub async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(state.pool.clone());
    if service.delete(id).await? {
        Ok(success_empty())
    } else {
        Err(AppError::not_found(
            "patient/not-found",
            format!("Patient with id {} not found", id),
        ))
    }
}
