use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use shared_database::AppState;
use shared_models::error::AppError;
use shared_models::response::{success, success_empty};

use crate::models::{CreateEmployeeRequest, UpdateEmployeeRequest};
use crate::services::EmployeeService;

#[axum::debug_handler]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let service = EmployeeService::new(state.pool.clone());
    let employee = service.create(request).await?;
    Ok((StatusCode::CREATED, success(employee)))
}

#[axum::debug_handler]
pub async fn list_employees(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let service = EmployeeService::new(state.pool.clone());
    let employees = service.list().await?;
    Ok(success(employees))
}

#[axum::debug_handler]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    let service = EmployeeService::new(state.pool.clone());
    let employee = service.get(id).await?;
    Ok(success(employee))
}

#[axum::debug_handler]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<UpdateEmployeeRequest>,
) -> Result<Json<Value>, AppError> {
    let service = EmployeeService::new(state.pool.clone());
    let employee = service.update(id, patch).await?;
    Ok(success(employee))
}

#[axum::debug_handler]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    let service = EmployeeService::new(state.pool.clone());
    if service.delete(id).await? {
        Ok(success_empty())
    } else {
        Err(AppError::not_found(
            "employee/not-found",
            format!("Employee with id {} not found", id),
        ))
    }
}
