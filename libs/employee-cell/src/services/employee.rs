use sqlx::PgPool;
use tracing::debug;

use shared_database::postgres::unique_violation;
use shared_models::error::AppError;
use shared_utils::password;

use crate::models::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest};
use crate::repository;

pub struct EmployeeService {
    pool: PgPool,
}

impl EmployeeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateEmployeeRequest) -> Result<Employee, AppError> {
        request.validate()?;
        debug!("Creating employee with username: {}", request.username);

        let password_hash = hash(&request.password)?;

        let mut conn = self.pool.acquire().await?;
        repository::insert(&mut conn, &request, &password_hash)
            .await
            .map_err(|err| classify_db_error(err, &request.username))
    }

    pub async fn list(&self) -> Result<Vec<Employee>, AppError> {
        let mut conn = self.pool.acquire().await?;
        Ok(repository::find_all(&mut conn).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Employee, AppError> {
        let mut conn = self.pool.acquire().await?;
        repository::find_by_id(&mut conn, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(
        &self,
        id: i32,
        patch: UpdateEmployeeRequest,
    ) -> Result<Employee, AppError> {
        patch.validate()?;

        let password_hash = match &patch.password {
            Some(plaintext) => Some(hash(plaintext)?),
            None => None,
        };

        let mut conn = self.pool.acquire().await?;
        match repository::update(&mut conn, id, &patch, password_hash.as_deref()).await {
            Ok(Some(employee)) => Ok(employee),
            Ok(None) => Err(not_found(id)),
            Err(err) => Err(classify_db_error(
                err,
                patch.username.as_deref().unwrap_or_default(),
            )),
        }
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut conn = self.pool.acquire().await?;
        Ok(repository::delete(&mut conn, id).await?)
    }
}

fn hash(plaintext: &str) -> Result<String, AppError> {
    password::hash_password(plaintext)
        .map_err(|e| AppError::internal("internal/password-hash", e.to_string()))
}

fn not_found(id: i32) -> AppError {
    AppError::not_found("employee/not-found", format!("Employee with id {} not found", id))
}

fn classify_db_error(err: sqlx::Error, username: &str) -> AppError {
    if unique_violation(&err).is_some_and(|constraint| constraint.contains("username")) {
        AppError::conflict(
            "employee/username-exists",
            format!("An employee with username '{}' already exists.", username),
        )
    } else {
        err.into()
    }
}
