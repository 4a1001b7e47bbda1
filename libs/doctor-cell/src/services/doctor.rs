use sqlx::PgPool;
use tracing::debug;

use shared_database::postgres::unique_violation;
use shared_models::error::AppError;
use shared_utils::password;

use crate::models::{validate_work_window, CreateDoctorRequest, Doctor, UpdateDoctorRequest};
use crate::repository;

pub struct DoctorService {
    pool: PgPool,
}

impl DoctorService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateDoctorRequest) -> Result<Doctor, AppError> {
        request.validate()?;
        debug!("Creating doctor with username: {}", request.username);

        let password_hash = hash(&request.password)?;

        let mut conn = self.pool.acquire().await?;
        repository::insert(&mut conn, &request, &password_hash)
            .await
            .map_err(|err| classify_db_error(err, &request.username))
    }

    pub async fn list(&self) -> Result<Vec<Doctor>, AppError> {
        let mut conn = self.pool.acquire().await?;
        Ok(repository::find_all(&mut conn).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Doctor, AppError> {
        let mut conn = self.pool.acquire().await?;
        repository::find_by_id(&mut conn, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(&self, id: i32, patch: UpdateDoctorRequest) -> Result<Doctor, AppError> {
        patch.validate()?;

        let password_hash = match &patch.password {
            Some(plaintext) => Some(hash(plaintext)?),
            None => None,
        };

        let mut conn = self.pool.acquire().await?;

        // A one-sided window patch is checked against the stored other side.
        if patch.touches_work_window() {
            let existing = repository::find_by_id(&mut conn, id)
                .await?
                .ok_or_else(|| not_found(id))?;
            let (start, end) = patch.merged_work_window(&existing);
            validate_work_window(start, end)?;
        }

        match repository::update(&mut conn, id, &patch, password_hash.as_deref()).await {
            Ok(Some(doctor)) => Ok(doctor),
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
    AppError::not_found("doctor/not-found", format!("Doctor with id {} not found", id))
}

fn classify_db_error(err: sqlx::Error, username: &str) -> AppError {
    if unique_violation(&err).is_some_and(|constraint| constraint.contains("username")) {
        AppError::conflict(
            "doctor/username-exists",
            format!("A doctor with username '{}' already exists.", username),
        )
    } else {
        err.into()
    }
}
