use sqlx::PgPool;
use tracing::debug;

use shared_database::postgres::unique_violation;
use shared_models::error::AppError;

use crate::models::{CreatePatientRequest, Patient, UpdatePatientRequest};
use crate::repository;

pub struct PatientService {
    pool: PgPool,
}

impl PatientService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreatePatientRequest) -> Result<Patient, AppError> {
        request.validate()?;
        debug!("Registering patient with KTP: {}", request.no_ktp);

        let mut conn = self.pool.acquire().await?;
        repository::insert(&mut conn, &request)
            .await
            .map_err(|err| classify_db_error(err, &request.no_ktp))
    }

    pub async fn list(&self) -> Result<Vec<Patient>, AppError> {
        let mut conn = self.pool.acquire().await?;
        Ok(repository::find_all(&mut conn).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Patient, AppError> {
        let mut conn = self.pool.acquire().await?;
        repository::find_by_id(&mut conn, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(&self, id: i32, patch: UpdatePatientRequest) -> Result<Patient, AppError> {
        patch.validate()?;

        let mut conn = self.pool.acquire().await?;
        match repository::update(&mut conn, id, &patch).await {
            Ok(Some(patient)) => Ok(patient),
            Ok(None) => Err(not_found(id)),
            Err(err) => Err(classify_db_error(
                err,
                patch.no_ktp.as_deref().unwrap_or_default(),
            )),
        }
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut conn = self.pool.acquire().await?;
        Ok(repository::delete(&mut conn, id).await?)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::not_found("patient/not-found", format!("Patient with id {} not found", id))
}

fn classify_db_error(err: sqlx::Error, no_ktp: &str) -> AppError {
    if unique_violation(&err).is_some_and(|constraint| constraint.contains("ktp")) {
        AppError::conflict(
            "patient/duplicate",
            format!("A patient with KTP number {} already exists.", no_ktp),
        )
    } else {
        err.into()
    }
}
