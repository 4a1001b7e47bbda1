use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use shared_models::error::AppError;
use shared_models::gender::Gender;
use shared_utils::validate::{validate_address, validate_ktp, validate_name};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Patient {
    pub id: i32,
    pub name: String,
    pub gender: Gender,
    pub birthdate: NaiveDate,
    pub no_ktp: String,
    pub address: String,
    /// Populated by the vaccination sync job, never through this API.
    pub vaccine_type: Option<String>,
    pub vaccine_count: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePatientRequest {
    pub name: String,
    pub gender: Gender,
    pub birthdate: NaiveDate,
    pub no_ktp: String,
    pub address: String,
}

impl CreatePatientRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let invalid = |msg| AppError::validation("patient/validation-error", msg);
        validate_name(&self.name).map_err(invalid)?;
        validate_ktp(&self.no_ktp).map_err(invalid)?;
        validate_address(&self.address).map_err(invalid)?;
        Ok(())
    }
}

/// Partial update; `None` leaves the stored field unchanged. Vaccine fields
/// are deliberately absent: only the sync job writes them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePatientRequest {
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub birthdate: Option<NaiveDate>,
    pub no_ktp: Option<String>,
    pub address: Option<String>,
}

impl UpdatePatientRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let invalid = |msg| AppError::validation("patient/validation-error", msg);
        if let Some(name) = &self.name {
            validate_name(name).map_err(invalid)?;
        }
        if let Some(no_ktp) = &self.no_ktp {
            validate_ktp(no_ktp).map_err(invalid)?;
        }
        if let Some(address) = &self.address {
            validate_address(address).map_err(invalid)?;
        }
        Ok(())
    }
}
