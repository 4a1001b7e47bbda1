use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use shared_models::error::AppError;
use shared_models::gender::Gender;
use shared_utils::password::validate_password;
use shared_utils::validate::{validate_name, validate_username};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub username: String,
    /// Argon2 hash, never serialized into responses.
    #[serde(skip_serializing, default)]
    pub password: String,
    pub gender: Gender,
    pub birthdate: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub username: String,
    pub password: String,
    pub gender: Gender,
    pub birthdate: NaiveDate,
}

impl CreateEmployeeRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let invalid = |msg| AppError::validation("employee/validation-error", msg);
        validate_name(&self.name).map_err(invalid)?;
        validate_username(&self.username).map_err(invalid)?;
        validate_password(&self.password).map_err(invalid)?;
        Ok(())
    }
}

/// Partial update; `None` leaves the stored field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub gender: Option<Gender>,
    pub birthdate: Option<NaiveDate>,
}

impl UpdateEmployeeRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let invalid = |msg| AppError::validation("employee/validation-error", msg);
        if let Some(name) = &self.name {
            validate_name(name).map_err(invalid)?;
        }
        if let Some(username) = &self.username {
            validate_username(username).map_err(invalid)?;
        }
        if let Some(password) = &self.password {
            validate_password(password).map_err(invalid)?;
        }
        Ok(())
    }
}
