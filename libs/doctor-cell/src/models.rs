use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use shared_models::error::AppError;
use shared_models::gender::Gender;
use shared_utils::password::validate_password;
use shared_utils::validate::{validate_name, validate_username};

/// A doctor with a recurring daily availability window
/// `[work_start_time, work_end_time)`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Doctor {
    pub id: i32,
    pub name: String,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub gender: Gender,
    pub birthdate: NaiveDate,
    pub work_start_time: NaiveTime,
    pub work_end_time: NaiveTime,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub name: String,
    pub username: String,
    pub password: String,
    pub gender: Gender,
    pub birthdate: NaiveDate,
    pub work_start_time: NaiveTime,
    pub work_end_time: NaiveTime,
}

impl CreateDoctorRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let invalid = |msg| AppError::validation("doctor/validation-error", msg);
        validate_name(&self.name).map_err(invalid)?;
        validate_username(&self.username).map_err(invalid)?;
        validate_password(&self.password).map_err(invalid)?;
        validate_work_window(self.work_start_time, self.work_end_time)?;
        Ok(())
    }
}

/// Partial update; `None` leaves the stored field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDoctorRequest {
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub gender: Option<Gender>,
    pub birthdate: Option<NaiveDate>,
    pub work_start_time: Option<NaiveTime>,
    pub work_end_time: Option<NaiveTime>,
}

impl UpdateDoctorRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let invalid = |msg| AppError::validation("doctor/validation-error", msg);
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

    pub fn touches_work_window(&self) -> bool {
        self.work_start_time.is_some() || self.work_end_time.is_some()
    }

    /// The availability window that would result from applying this patch.
    pub fn merged_work_window(&self, existing: &Doctor) -> (NaiveTime, NaiveTime) {
        (
            self.work_start_time.unwrap_or(existing.work_start_time),
            self.work_end_time.unwrap_or(existing.work_end_time),
        )
    }
}

pub fn validate_work_window(start: NaiveTime, end: NaiveTime) -> Result<(), AppError> {
    if start >= end {
        return Err(AppError::validation(
            "doctor/validation-error",
            "Working hours must start before they end.",
        ));
    }
    Ok(())
}
