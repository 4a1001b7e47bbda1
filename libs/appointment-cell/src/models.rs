use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "appointment_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    InQueue,
    Done,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::InQueue => write!(f, "IN_QUEUE"),
            AppointmentStatus::Done => write!(f, "DONE"),
            AppointmentStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// A booking is a point-in-time marker on one doctor's schedule; spacing to
/// its neighbours, not a duration field, is what reserves the doctor's time.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Appointment {
    pub id: i32,
    pub doctor_id: i32,
    pub patient_id: i32,
    pub scheduled_at: NaiveDateTime,
    pub status: AppointmentStatus,
    pub diagnose: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PartyRef {
    pub id: i32,
    pub name: String,
}

/// Single-appointment read model with the joined doctor/patient identity.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentDetail {
    pub id: i32,
    pub scheduled_at: NaiveDateTime,
    pub status: AppointmentStatus,
    pub diagnose: Option<String>,
    pub notes: Option<String>,
    pub doctor: PartyRef,
    pub patient: PartyRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub doctor_id: i32,
    pub patient_id: i32,
    pub scheduled_at: NaiveDateTime,
    #[serde(default)]
    pub status: Option<AppointmentStatus>,
    #[serde(default)]
    pub diagnose: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CreateAppointmentRequest {
    pub fn candidate(&self) -> AdmissionCandidate {
        AdmissionCandidate {
            id: None,
            doctor_id: self.doctor_id,
            patient_id: self.patient_id,
            scheduled_at: self.scheduled_at,
        }
    }
}

/// Partial update; `None` leaves the stored field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAppointmentRequest {
    pub doctor_id: Option<i32>,
    pub patient_id: Option<i32>,
    pub scheduled_at: Option<NaiveDateTime>,
    pub status: Option<AppointmentStatus>,
    pub diagnose: Option<String>,
    pub notes: Option<String>,
}

impl UpdateAppointmentRequest {
    /// Whether this patch can move the booking on a doctor's schedule.
    /// Status, diagnosis and notes edits never do.
    pub fn touches_schedule(&self) -> bool {
        self.doctor_id.is_some() || self.patient_id.is_some() || self.scheduled_at.is_some()
    }

    /// The full candidate that would result from applying this patch, so
    /// admission control always judges the merged record rather than the
    /// delta.
    pub fn merged_candidate(&self, existing: &Appointment) -> AdmissionCandidate {
        AdmissionCandidate {
            id: Some(existing.id),
            doctor_id: self.doctor_id.unwrap_or(existing.doctor_id),
            patient_id: self.patient_id.unwrap_or(existing.patient_id),
            scheduled_at: self.scheduled_at.unwrap_or(existing.scheduled_at),
        }
    }
}

/// What the admission engine judges: a proposed booking, plus its own id
/// when it already exists so conflict checks can skip it.
#[derive(Debug, Clone, Copy)]
pub struct AdmissionCandidate {
    pub id: Option<i32>,
    pub doctor_id: i32,
    pub patient_id: i32,
    pub scheduled_at: NaiveDateTime,
}

/// Conjunctive listing filters; every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentFilter {
    pub patient_id: Option<i32>,
    pub doctor_id: Option<i32>,
    pub status: Option<AppointmentStatus>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}
