use sqlx::{PgConnection, PgPool};
use tracing::{debug, warn};

use shared_models::error::AppError;

use crate::models::{
    AdmissionCandidate, Appointment, AppointmentDetail, AppointmentFilter,
    CreateAppointmentRequest, UpdateAppointmentRequest,
};
use crate::repository;
use crate::services::conflict;

pub struct AppointmentService {
    pool: PgPool,
}

impl AppointmentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateAppointmentRequest) -> Result<Appointment, AppError> {
        debug!(
            "Booking appointment for patient {} with doctor {} at {}",
            request.patient_id, request.doctor_id, request.scheduled_at
        );

        let mut tx = self.pool.begin().await?;
        admit(&mut tx, request.candidate()).await?;
        let appointment = repository::insert(&mut tx, &request).await?;
        tx.commit().await?;

        Ok(appointment)
    }

    pub async fn get(&self, id: i32) -> Result<AppointmentDetail, AppError> {
        let mut conn = self.pool.acquire().await?;
        repository::find_detail_by_id(&mut conn, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn filter(&self, filter: AppointmentFilter) -> Result<Vec<Appointment>, AppError> {
        let mut conn = self.pool.acquire().await?;
        Ok(repository::filter(&mut conn, &filter).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        patch: UpdateAppointmentRequest,
    ) -> Result<Appointment, AppError> {
        let mut tx = self.pool.begin().await?;

        let existing = repository::find_by_id(&mut tx, id)
            .await?
            .ok_or_else(|| not_found(id))?;

        // Only edits that can move the booking re-enter admission control;
        // the merged record is judged, not the delta.
        if patch.touches_schedule() {
            admit(&mut tx, patch.merged_candidate(&existing)).await?;
        }

        let updated = repository::update(&mut tx, id, &patch)
            .await?
            .ok_or_else(|| not_found(id))?;
        tx.commit().await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut conn = self.pool.acquire().await?;
        Ok(repository::delete(&mut conn, id).await?)
    }
}

/// Admission pass for a candidate booking. Runs on the caller's transaction
/// handle behind a per-doctor advisory lock, so the read-validate-write
/// sequence is atomic with respect to other writers on the same schedule.
/// Check order is fixed: doctor, patient, working hours, spacing.
async fn admit(conn: &mut PgConnection, candidate: AdmissionCandidate) -> Result<(), AppError> {
    repository::lock_doctor_schedule(&mut *conn, candidate.doctor_id).await?;

    let doctor = doctor_cell::repository::find_by_id(&mut *conn, candidate.doctor_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(
                "appointment/doctor-not-found",
                format!("Doctor with id {} not found", candidate.doctor_id),
            )
        })?;

    if patient_cell::repository::find_by_id(&mut *conn, candidate.patient_id)
        .await?
        .is_none()
    {
        return Err(AppError::not_found(
            "appointment/patient-not-found",
            format!("Patient with id {} not found", candidate.patient_id),
        ));
    }

    if !conflict::within_working_hours(&doctor, candidate.scheduled_at) {
        return Err(AppError::validation(
            "appointment/validation-error",
            "Appointment time is outside of doctor's working hours",
        ));
    }

    let (day_start, day_end) = conflict::working_day_window(&doctor, candidate.scheduled_at.date());
    let day_schedule =
        repository::list_for_doctor_in_range(&mut *conn, doctor.id, day_start, day_end).await?;

    if let Some(existing) =
        conflict::find_spacing_conflict(&day_schedule, candidate.scheduled_at, candidate.id)
    {
        warn!(
            "Booking conflict for doctor {}: appointment {} at {}",
            doctor.id, existing.id, existing.scheduled_at
        );
        return Err(AppError::validation(
            "appointment/validation-error",
            "Doctor is already booked at this time",
        ));
    }

    Ok(())
}

fn not_found(id: i32) -> AppError {
    AppError::not_found(
        "appointment/not-found",
        format!("Appointment with id {} not found", id),
    )
}
