use chrono::NaiveDateTime;
use sqlx::{PgConnection, Postgres, QueryBuilder};

use crate::models::{
    Appointment, AppointmentDetail, AppointmentFilter, AppointmentStatus,
    CreateAppointmentRequest, PartyRef, UpdateAppointmentRequest,
};

const COLUMNS: &str =
    "id, doctor_id, patient_id, scheduled_at, status, diagnose, notes, created_at, updated_at";

/// Serializes admission passes per doctor for the rest of the current
/// transaction. Keyed on the doctor id so unrelated schedules stay
/// concurrent.
pub async fn lock_doctor_schedule(
    conn: &mut PgConnection,
    doctor_id: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(i64::from(doctor_id))
        .execute(conn)
        .await?;
    Ok(())
}

pub async fn insert(
    conn: &mut PgConnection,
    request: &CreateAppointmentRequest,
) -> Result<Appointment, sqlx::Error> {
    sqlx::query_as::<_, Appointment>(&format!(
        "INSERT INTO appointments (doctor_id, patient_id, scheduled_at, status, diagnose, notes) \
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING {COLUMNS}"
    ))
    .bind(request.doctor_id)
    .bind(request.patient_id)
    .bind(request.scheduled_at)
    .bind(request.status.unwrap_or(AppointmentStatus::InQueue))
    .bind(&request.diagnose)
    .bind(&request.notes)
    .fetch_one(conn)
    .await
}

pub async fn find_by_id(
    conn: &mut PgConnection,
    id: i32,
) -> Result<Option<Appointment>, sqlx::Error> {
    sqlx::query_as::<_, Appointment>(&format!("SELECT {COLUMNS} FROM appointments WHERE id = $1"))
        .bind(id)
        .fetch_optional(conn)
        .await
}

pub async fn find_detail_by_id(
    conn: &mut PgConnection,
    id: i32,
) -> Result<Option<AppointmentDetail>, sqlx::Error> {
    #[derive(sqlx::FromRow)]
    struct DetailRow {
        id: i32,
        scheduled_at: NaiveDateTime,
        status: AppointmentStatus,
        diagnose: Option<String>,
        notes: Option<String>,
        doctor_id: i32,
        doctor_name: String,
        patient_id: i32,
        patient_name: String,
    }

    let row = sqlx::query_as::<_, DetailRow>(
        "SELECT a.id, a.scheduled_at, a.status, a.diagnose, a.notes, \
                d.id AS doctor_id, d.name AS doctor_name, \
                p.id AS patient_id, p.name AS patient_name \
         FROM appointments a \
         JOIN doctors d ON d.id = a.doctor_id \
         JOIN patients p ON p.id = a.patient_id \
         WHERE a.id = $1",
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;

    Ok(row.map(|r| AppointmentDetail {
        id: r.id,
        scheduled_at: r.scheduled_at,
        status: r.status,
        diagnose: r.diagnose,
        notes: r.notes,
        doctor: PartyRef { id: r.doctor_id, name: r.doctor_name },
        patient: PartyRef { id: r.patient_id, name: r.patient_name },
    }))
}

/// All of one doctor's appointments with `scheduled_at` in `[start, end)`.
pub async fn list_for_doctor_in_range(
    conn: &mut PgConnection,
    doctor_id: i32,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<Vec<Appointment>, sqlx::Error> {
    sqlx::query_as::<_, Appointment>(&format!(
        "SELECT {COLUMNS} FROM appointments \
         WHERE doctor_id = $1 AND scheduled_at >= $2 AND scheduled_at < $3 \
         ORDER BY scheduled_at"
    ))
    .bind(doctor_id)
    .bind(start)
    .bind(end)
    .fetch_all(conn)
    .await
}

pub async fn filter(
    conn: &mut PgConnection,
    filter: &AppointmentFilter,
) -> Result<Vec<Appointment>, sqlx::Error> {
    let mut qb: QueryBuilder<Postgres> =
        QueryBuilder::new(format!("SELECT {COLUMNS} FROM appointments WHERE 1 = 1"));
    if let Some(patient_id) = filter.patient_id {
        qb.push(" AND patient_id = ").push_bind(patient_id);
    }
    if let Some(doctor_id) = filter.doctor_id {
        qb.push(" AND doctor_id = ").push_bind(doctor_id);
    }
    if let Some(status) = filter.status {
        qb.push(" AND status = ").push_bind(status);
    }
    if let Some(start_date) = filter.start_date {
        qb.push(" AND scheduled_at >= ").push_bind(start_date);
    }
    if let Some(end_date) = filter.end_date {
        qb.push(" AND scheduled_at < ").push_bind(end_date);
    }
    qb.push(" ORDER BY scheduled_at");

    qb.build_query_as::<Appointment>().fetch_all(conn).await
}

pub async fn update(
    conn: &mut PgConnection,
    id: i32,
    patch: &UpdateAppointmentRequest,
) -> Result<Option<Appointment>, sqlx::Error> {
    let mut qb: QueryBuilder<Postgres> =
        QueryBuilder::new("UPDATE appointments SET updated_at = now()");
    if let Some(doctor_id) = patch.doctor_id {
        qb.push(", doctor_id = ").push_bind(doctor_id);
    }
    if let Some(patient_id) = patch.patient_id {
        qb.push(", patient_id = ").push_bind(patient_id);
    }
    if let Some(scheduled_at) = patch.scheduled_at {
        qb.push(", scheduled_at = ").push_bind(scheduled_at);
    }
    if let Some(status) = patch.status {
        qb.push(", status = ").push_bind(status);
    }
    if let Some(diagnose) = &patch.diagnose {
        qb.push(", diagnose = ").push_bind(diagnose);
    }
    if let Some(notes) = &patch.notes {
        qb.push(", notes = ").push_bind(notes);
    }
    qb.push(" WHERE id = ").push_bind(id);
    qb.push(&format!(" RETURNING {COLUMNS}"));

    qb.build_query_as::<Appointment>().fetch_optional(conn).await
}

pub async fn delete(conn: &mut PgConnection, id: i32) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected() > 0)
}
