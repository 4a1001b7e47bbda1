use sqlx::{PgConnection, Postgres, QueryBuilder};

use crate::models::{CreatePatientRequest, Patient, UpdatePatientRequest};

const COLUMNS: &str = "id, name, gender, birthdate, no_ktp, address, \
                       vaccine_type, vaccine_count, created_at, updated_at";

pub async fn insert(
    conn: &mut PgConnection,
    request: &CreatePatientRequest,
) -> Result<Patient, sqlx::Error> {
    sqlx::query_as::<_, Patient>(&format!(
        "INSERT INTO patients (name, gender, birthdate, no_ktp, address) \
         VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
    ))
    .bind(&request.name)
    .bind(request.gender)
    .bind(request.birthdate)
    .bind(&request.no_ktp)
    .bind(&request.address)
    .fetch_one(conn)
    .await
}

pub async fn find_all(conn: &mut PgConnection) -> Result<Vec<Patient>, sqlx::Error> {
    sqlx::query_as::<_, Patient>(&format!("SELECT {COLUMNS} FROM patients ORDER BY id"))
        .fetch_all(conn)
        .await
}

pub async fn find_by_id(conn: &mut PgConnection, id: i32) -> Result<Option<Patient>, sqlx::Error> {
    sqlx::query_as::<_, Patient>(&format!("SELECT {COLUMNS} FROM patients WHERE id = $1"))
        .bind(id)
        .fetch_optional(conn)
        .await
}

pub async fn update(
    conn: &mut PgConnection,
    id: i32,
    patch: &UpdatePatientRequest,
) -> Result<Option<Patient>, sqlx::Error> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE patients SET updated_at = now()");
    if let Some(name) = &patch.name {
        qb.push(", name = ").push_bind(name);
    }
    if let Some(gender) = patch.gender {
        qb.push(", gender = ").push_bind(gender);
    }
    if let Some(birthdate) = patch.birthdate {
        qb.push(", birthdate = ").push_bind(birthdate);
    }
    if let Some(no_ktp) = &patch.no_ktp {
        qb.push(", no_ktp = ").push_bind(no_ktp);
    }
    if let Some(address) = &patch.address {
        qb.push(", address = ").push_bind(address);
    }
    qb.push(" WHERE id = ").push_bind(id);
    qb.push(&format!(" RETURNING {COLUMNS}"));

    qb.build_query_as::<Patient>().fetch_optional(conn).await
}

pub async fn delete(conn: &mut PgConnection, id: i32) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM patients WHERE id = $1")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Write path reserved for the vaccination sync job; keyed by KTP number
/// because the warehouse does not know our surrogate ids. Returns the number
/// of patients matched.
pub async fn update_vaccination(
    conn: &mut PgConnection,
    no_ktp: &str,
    vaccine_type: Option<&str>,
    vaccine_count: Option<i32>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE patients SET vaccine_type = $1, vaccine_count = $2, updated_at = now() \
         WHERE no_ktp = $3",
    )
    .bind(vaccine_type)
    .bind(vaccine_count)
    .bind(no_ktp)
    .execute(conn)
    .await?;
    Ok(result.rows_affected())
}
