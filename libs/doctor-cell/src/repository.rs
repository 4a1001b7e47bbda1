use sqlx::{PgConnection, Postgres, QueryBuilder};

use crate::models::{CreateDoctorRequest, Doctor, UpdateDoctorRequest};

const COLUMNS: &str = "id, name, username, password, gender, birthdate, \
                       work_start_time, work_end_time, created_at, updated_at";

pub async fn insert(
    conn: &mut PgConnection,
    request: &CreateDoctorRequest,
    password_hash: &str,
) -> Result<Doctor, sqlx::Error> {
    sqlx::query_as::<_, Doctor>(&format!(
        "INSERT INTO doctors (name, username, password, gender, birthdate, \
         work_start_time, work_end_time) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {COLUMNS}"
    ))
    .bind(&request.name)
    .bind(&request.username)
    .bind(password_hash)
    .bind(request.gender)
    .bind(request.birthdate)
    .bind(request.work_start_time)
    .bind(request.work_end_time)
    .fetch_one(conn)
    .await
}

pub async fn find_all(conn: &mut PgConnection) -> Result<Vec<Doctor>, sqlx::Error> {
    sqlx::query_as::<_, Doctor>(&format!("SELECT {COLUMNS} FROM doctors ORDER BY id"))
        .fetch_all(conn)
        .await
}

pub async fn find_by_id(conn: &mut PgConnection, id: i32) -> Result<Option<Doctor>, sqlx::Error> {
    sqlx::query_as::<_, Doctor>(&format!("SELECT {COLUMNS} FROM doctors WHERE id = $1"))
        .bind(id)
        .fetch_optional(conn)
        .await
}

pub async fn update(
    conn: &mut PgConnection,
    id: i32,
    patch: &UpdateDoctorRequest,
    password_hash: Option<&str>,
) -> Result<Option<Doctor>, sqlx::Error> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE doctors SET updated_at = now()");
    if let Some(name) = &patch.name {
        qb.push(", name = ").push_bind(name);
    }
    if let Some(username) = &patch.username {
        qb.push(", username = ").push_bind(username);
    }
    if let Some(hash) = password_hash {
        qb.push(", password = ").push_bind(hash);
    }
    if let Some(gender) = patch.gender {
        qb.push(", gender = ").push_bind(gender);
    }
    if let Some(birthdate) = patch.birthdate {
        qb.push(", birthdate = ").push_bind(birthdate);
    }
    if let Some(work_start_time) = patch.work_start_time {
        qb.push(", work_start_time = ").push_bind(work_start_time);
    }
    if let Some(work_end_time) = patch.work_end_time {
        qb.push(", work_end_time = ").push_bind(work_end_time);
    }
    qb.push(" WHERE id = ").push_bind(id);
    qb.push(&format!(" RETURNING {COLUMNS}"));

    qb.build_query_as::<Doctor>().fetch_optional(conn).await
}

pub async fn delete(conn: &mut PgConnection, id: i32) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM doctors WHERE id = $1")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected() > 0)
}
