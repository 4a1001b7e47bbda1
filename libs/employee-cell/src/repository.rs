use sqlx::{PgConnection, Postgres, QueryBuilder};

use crate::models::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest};

const COLUMNS: &str = "id, name, username, password, gender, birthdate, created_at, updated_at";

pub async fn insert(
    conn: &mut PgConnection,
    request: &CreateEmployeeRequest,
    password_hash: &str,
) -> Result<Employee, sqlx::Error> {
    sqlx::query_as::<_, Employee>(&format!(
        "INSERT INTO employees (name, username, password, gender, birthdate) \
         VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
    ))
    .bind(&request.name)
    .bind(&request.username)
    .bind(password_hash)
    .bind(request.gender)
    .bind(request.birthdate)
    .fetch_one(conn)
    .await
}

pub async fn find_all(conn: &mut PgConnection) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(&format!("SELECT {COLUMNS} FROM employees ORDER BY id"))
        .fetch_all(conn)
        .await
}

pub async fn find_by_id(conn: &mut PgConnection, id: i32) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(&format!("SELECT {COLUMNS} FROM employees WHERE id = $1"))
        .bind(id)
        .fetch_optional(conn)
        .await
}

pub async fn find_by_username(
    conn: &mut PgConnection,
    username: &str,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(&format!("SELECT {COLUMNS} FROM employees WHERE username = $1"))
        .bind(username)
        .fetch_optional(conn)
        .await
}

pub async fn update(
    conn: &mut PgConnection,
    id: i32,
    patch: &UpdateEmployeeRequest,
    password_hash: Option<&str>,
) -> Result<Option<Employee>, sqlx::Error> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE employees SET updated_at = now()");
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
    qb.push(" WHERE id = ").push_bind(id);
    qb.push(&format!(" RETURNING {COLUMNS}"));

    qb.build_query_as::<Employee>().fetch_optional(conn).await
}

pub async fn delete(conn: &mut PgConnection, id: i32) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM employees WHERE id = $1")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected() > 0)
}
