/// Endpoint test suite for a running Klinik API instance.
///
/// Requires a live server and its database:
///   KLINIK_API_URL   (default http://localhost:3000)
///   DATABASE_URL     (used once, to seed the login employee)
///
/// Exits with a skip message when DATABASE_URL is absent, so the binary is
/// safe to invoke from CI jobs that have no database service.
///
/// Covered flows: login (uniform failure for unknown user / wrong password),
/// protected-route enforcement, doctor and patient CRUD with uniqueness
/// conflicts, and the appointment admission scenarios (working-hours
/// boundaries, 30-minute spacing, status-only updates, double delete).

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{ensure, Context, Result};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

struct ApiTestClient {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ApiTestClient {
    fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            auth_token: None,
        }
    }

    async fn post(&self, path: &str, body: Value) -> Result<(StatusCode, Value)> {
        let mut request = self.client.post(format!("{}{}", self.base_url, path)).json(&body);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        let status = response.status();
        let body = response.json().await.unwrap_or(Value::Null);
        Ok((status, body))
    }

    async fn get(&self, path: &str) -> Result<(StatusCode, Value)> {
        let mut request = self.client.get(format!("{}{}", self.base_url, path));
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        let status = response.status();
        let body = response.json().await.unwrap_or(Value::Null);
        Ok((status, body))
    }

    async fn put(&self, path: &str, body: Value) -> Result<(StatusCode, Value)> {
        let mut request = self.client.put(format!("{}{}", self.base_url, path)).json(&body);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        let status = response.status();
        let body = response.json().await.unwrap_or(Value::Null);
        Ok((status, body))
    }

    async fn delete(&self, path: &str) -> Result<(StatusCode, Value)> {
        let mut request = self.client.delete(format!("{}{}", self.base_url, path));
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        let status = response.status();
        let body = response.json().await.unwrap_or(Value::Null);
        Ok((status, body))
    }
}

fn run_suffix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos() as u64
        % 1_000_000
}

async fn seed_login_employee(database_url: &str, username: &str, password: &str) -> Result<()> {
    let pool = sqlx::PgPool::connect(database_url)
        .await
        .context("connecting to DATABASE_URL for seeding")?;
    let password_hash =
        shared_utils::password::hash_password(password).expect("hashing seed password");

    sqlx::query(
        "INSERT INTO employees (name, username, password, gender, birthdate) \
         VALUES ($1, $2, $3, 'FEMALE', '1990-01-01') \
         ON CONFLICT ON CONSTRAINT employees_username_key DO UPDATE SET password = $3",
    )
    .bind("Integration Tester")
    .bind(username)
    .bind(&password_hash)
    .execute(&pool)
    .await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        println!("DATABASE_URL not set; skipping endpoint tests");
        return Ok(());
    };
    let base_url =
        std::env::var("KLINIK_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

    let suffix = run_suffix();
    let admin_username = format!("it_admin_{}", suffix);
    let admin_password = "Integrasi-123";

    seed_login_employee(&database_url, &admin_username, admin_password).await?;

    let mut api = ApiTestClient::new(base_url);

    // --- Authentication -------------------------------------------------

    let (status, body) = api
        .post("/auth/login", json!({ "username": "ghost", "password": "anything" }))
        .await?;
    ensure!(status == StatusCode::UNAUTHORIZED, "unknown user login: {}", status);
    ensure!(body["error"]["code"] == "auth/invalid-credentials");

    let (status, wrong_pw_body) = api
        .post(
            "/auth/login",
            json!({ "username": admin_username, "password": "wrong-password" }),
        )
        .await?;
    ensure!(status == StatusCode::UNAUTHORIZED, "wrong password login: {}", status);
    // Indistinguishable from the unknown-user failure.
    ensure!(wrong_pw_body == body, "login failures must be uniform");

    let (status, _) = api.get("/employees").await?;
    ensure!(status == StatusCode::UNAUTHORIZED, "missing token must be rejected");

    let (status, body) = api
        .post(
            "/auth/login",
            json!({ "username": admin_username, "password": admin_password }),
        )
        .await?;
    ensure!(status == StatusCode::OK, "login: {} {}", status, body);
    let token = body["result"]["access_token"]
        .as_str()
        .context("access token missing")?
        .to_string();
    ensure!(body["result"]["refresh_token"].is_string());
    api.auth_token = Some(token);
    println!("auth flows ok");

    // --- Doctor and patient directories ---------------------------------

    let (status, body) = api
        .post(
            "/doctors",
            json!({
                "name": "dr. Endpoint Test",
                "username": format!("it_doctor_{}", suffix),
                "password": "Praktek#2024",
                "gender": "FEMALE",
                "birthdate": "1985-11-02",
                "work_start_time": "09:00:00",
                "work_end_time": "17:00:00"
            }),
        )
        .await?;
    ensure!(status == StatusCode::CREATED, "create doctor: {} {}", status, body);
    let doctor_id = body["result"]["id"].as_i64().context("doctor id")?;

    let no_ktp = format!("{:016}", 7_000_000_000 + suffix);
    let patient = json!({
        "name": "Pasien Integrasi",
        "gender": "MALE",
        "birthdate": "1994-07-20",
        "no_ktp": no_ktp,
        "address": "Jl. Integrasi No. 1"
    });
    let (status, body) = api.post("/patients", patient.clone()).await?;
    ensure!(status == StatusCode::CREATED, "create patient: {} {}", status, body);
    let patient_id = body["result"]["id"].as_i64().context("patient id")?;

    let (status, body) = api.post("/patients", patient).await?;
    ensure!(status == StatusCode::CONFLICT, "duplicate KTP: {}", status);
    ensure!(body["error"]["code"] == "patient/duplicate");
    ensure!(
        body["error"]["message"].as_str().unwrap().contains(&no_ktp),
        "duplicate message names the KTP"
    );
    println!("directory flows ok");

    // --- Appointment admission ------------------------------------------

    let book = |at: &str| {
        json!({
            "doctor_id": doctor_id,
            "patient_id": patient_id,
            "scheduled_at": at
        })
    };

    let (status, body) = api.post("/appointments", book("2031-03-11T08:59:00")).await?;
    ensure!(status == StatusCode::BAD_REQUEST, "before opening: {} {}", status, body);

    let (status, _) = api.post("/appointments", book("2031-03-11T17:00:00")).await?;
    ensure!(status == StatusCode::BAD_REQUEST, "at closing instant");

    let (status, body) = api.post("/appointments", book("2031-03-11T09:00:00")).await?;
    ensure!(status == StatusCode::CREATED, "at opening instant: {} {}", status, body);
    let first_id = body["result"]["id"].as_i64().context("appointment id")?;
    ensure!(body["result"]["status"] == "IN_QUEUE");

    let (status, body) = api.post("/appointments", book("2031-03-11T09:15:00")).await?;
    ensure!(status == StatusCode::BAD_REQUEST, "15 minute gap: {}", status);
    ensure!(body["error"]["code"] == "appointment/validation-error");

    let (status, body) = api.post("/appointments", book("2031-03-11T09:30:00")).await?;
    ensure!(status == StatusCode::CREATED, "30 minute gap: {} {}", status, body);
    let second_id = body["result"]["id"].as_i64().context("appointment id")?;

    // Unknown references fail before any schedule check.
    let (status, body) = api
        .post(
            "/appointments",
            json!({ "doctor_id": 999_999, "patient_id": patient_id, "scheduled_at": "2031-03-11T10:30:00" }),
        )
        .await?;
    ensure!(status == StatusCode::NOT_FOUND, "ghost doctor: {}", status);
    ensure!(body["error"]["code"] == "appointment/doctor-not-found");

    // Status-only update never re-enters admission control.
    let (status, body) = api
        .put(
            &format!("/appointments/{}", first_id),
            json!({ "status": "DONE", "diagnose": "Influenza" }),
        )
        .await?;
    ensure!(status == StatusCode::OK, "status-only update: {} {}", status, body);
    ensure!(body["result"]["status"] == "DONE");

    // Rescheduling into the other booking's window is rejected.
    let (status, _) = api
        .put(
            &format!("/appointments/{}", second_id),
            json!({ "scheduled_at": "2031-03-11T09:10:00" }),
        )
        .await?;
    ensure!(status == StatusCode::BAD_REQUEST, "reschedule into conflict");

    let (status, _) = api
        .put(
            &format!("/appointments/{}", second_id),
            json!({ "scheduled_at": "2031-03-11T11:00:00" }),
        )
        .await?;
    ensure!(status == StatusCode::OK, "legal reschedule");

    let (status, body) = api.get(&format!("/appointments/{}", first_id)).await?;
    ensure!(status == StatusCode::OK);
    ensure!(body["result"]["doctor"]["name"] == "dr. Endpoint Test");
    ensure!(body["result"]["patient"]["id"].as_i64() == Some(patient_id));

    let (status, body) = api
        .get(&format!("/appointments?doctor_id={}&status=DONE", doctor_id))
        .await?;
    ensure!(status == StatusCode::OK);
    ensure!(body["result"].as_array().map(|a| a.len()) == Some(1), "filter: {}", body);

    let (status, _) = api.delete(&format!("/appointments/{}", second_id)).await?;
    ensure!(status == StatusCode::OK, "first delete");
    let (status, body) = api.delete(&format!("/appointments/{}", second_id)).await?;
    ensure!(status == StatusCode::NOT_FOUND, "second delete reports not found");
    ensure!(body["error"]["code"] == "appointment/not-found");
    println!("appointment flows ok");

    // --- Cleanup (cascades take the remaining appointment) ---------------

    let (status, _) = api.delete(&format!("/doctors/{}", doctor_id)).await?;
    ensure!(status == StatusCode::OK);
    let (status, _) = api.delete(&format!("/patients/{}", patient_id)).await?;
    ensure!(status == StatusCode::OK);
    let (status, _) = api.get(&format!("/appointments/{}", first_id)).await?;
    ensure!(status == StatusCode::NOT_FOUND, "cascade removed the appointment");

    println!("all endpoint tests passed");
    Ok(())
}
