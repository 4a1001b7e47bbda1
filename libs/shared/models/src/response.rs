use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

pub fn success(result: impl Serialize) -> Json<Value> {
    Json(json!({
        "ok": true,
        "result": result,
    }))
}

pub fn success_empty() -> Json<Value> {
    Json(json!({ "ok": true }))
}
