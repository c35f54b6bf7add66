use axum::{http::StatusCode, response::IntoResponse, Json};

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn hello() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": { "hello": "Hello World" },
    }))
}
