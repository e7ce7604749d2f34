use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use super::{auth, dashboard, donation, profile};
use crate::types::Context;
use std::sync::Arc;

async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "message": "Welcome to Foodshare API" })),
    )
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(health_check))
        .nest("/auth", auth::routes::get_router())
        .nest("/dashboard", dashboard::routes::get_router())
        .nest("/donations", donation::routes::get_router())
        .nest("/profile", profile::routes::get_router())
}
