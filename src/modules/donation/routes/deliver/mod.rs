mod handler;
mod service;
mod types;

use crate::types::Context;
use axum::{
    extract::DefaultBodyLimit,
    routing::{post, Router},
};
use std::sync::Arc;

/// Room for the multipart framing and the feedback field on top of the
/// proof itself, which `types::request::Body` caps at 10 MiB.
const BODY_LIMIT: usize = 1024 * 1024 * 10 + 1024 * 64;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().route(
        "/:id/deliver",
        post(handler::handler).layer(DefaultBodyLimit::max(BODY_LIMIT)),
    )
}
