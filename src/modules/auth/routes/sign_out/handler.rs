use super::service::service;
use super::types::request;
use crate::types::Context;
use axum::{extract::State, http::HeaderMap, response::IntoResponse};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    jar: CookieJar,
    headers: HeaderMap,
) -> impl IntoResponse {
    let token = crate::modules::auth::service::auth::get_session_token(
        &jar,
        &headers,
        &ctx.session.cookie_name,
    );

    service(ctx, request::Payload { token }).await
}
