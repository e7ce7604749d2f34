use super::types::{request, response};
use crate::{modules::auth::service, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    if let Some(token) = payload.token {
        if let Err(err) = service::auth::end_session(ctx.clone(), token).await {
            tracing::warn!("Signing out without ending the session: {:?}", err);
        }
    }

    Ok(response::Success::SignedOut(service::auth::removal_cookie(
        &ctx,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::testing::lazy_context;
    use axum::{http::header, response::IntoResponse};

    #[tokio::test]
    async fn signing_out_without_a_session_still_clears_the_cookie() {
        let response = service(lazy_context(), request::Payload { token: None })
            .await
            .map_err(|_| "sign out failed")
            .unwrap()
            .into_response();

        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .unwrap();

        assert!(set_cookie.starts_with("session=;"));
    }

    #[tokio::test]
    async fn signing_out_clears_the_cookie_even_when_the_session_store_fails() {
        let response = service(
            lazy_context(),
            request::Payload {
                token: Some("01J0000000000000000000000".to_string()),
            },
        )
        .await
        .map_err(|_| "sign out failed")
        .unwrap()
        .into_response();

        assert_eq!(response.status(), axum::http::StatusCode::OK);
        assert!(response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("session=;")));
    }
}
