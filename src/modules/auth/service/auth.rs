use axum::http::{header, HeaderMap};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use ulid::Ulid;

use super::super::repository;
use crate::{modules::auth::repository::session::Session, types::Context};
use std::sync::Arc;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    InvalidSession,
    ExpiredToken,
}

type Result<T> = std::result::Result<T, Error>;

pub async fn create_session(ctx: Arc<Context>, user_id: String) -> Result<Session> {
    let token = Ulid::new().to_string();
    let expires_at = Utc::now().naive_utc() + ctx.session.ttl;

    repository::session::create(
        &ctx.db_conn.pool,
        repository::session::SessionCreationPayload {
            user_id,
            token,
            expires_at,
        },
    )
    .await
    .map_err(|_| Error::UnexpectedError)
}

pub async fn verify_session_token(ctx: Arc<Context>, token: String) -> Result<Session> {
    let session = repository::session::find_by_token(&ctx.db_conn.pool, token)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::InvalidSession)?;

    if session.expires_at < Utc::now().naive_utc() {
        return Err(Error::ExpiredToken);
    };

    Ok(session)
}

pub async fn end_session(ctx: Arc<Context>, token: String) -> Result<()> {
    repository::session::delete_by_token(&ctx.db_conn.pool, token)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    // expired sessions are swept on every sign-out
    if let Ok(removed) = repository::session::delete_expired(&ctx.db_conn.pool).await {
        tracing::debug!("Removed {} expired sessions", removed);
    }

    Ok(())
}

/// The cookie wins over an `Authorization: Bearer` header.
pub fn get_session_token(jar: &CookieJar, headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    if let Some(cookie) = jar.get(cookie_name) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

pub fn session_cookie(ctx: &Context, token: String) -> Cookie<'static> {
    Cookie::build((ctx.session.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(ctx.session.secure_cookie)
        .build()
}

pub fn removal_cookie(ctx: &Context) -> Cookie<'static> {
    let mut cookie = Cookie::build((ctx.session.cookie_name.clone(), String::new()))
        .path("/")
        .build();
    cookie.make_removal();
    cookie
}
