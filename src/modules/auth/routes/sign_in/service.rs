use super::types::{request, response};
use crate::{
    modules::{auth::service, user},
    types::Context,
    utils::password,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    tracing::debug!("Sign in attempt for {}", payload.username);

    let user = user::repository::find_by_username(&ctx.db_conn.pool, payload.username.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .ok_or(response::Error::InvalidCredentials)?;

    if !password::verify(&payload.password, &user.password_hash) {
        tracing::debug!("Wrong password for {}", payload.username);
        return Err(response::Error::InvalidCredentials);
    }

    let session = service::auth::create_session(ctx.clone(), user.id.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateSession)?;

    let cookie = service::auth::session_cookie(&ctx, session.token.clone());

    Ok(response::Success::SignedIn {
        user,
        token: session.token,
        cookie,
    })
}
