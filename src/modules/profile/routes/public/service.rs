use super::types::{request, response};
use crate::{
    modules::{
        profile::service::{self as profile, Visibility},
        user::{self, member, repository::Role},
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let role = payload
        .role
        .parse::<Role>()
        .map_err(|_| response::Error::InvalidRole)?;

    let member = member::find_by_role_and_id(&ctx.db_conn.pool, role, payload.id)
        .await
        .map_err(|_| response::Error::FailedToFetchProfile)?
        .ok_or(response::Error::ProfileNotFound)?;

    let user = user::repository::find_by_id(&ctx.db_conn.pool, member.user_id().to_string())
        .await
        .map_err(|_| response::Error::FailedToFetchProfile)?
        .ok_or(response::Error::ProfileNotFound)?;

    profile::build(&ctx.db_conn.pool, user, member, Visibility::Public)
        .await
        .map_err(|_| response::Error::FailedToFetchProfile)
        .map(response::Success::Profile)
}
