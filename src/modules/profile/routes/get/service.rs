use super::types::{request, response};
use crate::{
    modules::{
        profile::service::{self as profile, Visibility},
        user::member,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let user = payload.auth.user;

    let member = member::find_by_user(&ctx.db_conn.pool, &user)
        .await
        .map_err(|_| response::Error::FailedToFetchProfile)?;

    profile::build(&ctx.db_conn.pool, user, member, Visibility::Owner)
        .await
        .map_err(|_| response::Error::FailedToFetchProfile)
        .map(response::Success::Profile)
}
