use super::types::{request, response};
use crate::{
    modules::donation::{repository, status::Phase},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let volunteer = payload.auth.volunteer;

    let active =
        repository::find_many_by_volunteer_id(&ctx.db_conn.pool, volunteer.id.clone(), Phase::Accepted)
            .await
            .map_err(|_| response::Error::FailedToFetchDonations)?;

    let past = repository::find_many_by_volunteer_id(
        &ctx.db_conn.pool,
        volunteer.id.clone(),
        Phase::Delivered,
    )
    .await
    .map_err(|_| response::Error::FailedToFetchDonations)?;

    Ok(response::Success::Dashboard(response::Dashboard {
        volunteer,
        active,
        past,
    }))
}
