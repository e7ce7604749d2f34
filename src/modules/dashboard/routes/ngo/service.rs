use super::types::{request, response};
use crate::{modules::donation::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let ngo = payload.auth.ngo;

    let available = repository::find_many_available_for_ngo(
        &ctx.db_conn.pool,
        repository::AvailableForNgoFilters {
            focus_area: ngo.focus_area.clone(),
            service_area: ngo.service_area.clone(),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToFetchDonations)?;

    let past = repository::find_many_by_ngo_id(&ctx.db_conn.pool, ngo.id.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchDonations)?;

    Ok(response::Success::Dashboard(response::Dashboard {
        ngo,
        available,
        past,
    }))
}
