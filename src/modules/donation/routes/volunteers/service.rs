use super::types::{request, response};
use crate::{
    modules::{
        donation::{repository, visibility},
        restaurant, volunteer,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let donation = repository::find_by_id(&ctx.db_conn.pool, payload.id.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchVolunteers)?
        .ok_or(response::Error::DonationNotFound)?;

    if !donation.status.is_pending() {
        return Err(response::Error::DonationNotPending);
    }

    let restaurant =
        restaurant::repository::find_by_id(&ctx.db_conn.pool, donation.restaurant_id.clone())
            .await
            .map_err(|_| response::Error::FailedToFetchVolunteers)?
            .ok_or(response::Error::FailedToFetchVolunteers)?;

    if !visibility::is_available_to_ngo(&donation, &restaurant, &payload.auth.ngo) {
        return Err(response::Error::DonationNotVisible);
    }

    let volunteers =
        volunteer::repository::find_many_covering_address(&ctx.db_conn.pool, restaurant.address)
            .await
            .map_err(|_| response::Error::FailedToFetchVolunteers)?;

    Ok(response::Success::Volunteers(donation, volunteers))
}
