use super::types::{request, response};
use crate::{
    modules::{
        donation::{
            repository,
            status::{Phase, TransitionError},
            visibility,
        },
        restaurant, volunteer,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let ngo = payload.auth.ngo;

    let donation = repository::find_by_id(&ctx.db_conn.pool, payload.id.clone())
        .await
        .map_err(|_| response::Error::FailedToAcceptDonation)?
        .ok_or(response::Error::DonationNotFound)?;

    let accepted = donation
        .status
        .accept(ngo.id.clone(), payload.body.volunteer_id.clone())
        .map_err(|err| match err {
            TransitionError::NotPending => response::Error::DonationNotPending,
            _ => response::Error::FailedToAcceptDonation,
        })?;

    let restaurant =
        restaurant::repository::find_by_id(&ctx.db_conn.pool, donation.restaurant_id.clone())
            .await
            .map_err(|_| response::Error::FailedToAcceptDonation)?
            .ok_or(response::Error::FailedToAcceptDonation)?;

    if !visibility::is_available_to_ngo(&donation, &restaurant, &ngo) {
        return Err(response::Error::DonationNotVisible);
    }

    let volunteer =
        volunteer::repository::find_by_id(&ctx.db_conn.pool, payload.body.volunteer_id.clone())
            .await
            .map_err(|_| response::Error::FailedToAcceptDonation)?
            .ok_or(response::Error::VolunteerNotFound)?;

    if !volunteer::repository::covers_address(&volunteer, &restaurant.address) {
        return Err(response::Error::VolunteerOutOfArea);
    }

    let donation = repository::update_status_by_id(
        &ctx.db_conn.pool,
        donation.id.clone(),
        Phase::Pending,
        accepted,
    )
    .await
    .map_err(|_| response::Error::FailedToAcceptDonation)?
    .ok_or(response::Error::DonationNotPending)?;

    tracing::info!(
        "NGO {} accepted donation {} with volunteer {}",
        ngo.id,
        donation.id,
        volunteer.id
    );

    Ok(response::Success::DonationAccepted(donation))
}
