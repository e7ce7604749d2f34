use super::types::{request, response};
use crate::{
    modules::{
        delivery_proof,
        donation::{repository, visibility},
        user::member,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let donation = repository::find_by_id(&ctx.db_conn.pool, payload.id.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchProof)?
        .ok_or(response::Error::DonationNotFound)?;

    let member = member::find_by_user(&ctx.db_conn.pool, &payload.auth.user)
        .await
        .map_err(|_| response::Error::FailedToFetchProof)?;

    if !visibility::can_view_proof(&donation, &member.viewer()) {
        return Err(response::Error::AccessDenied);
    }

    delivery_proof::repository::find_by_donation_id(&ctx.db_conn.pool, donation.id)
        .await
        .map_err(|_| response::Error::FailedToFetchProof)?
        .ok_or(response::Error::ProofNotFound)
        .map(response::Success::Proof)
}
