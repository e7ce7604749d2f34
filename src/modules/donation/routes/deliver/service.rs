use super::types::{request, response};
use crate::{
    modules::{
        delivery_proof,
        donation::{
            repository,
            status::{Phase, TransitionError},
        },
    },
    types::Context,
};
use std::sync::Arc;

fn proof_content_type(content_type: Option<String>) -> Result<String, response::Error> {
    content_type
        .filter(|content_type| content_type.starts_with("image/"))
        .ok_or(response::Error::InvalidProof)
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let volunteer = payload.auth.volunteer;

    let donation = repository::find_by_id(&ctx.db_conn.pool, payload.id.clone())
        .await
        .map_err(|_| response::Error::FailedToDeliverDonation)?
        .ok_or(response::Error::DonationNotFound)?;

    let delivered = donation
        .status
        .deliver(&volunteer.id)
        .map_err(|err| match err {
            TransitionError::NotAssignedVolunteer => response::Error::VolunteerNotAssigned,
            _ => response::Error::DonationNotAccepted,
        })?;

    let content_type = proof_content_type(payload.body.proof.metadata.content_type.clone())?;

    let photo = tokio::fs::read(payload.body.proof.contents.path())
        .await
        .map_err(|err| {
            tracing::error!("Failed to read the uploaded file {:?}", err);
            response::Error::FailedToReadProof
        })?;

    if photo.is_empty() {
        return Err(response::Error::InvalidProof);
    }

    let mut tx = ctx.db_conn.clone().pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToDeliverDonation
    })?;

    let proof = delivery_proof::repository::create(
        &mut *tx,
        delivery_proof::repository::CreateDeliveryProofPayload {
            donation_id: donation.id.clone(),
            photo,
            content_type,
            feedback: payload.body.feedback.trim().to_string(),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToDeliverDonation)?;

    let donation =
        repository::update_status_by_id(&mut *tx, donation.id.clone(), Phase::Accepted, delivered)
            .await
            .map_err(|_| response::Error::FailedToDeliverDonation)?
            .ok_or(response::Error::DonationNotAccepted)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::FailedToDeliverDonation
    })?;

    tracing::info!(
        "Volunteer {} delivered donation {}",
        volunteer.id,
        donation.id
    );

    Ok(response::Success::DonationDelivered(donation, proof))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_image_uploads() {
        assert_eq!(
            proof_content_type(Some("image/jpeg".to_string())),
            Ok("image/jpeg".to_string())
        );
    }

    #[test]
    fn rejects_non_images_and_untyped_uploads() {
        assert_eq!(
            proof_content_type(Some("application/pdf".to_string())),
            Err(response::Error::InvalidProof)
        );
        assert_eq!(proof_content_type(None), Err(response::Error::InvalidProof));
    }
}
