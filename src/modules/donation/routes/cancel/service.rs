use super::types::{request, response};
use crate::{
    modules::donation::repository::{self, Donation},
    types::Context,
};
use std::sync::Arc;

fn ensure_cancellable(donation: &Donation, restaurant_id: &str) -> Result<(), response::Error> {
    if !repository::is_owner(donation, restaurant_id) {
        return Err(response::Error::RestaurantNotOwner);
    }

    donation
        .status
        .ensure_cancellable()
        .map_err(|_| response::Error::DonationNotPending)
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let donation = repository::find_by_id(&ctx.db_conn.pool, payload.id.clone())
        .await
        .map_err(|_| response::Error::FailedToCancelDonation)?
        .ok_or(response::Error::DonationNotFound)?;

    ensure_cancellable(&donation, &payload.auth.restaurant.id)?;

    // the status guard in the DELETE catches an accept that raced this request
    let deleted = repository::delete_pending_by_id(&ctx.db_conn.pool, donation.id.clone())
        .await
        .map_err(|_| response::Error::FailedToCancelDonation)?;

    if !deleted {
        return Err(response::Error::DonationNotPending);
    }

    tracing::info!(
        "Restaurant {} cancelled donation {}",
        payload.auth.restaurant.id,
        donation.id
    );

    Ok(response::Success::DonationCancelled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::donation::status::DonationStatus;
    use chrono::{NaiveDate, Utc};

    fn donation(status: DonationStatus) -> Donation {
        Donation {
            id: "don-1".to_string(),
            restaurant_id: "rest-1".to_string(),
            description: "Bread".to_string(),
            quantity: 10,
            preference: "Vegetarian".to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            status,
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        }
    }

    #[test]
    fn owner_can_cancel_pending_donation() {
        assert_eq!(
            ensure_cancellable(&donation(DonationStatus::Pending), "rest-1"),
            Ok(())
        );
    }

    #[test]
    fn other_restaurants_cannot_cancel() {
        assert_eq!(
            ensure_cancellable(&donation(DonationStatus::Pending), "rest-2"),
            Err(response::Error::RestaurantNotOwner)
        );
    }

    #[test]
    fn accepted_donation_cannot_be_cancelled() {
        let accepted = donation(DonationStatus::Accepted {
            ngo_id: "ngo-1".to_string(),
            volunteer_id: "vol-1".to_string(),
        });

        assert_eq!(
            ensure_cancellable(&accepted, "rest-1"),
            Err(response::Error::DonationNotPending)
        );
    }
}
