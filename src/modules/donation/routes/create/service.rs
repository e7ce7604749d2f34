use super::types::{request, response};
use crate::{modules::donation::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let donation = repository::create(
        &ctx.db_conn.pool,
        repository::CreateDonationPayload {
            restaurant_id: payload.auth.restaurant.id,
            description: payload.body.description.trim().to_string(),
            quantity: payload.body.quantity,
            preference: payload.body.preference.trim().to_string(),
            expiry_date: payload.body.expiry_date,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateDonation)?;

    tracing::info!(
        "Restaurant {} created donation {}",
        donation.restaurant_id,
        donation.id
    );

    Ok(response::Success::DonationCreated(donation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn body(description: &str, preference: &str) -> request::Body {
        request::Body {
            description: description.to_string(),
            quantity: 20,
            preference: preference.to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(),
        }
    }

    #[test]
    fn accepts_a_described_donation() {
        assert!(body("Vegetable curry", "Vegetarian").validate().is_ok());
    }

    #[test]
    fn rejects_blank_description_and_preference() {
        let errors = body(" ", "\t").validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("description"));
        assert!(fields.contains_key("preference"));
    }

    #[test]
    fn rejects_zero_quantity() {
        let mut bad = body("Vegetable curry", "Vegetarian");
        bad.quantity = 0;

        assert!(bad.validate().unwrap_err().field_errors().contains_key("quantity"));
    }
}
