pub mod request {
    use crate::modules::auth::middleware::RestaurantAuth;
    use chrono::NaiveDate;
    use serde::Deserialize;
    use validator::Validate;

    use crate::utils::validation::validate_not_blank;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(custom(
            function = "validate_not_blank",
            code = "INVALID_DESCRIPTION",
            message = "Description is required"
        ))]
        pub description: String,
        #[validate(range(
            min = 1,
            code = "INVALID_QUANTITY",
            message = "Quantity must be at least 1"
        ))]
        pub quantity: i32,
        #[validate(custom(
            function = "validate_not_blank",
            code = "INVALID_PREFERENCE",
            message = "Preference is required"
        ))]
        pub preference: String,
        pub expiry_date: NaiveDate,
    }

    pub struct Payload {
        pub body: Body,
        pub auth: RestaurantAuth,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{modules::donation::repository::Donation, utils::validation};

    pub enum Success {
        DonationCreated(Donation),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DonationCreated(donation) => (
                    StatusCode::CREATED,
                    Json(json!({
                        "message": "Donation created successfully",
                        "donation": donation,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToCreateDonation,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::FailedToCreateDonation => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create donation" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
