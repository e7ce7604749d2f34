pub mod request {
    use crate::modules::auth::middleware::RestaurantAuth;

    pub struct Payload {
        pub id: String,
        pub auth: RestaurantAuth,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        DonationCancelled,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DonationCancelled => (
                    StatusCode::OK,
                    Json(json!({ "message": "Donation cancelled successfully" })),
                )
                    .into_response(),
            }
        }
    }

    #[derive(Debug, PartialEq)]
    pub enum Error {
        DonationNotFound,
        RestaurantNotOwner,
        DonationNotPending,
        FailedToCancelDonation,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DonationNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Donation not found" })),
                )
                    .into_response(),
                Self::RestaurantNotOwner => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "You can only cancel your own donations" })),
                )
                    .into_response(),
                Self::DonationNotPending => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "You can only cancel pending donations" })),
                )
                    .into_response(),
                Self::FailedToCancelDonation => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to cancel donation" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
