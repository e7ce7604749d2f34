pub mod request {
    use crate::modules::auth::middleware::NgoAuth;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub volunteer_id: String,
    }

    pub struct Payload {
        pub id: String,
        pub body: Body,
        pub auth: NgoAuth,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::donation::repository::Donation;

    pub enum Success {
        DonationAccepted(Donation),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DonationAccepted(donation) => (
                    StatusCode::OK,
                    Json(json!({
                        "message": "Donation accepted successfully",
                        "donation": donation,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        DonationNotFound,
        DonationNotPending,
        DonationNotVisible,
        VolunteerNotFound,
        VolunteerOutOfArea,
        FailedToAcceptDonation,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DonationNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Donation not found" })),
                )
                    .into_response(),
                Self::DonationNotPending => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Donation has already been accepted" })),
                )
                    .into_response(),
                Self::DonationNotVisible => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "Donation does not match your focus or service area" })),
                )
                    .into_response(),
                Self::VolunteerNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Volunteer not found" })),
                )
                    .into_response(),
                Self::VolunteerOutOfArea => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Volunteer does not serve the restaurant's area" })),
                )
                    .into_response(),
                Self::FailedToAcceptDonation => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to accept donation" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
