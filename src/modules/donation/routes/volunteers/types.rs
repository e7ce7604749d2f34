pub mod request {
    use crate::modules::auth::middleware::NgoAuth;

    pub struct Payload {
        pub id: String,
        pub auth: NgoAuth,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::{
        donation::repository::Donation, volunteer::repository::VolunteerWithName,
    };

    pub enum Success {
        Volunteers(Donation, Vec<VolunteerWithName>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Volunteers(donation, volunteers) => (
                    StatusCode::OK,
                    Json(json!({
                        "donation": donation,
                        "volunteers": volunteers,
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
        FailedToFetchVolunteers,
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
                Self::FailedToFetchVolunteers => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch volunteers" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
