pub mod request {
    use crate::modules::auth::middleware::VolunteerAuth;
    use axum_typed_multipart::{FieldData, TryFromMultipart};
    use tempfile::NamedTempFile;

    #[derive(TryFromMultipart)]
    pub struct Body {
        #[form_data(limit = "10MiB")]
        pub proof: FieldData<NamedTempFile>,
        pub feedback: String,
    }

    pub struct Payload {
        pub id: String,
        pub body: Body,
        pub auth: VolunteerAuth,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::{
        delivery_proof::repository::DeliveryProof, donation::repository::Donation,
    };

    pub enum Success {
        DonationDelivered(Donation, DeliveryProof),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DonationDelivered(donation, proof) => (
                    StatusCode::OK,
                    Json(json!({
                        "message": "Donation delivered successfully",
                        "donation": donation,
                        "proof": proof,
                    })),
                )
                    .into_response(),
            }
        }
    }

    #[derive(Debug, PartialEq)]
    pub enum Error {
        DonationNotFound,
        DonationNotAccepted,
        VolunteerNotAssigned,
        InvalidProof,
        FailedToReadProof,
        FailedToDeliverDonation,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DonationNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Donation not found" })),
                )
                    .into_response(),
                Self::DonationNotAccepted => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Only accepted donations can be delivered" })),
                )
                    .into_response(),
                Self::VolunteerNotAssigned => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "You are not assigned to this donation" })),
                )
                    .into_response(),
                Self::InvalidProof => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Proof of delivery must be a non-empty image" })),
                )
                    .into_response(),
                Self::FailedToReadProof => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to read the uploaded proof" })),
                )
                    .into_response(),
                Self::FailedToDeliverDonation => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to deliver donation" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
