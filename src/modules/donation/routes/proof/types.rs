pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub id: String,
        pub auth: Auth,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};
    use serde_json::json;

    use crate::modules::delivery_proof::repository::DeliveryProof;

    pub enum Success {
        Proof(DeliveryProof),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Proof(proof) => (
                    StatusCode::OK,
                    Json(json!({
                        "donation_id": proof.donation_id,
                        "feedback": proof.feedback,
                        "content_type": proof.content_type,
                        "created_at": proof.created_at,
                        "photo": BASE64_STANDARD.encode(&proof.photo),
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        DonationNotFound,
        ProofNotFound,
        AccessDenied,
        FailedToFetchProof,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DonationNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Donation not found" })),
                )
                    .into_response(),
                Self::ProofNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Donation has no proof of delivery yet" })),
                )
                    .into_response(),
                Self::AccessDenied => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "Access denied" })),
                )
                    .into_response(),
                Self::FailedToFetchProof => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch proof of delivery" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
