pub mod request {
    pub struct Payload {
        pub role: String,
        pub id: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::profile::service::Profile;

    pub enum Success {
        Profile(Profile),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Profile(profile) => (StatusCode::OK, Json(json!(profile))).into_response(),
            }
        }
    }

    pub enum Error {
        InvalidRole,
        ProfileNotFound,
        FailedToFetchProfile,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidRole => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Role must be one of restaurant, ngo or volunteer" })),
                )
                    .into_response(),
                Self::ProfileNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Profile not found" })),
                )
                    .into_response(),
                Self::FailedToFetchProfile => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch profile" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
