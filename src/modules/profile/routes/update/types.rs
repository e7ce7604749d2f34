pub mod request {
    use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;
    use validator::Validate;

    use crate::utils::validation::{validate_not_blank, validate_username};

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(custom(code = "INVALID_USERNAME", function = "validate_username"))]
        pub username: String,
        #[validate(custom(
            function = "validate_not_blank",
            code = "INVALID_ADDRESS",
            message = "Address is required"
        ))]
        pub address: String,
    }

    pub struct Payload {
        pub body: Body,
        pub auth: Auth,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::utils::validation;

    pub enum Success {
        ProfileUpdated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ProfileUpdated => (
                    StatusCode::OK,
                    Json(json!({ "message": "Profile updated successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        UsernameAlreadyInUse,
        FailedToUpdateProfile,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::UsernameAlreadyInUse => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Username already exists" })),
                )
                    .into_response(),
                Self::FailedToUpdateProfile => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update profile" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
