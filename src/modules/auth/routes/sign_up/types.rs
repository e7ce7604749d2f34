pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    use crate::utils::validation::{validate_not_blank, validate_username};

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(custom(code = "INVALID_USERNAME", function = "validate_username"))]
        pub username: String,
        #[validate(email(code = "INVALID_USER_EMAIL", message = "Invalid email address"))]
        pub email: String,
        #[validate(length(
            min = 8,
            code = "WEAK_PASSWORD",
            message = "Password must be at least 8 characters long"
        ))]
        pub password: String,
        #[validate(custom(
            function = "validate_not_blank",
            code = "INVALID_ADDRESS",
            message = "Address is required"
        ))]
        pub address: String,
        /// Either a bare role or `"ngo - <focus area>"`.
        pub role: String,
        pub focus_area: Option<String>,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::utils::validation;

    pub enum Success {
        SignedUp,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SignedUp => (
                    StatusCode::CREATED,
                    Json(json!({ "message": "Registration successful! Please log in." })),
                )
                    .into_response(),
            }
        }
    }

    #[derive(Debug)]
    pub enum Error {
        FailedToValidate(ValidationErrors),
        InvalidRole,
        MissingFocusArea,
        UsernameAlreadyInUse,
        EmailAlreadyInUse,
        FailedToFetchUser,
        SignupFailed,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Error::FailedToValidate(errors) => {
                    validation::into_response(errors).into_response()
                }
                Error::InvalidRole => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Role must be one of restaurant, ngo or volunteer" })),
                )
                    .into_response(),
                Error::MissingFocusArea => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "NGOs must provide a focus area" })),
                )
                    .into_response(),
                Error::UsernameAlreadyInUse => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Username already exists" })),
                )
                    .into_response(),
                Error::EmailAlreadyInUse => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Email already registered" })),
                )
                    .into_response(),
                Error::FailedToFetchUser => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch user" })),
                )
                    .into_response(),
                Error::SignupFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "An error occurred. Please try again." })),
                )
                    .into_response(),
                Error::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Sorry an error occurred" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
