pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Payload {
        pub username: String,
        pub password: String,
    }
}

pub mod response {
    use axum::{
        extract::Json,
        http::{header, StatusCode},
        response::IntoResponse,
    };
    use axum_extra::extract::cookie::Cookie;
    use serde_json::json;

    use crate::modules::user::repository::User;

    pub enum Success {
        SignedIn {
            user: User,
            token: String,
            cookie: Cookie<'static>,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SignedIn {
                    user,
                    token,
                    cookie,
                } => (
                    StatusCode::OK,
                    [(header::SET_COOKIE, cookie.to_string())],
                    Json(json!({
                        "message": "Login successful!",
                        "token": token,
                        "dashboard": user.role.dashboard_path(),
                        "user": user,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidCredentials,
        FailedToCreateSession,
        FailedToFetchUser,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidCredentials => (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "error": "Invalid username or password" })),
                )
                    .into_response(),
                Self::FailedToCreateSession => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create session" })),
                )
                    .into_response(),
                Self::FailedToFetchUser => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch user" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
