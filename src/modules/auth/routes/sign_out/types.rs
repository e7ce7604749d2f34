pub mod request {
    pub struct Payload {
        pub token: Option<String>,
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

    pub enum Success {
        SignedOut(Cookie<'static>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SignedOut(cookie) => (
                    StatusCode::OK,
                    [(header::SET_COOKIE, cookie.to_string())],
                    Json(json!({ "message": "Logged out successfully!" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {}

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {}
        }
    }

    pub type Response = Result<Success, Error>;
}
