pub mod request {
    pub use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub auth: Auth,
    }
}

pub mod response {
    use axum::response::{IntoResponse, Redirect};

    pub enum Success {
        Dashboard(String),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Dashboard(path) => Redirect::to(&path).into_response(),
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
