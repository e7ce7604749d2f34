pub mod request {
    use crate::modules::auth::middleware::NgoAuth;

    pub struct Payload {
        pub auth: NgoAuth,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::{donation::repository::DonationDetails, ngo::repository::Ngo};

    pub struct Dashboard {
        pub ngo: Ngo,
        pub available: Vec<DonationDetails>,
        pub past: Vec<DonationDetails>,
    }

    pub enum Success {
        Dashboard(Dashboard),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Dashboard(dashboard) => (
                    StatusCode::OK,
                    Json(json!({
                        "ngo": dashboard.ngo,
                        "available": dashboard.available,
                        "past": dashboard.past,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchDonations,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchDonations => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch donations" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
