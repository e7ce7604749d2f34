pub mod request {
    use crate::modules::auth::middleware::VolunteerAuth;

    pub struct Payload {
        pub auth: VolunteerAuth,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::{
        donation::repository::DonationDetails, volunteer::repository::Volunteer,
    };

    pub struct Dashboard {
        pub volunteer: Volunteer,
        pub active: Vec<DonationDetails>,
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
                        "volunteer": dashboard.volunteer,
                        "active": dashboard.active,
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
