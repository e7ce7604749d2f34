pub mod auth;
pub mod dashboard;
pub mod delivery_proof;
pub mod donation;
pub mod ngo;
pub mod profile;
pub mod restaurant;
pub mod user;
pub mod volunteer;

mod router;
pub use router::get_router;
