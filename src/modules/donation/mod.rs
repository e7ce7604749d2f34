pub mod repository;
pub mod routes;
pub mod status;
pub mod visibility;
