pub mod member;
pub mod repository;
