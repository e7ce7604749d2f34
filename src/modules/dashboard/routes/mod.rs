mod ngo;
mod redirect;
mod restaurant;
mod volunteer;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(redirect::get_router())
        .nest("/restaurant", restaurant::get_router())
        .nest("/ngo", ngo::get_router())
        .nest("/volunteer", volunteer::get_router())
}
