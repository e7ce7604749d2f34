mod accept;
mod cancel;
mod create;
mod deliver;
mod proof;
mod volunteers;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(create::get_router())
        .merge(cancel::get_router())
        .merge(volunteers::get_router())
        .merge(accept::get_router())
        .merge(deliver::get_router())
        .merge(proof::get_router())
}
