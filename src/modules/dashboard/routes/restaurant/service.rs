use super::types::{request, response};
use crate::{modules::donation, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let restaurant = payload.auth.restaurant;

    donation::repository::find_many_by_restaurant_id(&ctx.db_conn.pool, restaurant.id.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchDonations)
        .map(|donations| response::Success::Dashboard(restaurant, donations))
}
