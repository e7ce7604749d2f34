use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

#[derive(sqlx::FromRow, Serialize, Deserialize, Clone, Debug)]
pub struct Restaurant {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub address: String,
}

pub struct CreateRestaurantPayload {
    pub user_id: String,
    pub name: String,
    pub address: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateRestaurantPayload,
) -> Result<Restaurant> {
    sqlx::query_as::<_, Restaurant>(
        "
        INSERT INTO restaurants (id, user_id, name, address)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.user_id)
    .bind(payload.name)
    .bind(payload.address)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating a restaurant: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Restaurant>> {
    sqlx::query_as::<_, Restaurant>("SELECT * FROM restaurants WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching restaurant with id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_by_user_id<'e, E: PgExecutor<'e>>(
    e: E,
    user_id: String,
) -> Result<Option<Restaurant>> {
    sqlx::query_as::<_, Restaurant>("SELECT * FROM restaurants WHERE user_id = $1")
        .bind(&user_id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching restaurant for user {}: {}",
                user_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn update_address_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    address: String,
) -> Result<()> {
    sqlx::query("UPDATE restaurants SET address = $1 WHERE id = $2")
        .bind(address)
        .bind(&id)
        .execute(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while updating restaurant {}: {}", id, err);
            Error::UnexpectedError
        })
        .map(|_| ())
}
