use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

#[derive(sqlx::FromRow, Serialize, Deserialize, Clone, Debug)]
pub struct Ngo {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub service_area: String,
    pub focus_area: String,
}

pub struct CreateNgoPayload {
    pub user_id: String,
    pub name: String,
    pub service_area: String,
    pub focus_area: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateNgoPayload) -> Result<Ngo> {
    sqlx::query_as::<_, Ngo>(
        "
        INSERT INTO ngos (id, user_id, name, service_area, focus_area)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.user_id)
    .bind(payload.name)
    .bind(payload.service_area)
    .bind(payload.focus_area)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating an ngo: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Ngo>> {
    sqlx::query_as::<_, Ngo>("SELECT * FROM ngos WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching ngo with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_user_id<'e, E: PgExecutor<'e>>(e: E, user_id: String) -> Result<Option<Ngo>> {
    sqlx::query_as::<_, Ngo>("SELECT * FROM ngos WHERE user_id = $1")
        .bind(&user_id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching ngo for user {}: {}",
                user_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn update_service_area_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    service_area: String,
) -> Result<()> {
    sqlx::query("UPDATE ngos SET service_area = $1 WHERE id = $2")
        .bind(service_area)
        .bind(&id)
        .execute(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while updating ngo {}: {}", id, err);
            Error::UnexpectedError
        })
        .map(|_| ())
}
