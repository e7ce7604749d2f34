use chrono::NaiveDateTime;
use sqlx::PgExecutor;
use ulid::Ulid;

#[derive(sqlx::FromRow, Clone, Debug)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub token: String,
    pub expires_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub struct SessionCreationPayload {
    pub user_id: String,
    pub token: String,
    pub expires_at: NaiveDateTime,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: SessionCreationPayload,
) -> Result<Session, Error> {
    match sqlx::query_as::<_, Session>(
        "
        INSERT INTO sessions (id, user_id, token, expires_at)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(&payload.user_id)
    .bind(payload.token)
    .bind(payload.expires_at)
    .fetch_one(e)
    .await
    {
        Ok(session) => Ok(session),
        Err(err) => {
            tracing::error!(
                "Error occurred while creating a new session for user with id {}: {}",
                payload.user_id,
                err
            );
            Err(Error::UnexpectedError)
        }
    }
}

pub async fn find_by_token<'e, E: PgExecutor<'e>>(
    e: E,
    token: String,
) -> Result<Option<Session>, Error> {
    sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE token = $1")
        .bind(token)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching session by token: {}", err);
            Error::UnexpectedError
        })
}

pub async fn delete_by_token<'e, E: PgExecutor<'e>>(e: E, token: String) -> Result<(), Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while deleting session: {}", err);
            Error::UnexpectedError
        })
        .map(|_| ())
}

pub async fn delete_expired<'e, E: PgExecutor<'e>>(e: E) -> Result<u64, Error> {
    sqlx::query("DELETE FROM sessions WHERE expires_at < NOW()")
        .execute(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while deleting expired sessions: {}", err);
            Error::UnexpectedError
        })
        .map(|result| result.rows_affected())
}
