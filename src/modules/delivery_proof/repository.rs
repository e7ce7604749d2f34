use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

#[derive(sqlx::FromRow, Serialize, Clone, Debug)]
pub struct DeliveryProof {
    pub id: String,
    pub donation_id: String,
    #[serde(skip_serializing)]
    pub photo: Vec<u8>,
    pub content_type: String,
    pub feedback: String,
    pub created_at: NaiveDateTime,
}

pub struct CreateDeliveryProofPayload {
    pub donation_id: String,
    pub photo: Vec<u8>,
    pub content_type: String,
    pub feedback: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateDeliveryProofPayload,
) -> Result<DeliveryProof> {
    sqlx::query_as::<_, DeliveryProof>(
        "
        INSERT INTO delivery_proofs (id, donation_id, photo, content_type, feedback)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(&payload.donation_id)
    .bind(payload.photo)
    .bind(payload.content_type)
    .bind(payload.feedback)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while storing delivery proof for donation {}: {}",
            payload.donation_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_by_donation_id<'e, E: PgExecutor<'e>>(
    e: E,
    donation_id: String,
) -> Result<Option<DeliveryProof>> {
    sqlx::query_as::<_, DeliveryProof>("SELECT * FROM delivery_proofs WHERE donation_id = $1")
        .bind(&donation_id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching delivery proof for donation {}: {}",
                donation_id,
                err
            );
            Error::UnexpectedError
        })
}
