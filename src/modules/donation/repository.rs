use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgRow, FromRow, PgExecutor, Row};
use ulid::Ulid;

use super::status::{DonationStatus, Phase};

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Donation {
    pub id: String,
    pub restaurant_id: String,
    pub description: String,
    pub quantity: i32,
    pub preference: String,
    pub expiry_date: NaiveDate,
    #[serde(flatten)]
    pub status: DonationStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl<'r> FromRow<'r, PgRow> for Donation {
    fn from_row(row: &'r PgRow) -> std::result::Result<Self, sqlx::Error> {
        let status: String = row.try_get("status")?;
        let status = DonationStatus::from_columns(
            &status,
            row.try_get("ngo_id")?,
            row.try_get("volunteer_id")?,
        )
        .map_err(|err| sqlx::Error::ColumnDecode {
            index: "status".to_string(),
            source: Box::new(err),
        })?;

        Ok(Self {
            id: row.try_get("id")?,
            restaurant_id: row.try_get("restaurant_id")?,
            description: row.try_get("description")?,
            quantity: row.try_get("quantity")?,
            preference: row.try_get("preference")?,
            expiry_date: row.try_get("expiry_date")?,
            status,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

/// A donation with the names dashboards show next to it.
#[derive(sqlx::FromRow, Serialize, Deserialize, Clone, Debug)]
pub struct DonationDetails {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub donation: Donation,
    pub restaurant_name: String,
    pub restaurant_address: String,
    pub ngo_name: Option<String>,
    pub volunteer_name: Option<String>,
}

const DETAILS_QUERY: &str = "
    SELECT
        donations.*,
        restaurants.name AS restaurant_name,
        restaurants.address AS restaurant_address,
        ngos.name AS ngo_name,
        volunteer_users.username AS volunteer_name
    FROM
        donations
        INNER JOIN restaurants ON restaurants.id = donations.restaurant_id
        LEFT JOIN ngos ON ngos.id = donations.ngo_id
        LEFT JOIN volunteers ON volunteers.id = donations.volunteer_id
        LEFT JOIN users AS volunteer_users ON volunteer_users.id = volunteers.user_id
";

pub struct CreateDonationPayload {
    pub restaurant_id: String,
    pub description: String,
    pub quantity: i32,
    pub preference: String,
    pub expiry_date: NaiveDate,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateDonationPayload) -> Result<Donation> {
    sqlx::query_as::<_, Donation>(
        "
        INSERT INTO donations (id, restaurant_id, description, quantity, preference, expiry_date, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.restaurant_id)
    .bind(payload.description)
    .bind(payload.quantity)
    .bind(payload.preference)
    .bind(payload.expiry_date)
    .bind(Phase::Pending.as_str())
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating a donation: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Donation>> {
    sqlx::query_as::<_, Donation>("SELECT * FROM donations WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching donation with id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_many_by_restaurant_id<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: String,
) -> Result<Vec<DonationDetails>> {
    sqlx::query_as::<_, DonationDetails>(&format!(
        "{DETAILS_QUERY} WHERE donations.restaurant_id = $1 ORDER BY donations.expiry_date DESC"
    ))
    .bind(&restaurant_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching donations of restaurant {}: {}",
            restaurant_id,
            err
        );
        Error::UnexpectedError
    })
}

pub struct AvailableForNgoFilters {
    pub focus_area: String,
    pub service_area: String,
}

pub async fn find_many_available_for_ngo<'e, E: PgExecutor<'e>>(
    e: E,
    filters: AvailableForNgoFilters,
) -> Result<Vec<DonationDetails>> {
    sqlx::query_as::<_, DonationDetails>(&format!(
        "
        {DETAILS_QUERY}
        WHERE
            donations.status = $1
            AND donations.preference = $2
            AND restaurants.address = $3
            AND BTRIM(restaurants.address) <> ''
        ORDER BY
            donations.expiry_date DESC
        "
    ))
    .bind(Phase::Pending.as_str())
    .bind(filters.focus_area)
    .bind(filters.service_area)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching available donations: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_many_by_ngo_id<'e, E: PgExecutor<'e>>(
    e: E,
    ngo_id: String,
) -> Result<Vec<DonationDetails>> {
    sqlx::query_as::<_, DonationDetails>(&format!(
        "
        {DETAILS_QUERY}
        WHERE
            donations.ngo_id = $1
            AND donations.status IN ($2, $3)
        ORDER BY
            donations.expiry_date DESC
        "
    ))
    .bind(&ngo_id)
    .bind(Phase::Accepted.as_str())
    .bind(Phase::Delivered.as_str())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching donations of ngo {}: {}",
            ngo_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_many_by_volunteer_id<'e, E: PgExecutor<'e>>(
    e: E,
    volunteer_id: String,
    phase: Phase,
) -> Result<Vec<DonationDetails>> {
    sqlx::query_as::<_, DonationDetails>(&format!(
        "
        {DETAILS_QUERY}
        WHERE
            donations.volunteer_id = $1
            AND donations.status = $2
        ORDER BY
            donations.expiry_date DESC
        "
    ))
    .bind(&volunteer_id)
    .bind(phase.as_str())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching donations of volunteer {}: {}",
            volunteer_id,
            err
        );
        Error::UnexpectedError
    })
}

/// Moves a donation to `to` only if it is still in phase `from`. Returns `None`
/// when the donation is gone or has already moved on.
pub async fn update_status_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    from: Phase,
    to: DonationStatus,
) -> Result<Option<Donation>> {
    sqlx::query_as::<_, Donation>(
        "
        UPDATE donations SET
            status = $1,
            ngo_id = $2,
            volunteer_id = $3,
            updated_at = NOW()
        WHERE
            id = $4
            AND status = $5
        RETURNING *
        ",
    )
    .bind(to.phase().as_str())
    .bind(to.ngo_id().map(str::to_string))
    .bind(to.volunteer_id().map(str::to_string))
    .bind(&id)
    .bind(from.as_str())
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while updating status of donation {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

/// Returns whether a pending donation was removed.
pub async fn delete_pending_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<bool> {
    sqlx::query("DELETE FROM donations WHERE id = $1 AND status = $2")
        .bind(&id)
        .bind(Phase::Pending.as_str())
        .execute(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while deleting donation {}: {}", id, err);
            Error::UnexpectedError
        })
        .map(|result| result.rows_affected() > 0)
}

pub async fn count_by_restaurant_id<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: String,
) -> Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM donations WHERE restaurant_id = $1")
        .bind(&restaurant_id)
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while counting donations of restaurant {}: {}",
                restaurant_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn count_by_ngo_id<'e, E: PgExecutor<'e>>(e: E, ngo_id: String) -> Result<i64> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM donations WHERE ngo_id = $1 AND status IN ($2, $3)",
    )
    .bind(&ngo_id)
    .bind(Phase::Accepted.as_str())
    .bind(Phase::Delivered.as_str())
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while counting donations of ngo {}: {}",
            ngo_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn count_by_volunteer_id<'e, E: PgExecutor<'e>>(
    e: E,
    volunteer_id: String,
) -> Result<i64> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM donations WHERE volunteer_id = $1 AND status IN ($2, $3)",
    )
    .bind(&volunteer_id)
    .bind(Phase::Accepted.as_str())
    .bind(Phase::Delivered.as_str())
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while counting donations of volunteer {}: {}",
            volunteer_id,
            err
        );
        Error::UnexpectedError
    })
}

pub fn is_owner(donation: &Donation, restaurant_id: &str) -> bool {
    donation.restaurant_id == restaurant_id
}
