use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

#[derive(sqlx::FromRow, Serialize, Deserialize, Clone, Debug)]
pub struct Volunteer {
    pub id: String,
    pub user_id: String,
    pub service_area: String,
}

#[derive(sqlx::FromRow, Serialize, Deserialize, Clone, Debug)]
pub struct VolunteerWithName {
    pub id: String,
    pub user_id: String,
    pub service_area: String,
    pub username: String,
}

pub struct CreateVolunteerPayload {
    pub user_id: String,
    pub service_area: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateVolunteerPayload,
) -> Result<Volunteer> {
    sqlx::query_as::<_, Volunteer>(
        "
        INSERT INTO volunteers (id, user_id, service_area)
        VALUES ($1, $2, $3)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.user_id)
    .bind(payload.service_area)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating a volunteer: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Volunteer>> {
    sqlx::query_as::<_, Volunteer>("SELECT * FROM volunteers WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching volunteer with id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_by_user_id<'e, E: PgExecutor<'e>>(
    e: E,
    user_id: String,
) -> Result<Option<Volunteer>> {
    sqlx::query_as::<_, Volunteer>("SELECT * FROM volunteers WHERE user_id = $1")
        .bind(&user_id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching volunteer for user {}: {}",
                user_id,
                err
            );
            Error::UnexpectedError
        })
}

/// Volunteers whose service area mentions `address`. A blank address is
/// covered by nobody.
pub async fn find_many_covering_address<'e, E: PgExecutor<'e>>(
    e: E,
    address: String,
) -> Result<Vec<VolunteerWithName>> {
    sqlx::query_as::<_, VolunteerWithName>(
        "
        SELECT
            volunteers.*,
            users.username
        FROM
            volunteers
            INNER JOIN users ON users.id = volunteers.user_id
        WHERE
            BTRIM($1) <> ''
            AND STRPOS(volunteers.service_area, $1) > 0
        ORDER BY
            users.username ASC
        ",
    )
    .bind(&address)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching volunteers covering {}: {}",
            address,
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
    sqlx::query("UPDATE volunteers SET service_area = $1 WHERE id = $2")
        .bind(service_area)
        .bind(&id)
        .execute(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while updating volunteer {}: {}", id, err);
            Error::UnexpectedError
        })
        .map(|_| ())
}

pub fn covers_address(volunteer: &Volunteer, address: &str) -> bool {
    !address.trim().is_empty() && volunteer.service_area.contains(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volunteer(service_area: &str) -> Volunteer {
        Volunteer {
            id: Ulid::new().to_string(),
            user_id: Ulid::new().to_string(),
            service_area: service_area.to_string(),
        }
    }

    #[test]
    fn covers_address_is_a_substring_match() {
        let v = volunteer("Koramangala, Indiranagar");

        assert!(covers_address(&v, "Indiranagar"));
        assert!(covers_address(&v, "Koramangala"));
        assert!(!covers_address(&v, "Whitefield"));
    }

    #[test]
    fn blank_address_is_never_covered() {
        let v = volunteer("Koramangala, Indiranagar");

        assert!(!covers_address(&v, ""));
        assert!(!covers_address(&v, "   "));
    }

    #[test]
    fn covers_address_is_case_sensitive() {
        assert!(!covers_address(&volunteer("indiranagar"), "Indiranagar"));
    }
}
