use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use std::str::FromStr;
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "restaurant")]
    Restaurant,
    #[serde(rename = "ngo")]
    Ngo,
    #[serde(rename = "volunteer")]
    Volunteer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Restaurant => "restaurant",
            Role::Ngo => "ngo",
            Role::Volunteer => "volunteer",
        }
    }

    pub fn dashboard_path(&self) -> String {
        format!("/api/dashboard/{}", self.as_str())
    }
}

impl ToString for Role {
    fn to_string(&self) -> String {
        self.as_str().to_string()
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "restaurant" => Ok(Role::Restaurant),
            "ngo" => Ok(Role::Ngo),
            "volunteer" => Ok(Role::Volunteer),
            _ => Err(format!("'{}' is not a valid Role", s)),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(sqlx::FromRow, Serialize, Deserialize, Clone, Debug)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateUserPayload {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    UnexpectedError,
    UsernameTaken,
    EmailTaken,
}

const UNIQUE_VIOLATION: &str = "23505";

/// Maps a failed insert into `users` to the unique constraint it broke.
fn classify_insert_error(code: Option<&str>, constraint: Option<&str>) -> Error {
    match (code, constraint) {
        (Some(UNIQUE_VIOLATION), Some("users_username_key")) => Error::UsernameTaken,
        (Some(UNIQUE_VIOLATION), Some("users_email_key")) => Error::EmailTaken,
        _ => Error::UnexpectedError,
    }
}

pub async fn create<'e, E>(db: E, payload: CreateUserPayload) -> Result<User>
where
    E: PgExecutor<'e>,
{
    match sqlx::query_as::<_, User>(
        "
        INSERT INTO users (id, username, email, password_hash, role)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.username)
    .bind(payload.email)
    .bind(payload.password_hash)
    .bind(payload.role.as_str())
    .fetch_one(db)
    .await
    {
        Ok(user) => Ok(user),
        Err(err) => {
            let error = match err.as_database_error() {
                Some(db_err) => {
                    classify_insert_error(db_err.code().as_deref(), db_err.constraint())
                }
                None => Error::UnexpectedError,
            };

            match error {
                Error::UnexpectedError => {
                    tracing::error!("Error occured while creating a user account: {}", err)
                }
                _ => tracing::warn!("User account already exists: {}", err),
            }

            Err(error)
        }
    }
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching user with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_username<'e, E: PgExecutor<'e>>(
    e: E,
    username: String,
) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred in find_by_username: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_by_email<'e, E: PgExecutor<'e>>(e: E, email: String) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred in find_by_email: {}", err);
            Error::UnexpectedError
        })
}

pub async fn update_username_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    username: String,
) -> Result<()> {
    sqlx::query(
        "
        UPDATE users SET
            username = $1,
            updated_at = NOW()
        WHERE
            id = $2
        ",
    )
    .bind(username)
    .bind(&id)
    .execute(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update a user by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
    .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Restaurant".parse::<Role>(), Ok(Role::Restaurant));
        assert_eq!(" ngo ".parse::<Role>(), Ok(Role::Ngo));
        assert_eq!("volunteer".parse::<Role>(), Ok(Role::Volunteer));
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn role_maps_to_its_dashboard() {
        assert_eq!(Role::Ngo.dashboard_path(), "/api/dashboard/ngo");
        assert_eq!(Role::Volunteer.to_string(), "volunteer");
    }

    #[test]
    fn unique_violations_map_to_the_taken_field() {
        assert_eq!(
            classify_insert_error(Some("23505"), Some("users_username_key")),
            Error::UsernameTaken
        );
        assert_eq!(
            classify_insert_error(Some("23505"), Some("users_email_key")),
            Error::EmailTaken
        );
        assert_eq!(
            classify_insert_error(Some("23505"), Some("users_pkey")),
            Error::UnexpectedError
        );
        assert_eq!(
            classify_insert_error(Some("23502"), Some("users_email_key")),
            Error::UnexpectedError
        );
        assert_eq!(classify_insert_error(None, None), Error::UnexpectedError);
    }

    #[test]
    fn password_hash_is_never_serialized() {
        let user = User {
            id: Ulid::new().to_string(),
            username: "greenbowl".to_string(),
            email: "greenbowl@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            role: Role::Restaurant,
            created_at: chrono::Utc::now().naive_utc(),
            updated_at: None,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "restaurant");
    }
}
