use super::types::{request, response};
use crate::{
    modules::{
        ngo, restaurant,
        user::{self, repository::Role},
        volunteer,
    },
    types::Context,
    utils::password,
};
use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use validator::Validate;

/// Splits `"ngo - Vegetarian"` into the role and its focus area. An explicit
/// `focus_area` takes precedence over the one embedded in the role string.
pub fn resolve_role(
    raw_role: &str,
    focus_area: Option<String>,
) -> Result<(Role, Option<String>), response::Error> {
    let (role, embedded_focus_area) = match raw_role.split_once(" - ") {
        Some((role, focus_area)) => (role, Some(focus_area.trim().to_string())),
        None => (raw_role, None),
    };

    let role = role
        .parse::<Role>()
        .map_err(|_| response::Error::InvalidRole)?;

    let focus_area = focus_area
        .map(|focus_area| focus_area.trim().to_string())
        .or(embedded_focus_area)
        .filter(|focus_area| !focus_area.is_empty());

    match (role, focus_area) {
        (Role::Ngo, None) => Err(response::Error::MissingFocusArea),
        (Role::Ngo, focus_area) => Ok((Role::Ngo, focus_area)),
        (role, _) => Ok((role, None)),
    }
}

async fn create_member(
    tx: &mut Transaction<'_, Postgres>,
    user: &user::repository::User,
    address: String,
    focus_area: Option<String>,
) -> Result<(), response::Error> {
    match user.role {
        Role::Restaurant => restaurant::repository::create(
            &mut **tx,
            restaurant::repository::CreateRestaurantPayload {
                user_id: user.id.clone(),
                name: user.username.clone(),
                address,
            },
        )
        .await
        .map(|_| ())
        .map_err(|_| response::Error::SignupFailed),
        Role::Ngo => ngo::repository::create(
            &mut **tx,
            ngo::repository::CreateNgoPayload {
                user_id: user.id.clone(),
                name: user.username.clone(),
                service_area: address,
                focus_area: focus_area.unwrap_or_default(),
            },
        )
        .await
        .map(|_| ())
        .map_err(|_| response::Error::SignupFailed),
        Role::Volunteer => volunteer::repository::create(
            &mut **tx,
            volunteer::repository::CreateVolunteerPayload {
                user_id: user.id.clone(),
                service_area: address,
            },
        )
        .await
        .map(|_| ())
        .map_err(|_| response::Error::SignupFailed),
    }
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let (role, focus_area) = resolve_role(&payload.role, payload.focus_area.clone())?;
    let email = payload.email.trim().to_lowercase();

    tracing::debug!(
        "Signing up user {} with email {} as {}",
        payload.username,
        email,
        role.as_str()
    );

    let mut tx = ctx.db_conn.clone().pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    if user::repository::find_by_username(&mut *tx, payload.username.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .is_some()
    {
        return Err(response::Error::UsernameAlreadyInUse);
    }

    if user::repository::find_by_email(&mut *tx, email.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .is_some()
    {
        return Err(response::Error::EmailAlreadyInUse);
    }

    let password_hash =
        password::hash(&payload.password).map_err(|_| response::Error::SignupFailed)?;

    let user = user::repository::create(
        &mut *tx,
        user::repository::CreateUserPayload {
            username: payload.username.clone(),
            email,
            password_hash,
            role,
        },
    )
    .await
    .map_err(|err| match err {
        user::repository::Error::UsernameTaken => response::Error::UsernameAlreadyInUse,
        user::repository::Error::EmailTaken => response::Error::EmailAlreadyInUse,
        user::repository::Error::UnexpectedError => response::Error::SignupFailed,
    })?;

    create_member(&mut tx, &user, payload.address.trim().to_string(), focus_area).await?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    tracing::info!("Registered {} {}", user.role.as_str(), user.id);

    Ok(response::Success::SignedUp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::testing::lazy_context;

    fn payload(role: &str) -> request::Payload {
        request::Payload {
            username: "feed_forward".to_string(),
            email: "team@feedforward.org".to_string(),
            password: "long-enough-secret".to_string(),
            address: "Indiranagar".to_string(),
            role: role.to_string(),
            focus_area: None,
        }
    }

    #[test]
    fn resolves_combined_ngo_role() {
        let (role, focus_area) = resolve_role("ngo - Vegetarian", None).unwrap();

        assert_eq!(role, Role::Ngo);
        assert_eq!(focus_area.as_deref(), Some("Vegetarian"));
    }

    #[test]
    fn explicit_focus_area_wins() {
        let (_, focus_area) =
            resolve_role("ngo - Vegetarian", Some("Vegan".to_string())).unwrap();

        assert_eq!(focus_area.as_deref(), Some("Vegan"));
    }

    #[test]
    fn ngo_without_focus_area_is_rejected() {
        assert!(matches!(
            resolve_role("ngo", None),
            Err(response::Error::MissingFocusArea)
        ));
        assert!(matches!(
            resolve_role("ngo - ", Some("  ".to_string())),
            Err(response::Error::MissingFocusArea)
        ));
    }

    #[test]
    fn other_roles_drop_focus_area() {
        assert_eq!(
            resolve_role("restaurant", Some("Vegan".to_string())).unwrap(),
            (Role::Restaurant, None)
        );
        assert_eq!(
            resolve_role("volunteer", None).unwrap(),
            (Role::Volunteer, None)
        );
        assert!(matches!(
            resolve_role("admin", None),
            Err(response::Error::InvalidRole)
        ));
    }

    #[test]
    fn payload_validation_catches_bad_fields() {
        assert!(payload("restaurant").validate().is_ok());

        let mut bad = payload("restaurant");
        bad.email = "not-an-email".to_string();
        bad.password = "short".to_string();
        bad.username = "a b".to_string();
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
        assert!(fields.contains_key("username"));
    }

    #[test]
    fn whitespace_only_address_is_rejected() {
        let mut bad = payload("volunteer");
        bad.address = "   ".to_string();

        let errors = bad.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("address"));
    }

    #[tokio::test]
    async fn invalid_payload_is_rejected_before_touching_the_database() {
        let mut bad = payload("restaurant");
        bad.address = String::new();

        let result = service(lazy_context(), bad).await;

        assert!(matches!(result, Err(response::Error::FailedToValidate(_))));
    }

    #[tokio::test]
    async fn unknown_role_is_rejected_before_touching_the_database() {
        let result = service(lazy_context(), payload("chef")).await;

        assert!(matches!(result, Err(response::Error::InvalidRole)));
    }
}
