use super::types::{request, response};
use crate::{
    modules::{
        ngo, restaurant,
        user::{
            self,
            member::{self, Member},
        },
        volunteer,
    },
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let user = payload.auth.user;
    let username = payload.body.username.trim().to_string();
    let address = payload.body.address.trim().to_string();

    let member = member::find_by_user(&ctx.db_conn.pool, &user)
        .await
        .map_err(|_| response::Error::FailedToUpdateProfile)?;

    let mut tx = ctx.db_conn.clone().pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToUpdateProfile
    })?;

    if let Some(existing) = user::repository::find_by_username(&mut *tx, username.clone())
        .await
        .map_err(|_| response::Error::FailedToUpdateProfile)?
    {
        if existing.id != user.id {
            return Err(response::Error::UsernameAlreadyInUse);
        }
    }

    user::repository::update_username_by_id(&mut *tx, user.id.clone(), username)
        .await
        .map_err(|_| response::Error::FailedToUpdateProfile)?;

    let member_id = member.id().to_string();
    match member {
        Member::Restaurant(_) => {
            restaurant::repository::update_address_by_id(&mut *tx, member_id, address)
                .await
                .map_err(|_| response::Error::FailedToUpdateProfile)?
        }
        Member::Ngo(_) => ngo::repository::update_service_area_by_id(&mut *tx, member_id, address)
            .await
            .map_err(|_| response::Error::FailedToUpdateProfile)?,
        Member::Volunteer(_) => {
            volunteer::repository::update_service_area_by_id(&mut *tx, member_id, address)
                .await
                .map_err(|_| response::Error::FailedToUpdateProfile)?
        }
    };

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::FailedToUpdateProfile
    })?;

    tracing::info!("User {} updated their profile", user.id);

    Ok(response::Success::ProfileUpdated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(username: &str, address: &str) -> request::Body {
        request::Body {
            username: username.to_string(),
            address: address.to_string(),
        }
    }

    #[test]
    fn accepts_a_well_formed_update() {
        assert!(body("green_bowl", "Indiranagar").validate().is_ok());
    }

    #[test]
    fn rejects_blank_address() {
        let errors = body("green_bowl", "  ").validate().unwrap_err();

        assert!(errors.field_errors().contains_key("address"));
    }

    #[test]
    fn username_follows_the_sign_up_rules() {
        for username in ["a b", "   ", "ab"] {
            let errors = body(username, "Indiranagar").validate().unwrap_err();

            assert!(errors.field_errors().contains_key("username"), "{username}");
        }
    }
}
