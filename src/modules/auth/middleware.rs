use super::service;
use crate::modules::{
    ngo::{self, repository::Ngo},
    restaurant::{self, repository::Restaurant},
    user::{
        self,
        repository::{Role, User},
    },
    volunteer::{self, repository::Volunteer},
};
use crate::types::Context;
use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::{async_trait, Json};
use axum::{extract::Extension, http::request::Parts, response::Response};
use axum::RequestPartsExt;
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": "Invalid session token"})),
    )
        .into_response()
}

fn forbidden(message: &'static str) -> Response {
    (StatusCode::FORBIDDEN, Json(json!({ "error": message }))).into_response()
}

fn unexpected() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Sorry an error occurred" })),
    )
        .into_response()
}

async fn get_context(parts: &mut Parts) -> Result<Arc<Context>, Response> {
    parts
        .extract::<Extension<Arc<Context>>>()
        .await
        .map(|Extension(ctx)| ctx)
        .map_err(|err| {
            tracing::error!("Context extension missing from request: {}", err);
            unexpected()
        })
}

async fn get_user_from_request(ctx: Arc<Context>, parts: &mut Parts) -> Result<User, Response> {
    let jar = CookieJar::from_headers(&parts.headers);
    let headers: &HeaderMap = &parts.headers;

    let token = service::auth::get_session_token(&jar, headers, &ctx.session.cookie_name)
        .ok_or_else(unauthorized)?;

    let session = service::auth::verify_session_token(ctx.clone(), token)
        .await
        .map_err(|err| match err {
            service::auth::Error::UnexpectedError => unexpected(),
            _ => unauthorized(),
        })?;

    user::repository::find_by_id(&ctx.db_conn.pool, session.user_id)
        .await
        .map_err(|_| unexpected())?
        .ok_or_else(unauthorized)
}

#[derive(Serialize, Clone)]
pub struct Auth {
    pub user: User,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Auth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let ctx = get_context(parts).await?;
        get_user_from_request(ctx, parts)
            .await
            .map(|user| Self { user })
    }
}

async fn get_user_with_role(parts: &mut Parts, role: Role) -> Result<(Arc<Context>, User), Response> {
    let ctx = get_context(parts).await?;
    let user = get_user_from_request(ctx.clone(), parts).await?;

    if user.role != role {
        tracing::debug!(
            "User {} with role {} denied access to a {} route",
            user.id,
            user.role.as_str(),
            role.as_str()
        );
        return Err(match role {
            Role::Restaurant => forbidden("Only restaurants can do this"),
            Role::Ngo => forbidden("Only NGOs can do this"),
            Role::Volunteer => forbidden("Only volunteers can do this"),
        });
    }

    Ok((ctx, user))
}

#[derive(Serialize, Clone)]
pub struct RestaurantAuth {
    pub user: User,
    pub restaurant: Restaurant,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for RestaurantAuth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let (ctx, user) = get_user_with_role(parts, Role::Restaurant).await?;

        let restaurant = restaurant::repository::find_by_user_id(&ctx.db_conn.pool, user.id.clone())
            .await
            .map_err(|_| unexpected())?
            .ok_or_else(|| {
                tracing::error!("Restaurant user {} has no restaurant record", user.id);
                unexpected()
            })?;

        Ok(Self { user, restaurant })
    }
}

#[derive(Serialize, Clone)]
pub struct NgoAuth {
    pub user: User,
    pub ngo: Ngo,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for NgoAuth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let (ctx, user) = get_user_with_role(parts, Role::Ngo).await?;

        let ngo = ngo::repository::find_by_user_id(&ctx.db_conn.pool, user.id.clone())
            .await
            .map_err(|_| unexpected())?
            .ok_or_else(|| {
                tracing::error!("NGO user {} has no ngo record", user.id);
                unexpected()
            })?;

        Ok(Self { user, ngo })
    }
}

#[derive(Serialize, Clone)]
pub struct VolunteerAuth {
    pub user: User,
    pub volunteer: Volunteer,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for VolunteerAuth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let (ctx, user) = get_user_with_role(parts, Role::Volunteer).await?;

        let volunteer = volunteer::repository::find_by_user_id(&ctx.db_conn.pool, user.id.clone())
            .await
            .map_err(|_| unexpected())?
            .ok_or_else(|| {
                tracing::error!("Volunteer user {} has no volunteer record", user.id);
                unexpected()
            })?;

        Ok(Self { user, volunteer })
    }
}
