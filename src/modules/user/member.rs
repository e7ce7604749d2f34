use serde::Serialize;
use sqlx::PgPool;

use super::repository::{Role, User};
use crate::modules::{
    donation::{self, visibility::Viewer},
    ngo::{self, repository::Ngo},
    restaurant::{self, repository::Restaurant},
    volunteer::{self, repository::Volunteer},
};

/// The role-specific record that extends a user.
#[derive(Serialize, Clone, Debug)]
#[serde(tag = "role", content = "details", rename_all = "lowercase")]
pub enum Member {
    Restaurant(Restaurant),
    Ngo(Ngo),
    Volunteer(Volunteer),
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    MemberNotFound,
}

type Result<T> = std::result::Result<T, Error>;

impl Member {
    pub fn id(&self) -> &str {
        match self {
            Member::Restaurant(restaurant) => &restaurant.id,
            Member::Ngo(ngo) => &ngo.id,
            Member::Volunteer(volunteer) => &volunteer.id,
        }
    }

    pub fn user_id(&self) -> &str {
        match self {
            Member::Restaurant(restaurant) => &restaurant.user_id,
            Member::Ngo(ngo) => &ngo.user_id,
            Member::Volunteer(volunteer) => &volunteer.user_id,
        }
    }

    /// Restaurant address, or the service area for NGOs and volunteers.
    pub fn address(&self) -> &str {
        match self {
            Member::Restaurant(restaurant) => &restaurant.address,
            Member::Ngo(ngo) => &ngo.service_area,
            Member::Volunteer(volunteer) => &volunteer.service_area,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Member::Restaurant(_) => Role::Restaurant,
            Member::Ngo(_) => Role::Ngo,
            Member::Volunteer(_) => Role::Volunteer,
        }
    }

    pub fn viewer(&self) -> Viewer<'_> {
        match self {
            Member::Restaurant(restaurant) => Viewer::Restaurant(&restaurant.id),
            Member::Ngo(ngo) => Viewer::Ngo(&ngo.id),
            Member::Volunteer(volunteer) => Viewer::Volunteer(&volunteer.id),
        }
    }
}

pub async fn find_by_user(pool: &PgPool, user: &User) -> Result<Member> {
    let member = match user.role {
        Role::Restaurant => restaurant::repository::find_by_user_id(pool, user.id.clone())
            .await
            .map_err(|_| Error::UnexpectedError)?
            .map(Member::Restaurant),
        Role::Ngo => ngo::repository::find_by_user_id(pool, user.id.clone())
            .await
            .map_err(|_| Error::UnexpectedError)?
            .map(Member::Ngo),
        Role::Volunteer => volunteer::repository::find_by_user_id(pool, user.id.clone())
            .await
            .map_err(|_| Error::UnexpectedError)?
            .map(Member::Volunteer),
    };

    member.ok_or_else(|| {
        tracing::error!(
            "User {} has no {} record",
            user.id,
            user.role.as_str()
        );
        Error::MemberNotFound
    })
}

pub async fn find_by_role_and_id(pool: &PgPool, role: Role, id: String) -> Result<Option<Member>> {
    match role {
        Role::Restaurant => restaurant::repository::find_by_id(pool, id)
            .await
            .map(|restaurant| restaurant.map(Member::Restaurant))
            .map_err(|_| Error::UnexpectedError),
        Role::Ngo => ngo::repository::find_by_id(pool, id)
            .await
            .map(|ngo| ngo.map(Member::Ngo))
            .map_err(|_| Error::UnexpectedError),
        Role::Volunteer => volunteer::repository::find_by_id(pool, id)
            .await
            .map(|volunteer| volunteer.map(Member::Volunteer))
            .map_err(|_| Error::UnexpectedError),
    }
}

/// Restaurants count every donation they created; NGOs and volunteers count
/// the donations they accepted or carried, delivered or not.
pub async fn count_donations(pool: &PgPool, member: &Member) -> Result<i64> {
    let id = member.id().to_string();

    match member {
        Member::Restaurant(_) => donation::repository::count_by_restaurant_id(pool, id).await,
        Member::Ngo(_) => donation::repository::count_by_ngo_id(pool, id).await,
        Member::Volunteer(_) => donation::repository::count_by_volunteer_id(pool, id).await,
    }
    .map_err(|_| Error::UnexpectedError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_comes_from_the_role_record() {
        let restaurant = Member::Restaurant(Restaurant {
            id: "rest-1".to_string(),
            user_id: "user-1".to_string(),
            name: "Green Bowl".to_string(),
            address: "Indiranagar".to_string(),
        });
        let ngo = Member::Ngo(Ngo {
            id: "ngo-1".to_string(),
            user_id: "user-2".to_string(),
            name: "Feed Forward".to_string(),
            service_area: "Koramangala".to_string(),
            focus_area: "Vegetarian".to_string(),
        });

        assert_eq!(restaurant.address(), "Indiranagar");
        assert_eq!(ngo.address(), "Koramangala");
        assert_eq!(ngo.role(), Role::Ngo);
        assert!(matches!(ngo.viewer(), Viewer::Ngo("ngo-1")));
    }

    #[test]
    fn serializes_with_role_tag() {
        let volunteer = Member::Volunteer(Volunteer {
            id: "vol-1".to_string(),
            user_id: "user-3".to_string(),
            service_area: "Whitefield".to_string(),
        });

        let json = serde_json::to_value(&volunteer).unwrap();
        assert_eq!(json["role"], "volunteer");
        assert_eq!(json["details"]["service_area"], "Whitefield");
    }
}
