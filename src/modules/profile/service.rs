use serde::Serialize;
use sqlx::PgPool;

use crate::modules::user::{
    member::{self, Member},
    repository::User,
};

#[derive(Serialize, Debug)]
pub struct Profile {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub address: String,
    pub member: Member,
    pub total_donations: i64,
}

pub enum Visibility {
    Owner,
    Public,
}

pub async fn build(
    pool: &PgPool,
    user: User,
    member: Member,
    visibility: Visibility,
) -> Result<Profile, member::Error> {
    let total_donations = member::count_donations(pool, &member).await?;

    Ok(Profile {
        id: user.id,
        username: user.username,
        email: match visibility {
            Visibility::Owner => Some(user.email),
            Visibility::Public => None,
        },
        address: member.address().to_string(),
        member,
        total_donations,
    })
}
