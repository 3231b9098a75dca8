// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};
use num_traits::FromPrimitive as _;

use ocdb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod category;
mod city;
mod comment;
mod follow;
mod image;
mod issue;
mod password_reset;
mod unique_view;
mod user;
mod vote;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn referential_integrity_violation(entity: &str, id: &Id) -> repo::Error {
    // This should never happen
    log::warn!("Referential integrity violation: {entity} with id = {id} not found");
    repo::Error::Other(anyhow!("{entity} with id = {id} not found"))
}

fn load_issue(entity: models::IssueEntity) -> Result<Issue> {
    let models::IssueEntity {
        id,
        title,
        description,
        lat,
        lng,
        status,
        view_count,
        session_view_count,
        vote_count,
        comment_count,
        share_count,
        user_id,
        category_id,
        city_id,
        created_at,
    } = entity;
    let status =
        IssueStatus::from_i16(status).ok_or_else(|| anyhow!("Invalid issue status: {status}"))?;
    Ok(Issue {
        id: id.into(),
        title,
        description,
        position: MapPoint::from_lat_lng_deg(lat, lng),
        status,
        view_count: view_count as u64,
        session_view_count: session_view_count as u64,
        vote_count: vote_count as u64,
        comment_count: comment_count as u64,
        share_count: share_count as u64,
        user_id: user_id.into(),
        category_id: category_id.into(),
        city_id: city_id.into(),
        created_at: Timestamp::from_millis(created_at),
    })
}

fn load_user(entity: models::UserEntity) -> Result<User> {
    let models::UserEntity {
        id,
        username,
        email,
        password,
        provider_user_id,
        access_token,
        role,
        active,
        city_id,
        first_name,
        last_name,
        website,
        about,
        locale,
        image_id,
        activation_nonce,
        created_at,
    } = entity;
    let role = Role::from_i16(role).ok_or_else(|| anyhow!("Invalid user role: {role}"))?;
    let activation_nonce = activation_nonce
        .parse()
        .map_err(|_| anyhow!("Invalid activation nonce of user {id}"))?;
    let federated = match (provider_user_id, access_token) {
        (Some(provider_user_id), Some(access_token)) => Some(FederatedIdentity {
            provider_user_id,
            access_token,
        }),
        _ => None,
    };
    Ok(User {
        id: id.into(),
        username,
        email: EmailAddress::new_unchecked(email),
        password: password.map(Password::from_hash),
        federated,
        role,
        active,
        city_id: city_id.map(Into::into),
        first_name,
        last_name,
        website,
        about,
        locale,
        image_id: image_id.map(Into::into),
        activation_nonce,
        created_at: Timestamp::from_millis(created_at),
    })
}

fn load_password_reset(entity: models::PasswordResetEntity) -> Result<PasswordReset> {
    let models::PasswordResetEntity {
        nonce,
        requested_at,
        user_email,
    } = entity;
    let nonce = nonce
        .parse()
        .map_err(|_| anyhow!("Invalid password reset nonce"))?;
    Ok(PasswordReset {
        email_nonce: EmailNonce {
            email: user_email,
            nonce,
        },
        requested_at: Timestamp::from_millis(requested_at),
    })
}

fn resolve_user_id_by_email(conn: &mut SqliteConnection, email: &str) -> Result<String> {
    use schema::users::dsl;
    dsl::users
        .select(dsl::id)
        .filter(dsl::email.eq(email))
        .first::<String>(conn)
        .map_err(from_diesel_err)
}
