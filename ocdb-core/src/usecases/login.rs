use super::prelude::*;

pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Verifies username and password. Federated accounts have no password
/// and can never log in this way.
pub fn login_user<R: UserRepo>(repo: &R, credentials: &Credentials) -> Result<User> {
    let user = repo
        .try_get_user_by_username(credentials.username)?
        .ok_or(Error::Credentials)?;
    match &user.password {
        Some(password) if password.verify(credentials.password) => Ok(user),
        _ => Err(Error::Credentials),
    }
}

/// Login for the administration area: requires an activated account
/// with at least community admin rights.
pub fn login_admin<R: UserRepo>(repo: &R, credentials: &Credentials) -> Result<User> {
    let user = login_user(repo, credentials)?;
    if !user.active {
        return Err(Error::AccountInactive);
    }
    if !user.is_community_admin() && !user.is_ssg_admin() {
        return Err(Error::Forbidden);
    }
    Ok(user)
}
