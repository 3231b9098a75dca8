use super::prelude::*;

/// Account fields an SSG admin may rewrite.
#[derive(Debug, Clone)]
pub struct AdminUserUpdate {
    pub username: String,
    pub email: EmailAddress,
    pub role: Role,
    pub active: bool,
    pub city_id: Option<Id>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Full account update, reserved for SSG admins. Everybody else is
/// rejected regardless of the target account.
pub fn admin_update_user<R: UserRepo>(
    repo: &R,
    actor_id: &Id,
    user_id: &Id,
    update: AdminUserUpdate,
) -> Result<User> {
    let actor = repo.get_user(actor_id)?;
    if !actor.is_ssg_admin() {
        return Err(Error::Forbidden);
    }
    let AdminUserUpdate {
        username,
        email,
        role,
        active,
        city_id,
        first_name,
        last_name,
    } = update;

    let username = username.trim().to_string();
    if username.is_empty() {
        return Err(Error::Username);
    }
    let mut user = repo.get_user(user_id)?;
    if let Some(other) = repo.try_get_user_by_username(&username)? {
        if other.id != user.id {
            return Err(Error::UsernameTaken);
        }
    }
    user.username = username;
    user.email = email;
    user.role = role;
    user.active = active;
    user.city_id = city_id;
    user.first_name = first_name;
    user.last_name = last_name;
    log::info!("Admin '{}' updated account '{}'", actor.username, user.id);
    repo.update_user(&user)?;
    Ok(user)
}
