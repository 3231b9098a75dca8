use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: EmailAddress,
    pub password: String,
    pub city_id: Option<Id>,
}

/// Registers a new account. The account starts out inactive and must be
/// activated with the token from the welcome mail.
///
/// Re-registering a username that never completed activation overwrites
/// the stale account and issues a fresh activation token. An activated
/// account blocks its username for good.
pub fn register_user<R: UserRepo>(repo: &R, new_user: NewUser) -> Result<User> {
    let NewUser {
        username,
        email,
        password,
        city_id,
    } = new_user;

    let username = username.trim().to_string();
    if username.is_empty() {
        return Err(Error::Username);
    }
    let password = password.parse::<Password>()?;

    match repo.try_get_user_by_username(&username)? {
        Some(user) if user.active => Err(Error::UsernameTaken),
        Some(mut user) => {
            user.email = email;
            user.password = Some(password);
            user.city_id = city_id;
            user.role = Role::User;
            user.activation_nonce = Nonce::new();
            repo.update_user(&user)?;
            Ok(user)
        }
        None => {
            let user = User {
                id: Id::new(),
                username,
                email,
                password: Some(password),
                federated: None,
                role: Role::User,
                active: false,
                city_id,
                first_name: None,
                last_name: None,
                website: None,
                about: None,
                locale: DEFAULT_LOCALE.into(),
                image_id: None,
                activation_nonce: Nonce::new(),
                created_at: Timestamp::now(),
            };
            log::debug!("Creating new user '{}'", user.username);
            repo.create_user(&user)?;
            Ok(user)
        }
    }
}
