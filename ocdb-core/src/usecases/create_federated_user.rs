use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewFederatedUser {
    pub username: String,
    pub email: EmailAddress,
    pub provider_user_id: String,
    pub access_token: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Defaults to [`Role::User`].
    pub role: Option<Role>,
}

/// Creates an account backed by an external identity provider.
///
/// Federated accounts have no password and are active immediately;
/// authentication happens at the provider.
pub fn create_federated_user<R: UserRepo>(repo: &R, new_user: NewFederatedUser) -> Result<User> {
    let NewFederatedUser {
        username,
        email,
        provider_user_id,
        access_token,
        first_name,
        last_name,
        role,
    } = new_user;

    let username = username.trim().to_string();
    if username.is_empty() {
        return Err(Error::Username);
    }
    if repo.try_get_user_by_username(&username)?.is_some() {
        return Err(Error::UsernameTaken);
    }

    let user = User {
        id: Id::new(),
        username,
        email,
        password: None,
        federated: Some(FederatedIdentity {
            provider_user_id,
            access_token,
        }),
        role: role.unwrap_or(Role::User),
        active: true,
        city_id: None,
        first_name,
        last_name,
        website: None,
        about: None,
        locale: DEFAULT_LOCALE.into(),
        image_id: None,
        activation_nonce: Nonce::new(),
        created_at: Timestamp::now(),
    };
    log::debug!("Creating new federated user '{}'", user.username);
    repo.create_user(&user)?;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn new_federated(username: &str) -> NewFederatedUser {
        NewFederatedUser {
            username: username.into(),
            email: format!("{username}@example.org").parse().unwrap(),
            provider_user_id: "100004".into(),
            access_token: "EAAB...".into(),
            first_name: Some("Ana".into()),
            last_name: None,
            role: None,
        }
    }

    #[test]
    fn federated_accounts_are_active_without_password() {
        let db = MockDb::default();
        let user = create_federated_user(&db, new_federated("ana")).unwrap();
        assert!(user.active);
        assert!(user.password.is_none());
        assert!(user.is_federated());
        assert_eq!(Role::User, user.role);
        assert_eq!(
            "100004",
            user.federated.as_ref().unwrap().provider_user_id
        );
    }

    #[test]
    fn username_collision_is_rejected() {
        let db = MockDb::default();
        assert!(create_federated_user(&db, new_federated("ana")).is_ok());
        assert!(matches!(
            create_federated_user(&db, new_federated("ana")),
            Err(Error::UsernameTaken)
        ));
    }
}
