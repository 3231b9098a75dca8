use super::prelude::*;

/// Activates a freshly registered account.
///
/// The supplied token must match the stored activation nonce verbatim
/// and the account must still be inactive; everything else, including
/// an unknown user id, is reported as an invalid token.
pub fn activate_user<R: UserRepo>(repo: &R, user_id: &Id, token: &str) -> Result<User> {
    let mut user = match repo.get_user(user_id) {
        Ok(user) => user,
        Err(RepoError::NotFound) => return Err(Error::TokenInvalid),
        Err(err) => return Err(err.into()),
    };
    if user.active || user.activation_nonce.to_string() != token {
        return Err(Error::TokenInvalid);
    }
    user.active = true;
    log::info!("Activating account of user '{}'", user.username);
    repo.update_user(&user)?;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::{super::register_user::*, super::tests::MockDb, *};

    fn register(db: &MockDb, username: &str) -> User {
        register_user(
            db,
            NewUser {
                username: username.into(),
                email: format!("{username}@example.org").parse().unwrap(),
                password: "secret1".into(),
                city_id: None,
            },
        )
        .unwrap()
    }

    #[test]
    fn activate_with_exact_token() {
        let db = MockDb::default();
        let user = register(&db, "ana");
        let token = user.activation_nonce.to_string();
        let activated = activate_user(&db, &user.id, &token).unwrap();
        assert!(activated.active);
        assert!(db.get_user(&user.id).unwrap().active);
    }

    #[test]
    fn wrong_token_leaves_account_inactive() {
        let db = MockDb::default();
        let user = register(&db, "ana");
        assert!(matches!(
            activate_user(&db, &user.id, &Nonce::new().to_string()),
            Err(Error::TokenInvalid)
        ));
        assert!(matches!(
            activate_user(&db, &user.id, ""),
            Err(Error::TokenInvalid)
        ));
        assert!(!db.get_user(&user.id).unwrap().active);
    }

    #[test]
    fn activating_twice_fails() {
        let db = MockDb::default();
        let user = register(&db, "ana");
        let token = user.activation_nonce.to_string();
        assert!(activate_user(&db, &user.id, &token).is_ok());
        assert!(matches!(
            activate_user(&db, &user.id, &token),
            Err(Error::TokenInvalid)
        ));
    }

    #[test]
    fn unknown_user_reads_as_invalid_token() {
        let db = MockDb::default();
        assert!(matches!(
            activate_user(&db, &Id::new(), "whatever"),
            Err(Error::TokenInvalid)
        ));
    }
}
