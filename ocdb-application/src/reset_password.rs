use ocdb_core::gateways::notify::NotificationGateway;

use super::*;

fn issue_password_reset(connections: &sqlite::Connections, user: &User) -> Result<EmailNonce> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::issue_password_reset(conn, user))?)
}

pub fn reset_password_request(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    email: &str,
) -> Result<EmailNonce> {
    // The user is loaded before the following transaction that
    // requires exclusive access to the database connection for
    // writing.
    let user = connections
        .shared()?
        .try_get_user_by_email(email)?
        .ok_or(usecases::Error::UserDoesNotExist)?;
    let email_nonce = issue_password_reset(connections, &user)?;
    notify.user_reset_password_requested(&email_nonce);
    Ok(email_nonce)
}

pub fn reset_password_with_email_nonce(
    connections: &sqlite::Connections,
    email_nonce: EmailNonce,
    new_password: Password,
) -> Result<()> {
    // The token should be consumed only once, even if the
    // following transaction for updating the user fails!
    let reset = connections.exclusive()?.transaction(|conn| {
        usecases::consume_password_reset(conn, &email_nonce).map_err(|err| {
            log::warn!(
                "Missing or invalid token to reset password for user '{}': {}",
                email_nonce.email,
                err
            );
            err
        })
    })?;

    // The consumed token must match the request parameters
    debug_assert_eq!(reset.email_nonce, email_nonce);

    connections.exclusive()?.transaction(|conn| {
        usecases::reset_password_of_user(conn, &reset.email_nonce.email, new_password).map_err(
            |err| {
                warn!(
                    "Failed to reset password of user '{}': {}",
                    reset.email_nonce.email, err
                );
                err
            },
        )
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn reset_password_request(fixture: &BackendFixture, email: &str) -> super::Result<EmailNonce> {
        super::reset_password_request(&fixture.db_connections, &fixture.notify, email)
    }

    fn reset_password_with_email_nonce(
        fixture: &BackendFixture,
        email_nonce: EmailNonce,
        new_password: &str,
    ) -> super::Result<()> {
        super::reset_password_with_email_nonce(
            &fixture.db_connections,
            email_nonce,
            new_password.parse().unwrap(),
        )
    }

    #[test]
    fn token_is_single_use() {
        let fixture = BackendFixture::new();
        fixture.register_active_user("ana");

        let email_nonce = reset_password_request(&fixture, "ana@example.org").unwrap();
        assert_eq!("ana@example.org", email_nonce.email);

        assert!(reset_password_with_email_nonce(&fixture, email_nonce.clone(), "fresh42").is_ok());
        assert!(reset_password_with_email_nonce(&fixture, email_nonce, "fresh42").is_err());

        let credentials = usecases::Credentials {
            username: "ana",
            password: "fresh42",
        };
        assert!(flows::login_user(&fixture.db_connections, &credentials).is_ok());
    }

    #[test]
    fn a_new_request_supersedes_the_old_token() {
        let fixture = BackendFixture::new();
        fixture.register_active_user("ana");

        let first = reset_password_request(&fixture, "ana@example.org").unwrap();
        let second = reset_password_request(&fixture, "ana@example.org").unwrap();
        assert_ne!(first.nonce, second.nonce);

        assert!(reset_password_with_email_nonce(&fixture, first, "fresh42").is_err());
        assert!(reset_password_with_email_nonce(&fixture, second, "fresh42").is_ok());
    }

    #[test]
    fn redeeming_the_token_activates_the_account() {
        let fixture = BackendFixture::new();
        let user = fixture.register_user("ana", None);
        assert!(!user.active);

        let email_nonce = reset_password_request(&fixture, "ana@example.org").unwrap();
        assert!(reset_password_with_email_nonce(&fixture, email_nonce, "fresh42").is_ok());
        assert!(fixture.try_get_user("ana").unwrap().active);
    }

    #[test]
    fn unknown_email_is_rejected() {
        let fixture = BackendFixture::new();
        assert!(reset_password_request(&fixture, "nobody@example.org").is_err());
    }
}
