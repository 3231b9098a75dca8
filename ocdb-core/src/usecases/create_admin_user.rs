use passwords::PasswordGenerator;

use super::{password_reset::issue_password_reset, prelude::*, register_user};

const PW_GEN: PasswordGenerator = PasswordGenerator {
    length: 8,
    numbers: true,
    lowercase_letters: true,
    uppercase_letters: true,
    symbols: true,
    strict: false,
    exclude_similar_characters: true,
    spaces: false,
};

#[derive(Debug, Clone)]
pub struct NewAdminUser {
    pub username: String,
    pub email: EmailAddress,
    pub role: Role,
    pub city_id: Option<Id>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Provisions an administrator account.
///
/// The account is created with a throwaway generated password, active
/// from the start, and a one-time password reset token is issued so the
/// new admin can choose their own password.
pub fn create_admin_user<R>(repo: &R, new_admin: NewAdminUser) -> Result<(User, EmailNonce)>
where
    R: UserRepo + PasswordResetRepo,
{
    let NewAdminUser {
        username,
        email,
        role,
        city_id,
        first_name,
        last_name,
    } = new_admin;

    let password = PW_GEN
        .generate_one()
        .expect("Could not generate a password");
    let mut user = register_user::register_user(
        repo,
        register_user::NewUser {
            username,
            email,
            password,
            city_id,
        },
    )?;
    user.role = role;
    user.first_name = first_name;
    user.last_name = last_name;
    user.active = true;
    repo.update_user(&user)?;
    log::info!(
        "Created admin account '{}' with role {:?}",
        user.username,
        user.role
    );

    let reset_token = issue_password_reset(repo, &user)?;
    Ok((user, reset_token))
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn new_admin(username: &str, role: Role) -> NewAdminUser {
        NewAdminUser {
            username: username.into(),
            email: format!("{username}@example.org").parse().unwrap(),
            role,
            city_id: None,
            first_name: None,
            last_name: None,
        }
    }

    #[test]
    fn provision_active_admin_with_reset_token() {
        let db = MockDb::default();
        let (user, token) =
            create_admin_user(&db, new_admin("admin", Role::SsgAdmin)).unwrap();
        assert!(user.active);
        assert!(user.is_ssg_admin());
        assert_eq!(user.email.as_str(), token.email);
        assert_eq!(1, db.password_resets.borrow().len());
        // The throwaway password is set but unknown to anybody
        assert!(user.password.is_some());
    }

    #[test]
    fn provision_community_admin_for_city() {
        let db = MockDb::default();
        let mut new = new_admin("sa-admin", Role::CommunityAdmin);
        new.city_id = Some(Id::new());
        let (user, _) = create_admin_user(&db, new).unwrap();
        assert!(user.is_community_admin());
        assert!(user.city_id.is_some());
    }

    #[test]
    fn taken_username_is_rejected() {
        let db = MockDb::default();
        let existing = db.register_active_user("admin");
        assert!(existing.active);
        assert!(matches!(
            create_admin_user(&db, new_admin("admin", Role::SsgAdmin)),
            Err(Error::UsernameTaken)
        ));
    }
}
