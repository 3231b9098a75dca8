use super::prelude::*;

/// Issues a password reset token for a user, replacing any previous
/// one. The returned nonce is handed out to the user (by mail) in its
/// encoded form and never stored anywhere else.
pub fn issue_password_reset<R: PasswordResetRepo>(repo: &R, user: &User) -> Result<EmailNonce> {
    let email_nonce = EmailNonce {
        email: user.email.as_str().to_string(),
        nonce: Nonce::new(),
    };
    let reset = PasswordReset {
        email_nonce,
        requested_at: Timestamp::now(),
    };
    Ok(repo.replace_password_reset(reset)?)
}

/// Redeems a reset token. The token is deleted on success, so it
/// cannot be redeemed twice.
pub fn consume_password_reset<R: PasswordResetRepo>(
    repo: &R,
    email_nonce: &EmailNonce,
) -> Result<PasswordReset> {
    let reset = repo.consume_password_reset(email_nonce)?;
    debug_assert_eq!(email_nonce, &reset.email_nonce);
    Ok(reset)
}

/// Stores a new password for the account with the given e-mail address.
/// Accounts that never finished activation are activated along the way,
/// since redeeming the mailed token proves the address.
pub fn reset_password_of_user<R: UserRepo>(
    repo: &R,
    email: &str,
    new_password: Password,
) -> Result<User> {
    let mut user = repo
        .try_get_user_by_email(email)?
        .ok_or(Error::UserDoesNotExist)?;
    user.password = Some(new_password);
    if !user.active {
        user.active = true;
    }
    repo.update_user(&user)?;
    Ok(user)
}
