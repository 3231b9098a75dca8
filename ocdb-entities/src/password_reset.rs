use crate::{nonce::EmailNonce, time::Timestamp};

/// Single-use password reset token for an account.
///
/// Only one live token per account; requesting a new one replaces the old.
/// Consuming the token deletes it, so a second attempt with the same token
/// fails.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordReset {
    pub email_nonce  : EmailNonce,
    pub requested_at : Timestamp,
}
