use ocdb_entities::{city::City, nonce::EmailNonce, user::User};

/// Outbound notifications triggered by domain events.
///
/// Implementations decide how (and whether) to deliver; the domain layer
/// never depends on a concrete mail setup.
pub trait NotificationGateway {
    /// Welcome mail with the activation token for a freshly registered,
    /// still inactive account.
    fn user_registered(&self, user: &User);
    /// Sent to a provisioned admin together with the one-time token that
    /// lets them choose their own password.
    fn admin_account_created(&self, user: &User, reset_token: &EmailNonce);
    /// Informs a community admin that a user signed up in their city.
    fn community_admin_alerted(&self, admin: &User, city: &City);
    fn city_signup_notified(&self, city: &City);
    /// Mail with the encoded one-time token that lets the user choose a
    /// new password.
    fn user_reset_password_requested(&self, email_nonce: &EmailNonce);
}
