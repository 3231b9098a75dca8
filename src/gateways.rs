use ocdb_core::gateways::notify::NotificationGateway;
use ocdb_entities::{city::City, nonce::EmailNonce, user::User};

/// Mail delivery is not wired up in this binary. Domain events that
/// would leave as mails are logged instead; subcommands print the
/// tokens they provision themselves.
pub fn notification_gateway() -> LogNotifyGw {
    LogNotifyGw
}

pub struct LogNotifyGw;

impl NotificationGateway for LogNotifyGw {
    fn user_registered(&self, user: &User) {
        log::info!(
            "User '{}' registered and awaits activation",
            user.username
        );
        log::debug!("Activation token for '{}': {}", user.username, user.activation_nonce);
    }

    fn admin_account_created(&self, user: &User, _reset_token: &EmailNonce) {
        log::info!(
            "Provisioned {} account '{}' <{}>",
            user.role,
            user.username,
            user.email
        );
    }

    fn community_admin_alerted(&self, admin: &User, city: &City) {
        log::info!(
            "Community admin '{}' of {} notified about a signup",
            admin.username,
            city.name
        );
    }

    fn city_signup_notified(&self, city: &City) {
        log::debug!("Signup in {}", city.name);
    }

    fn user_reset_password_requested(&self, email_nonce: &EmailNonce) {
        log::info!("Password reset requested for {}", email_nonce.email);
        log::debug!("Password reset token: {}", email_nonce.encode_to_string());
    }
}
