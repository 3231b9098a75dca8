use ocdb_core::gateways::notify::NotificationGateway;

use super::*;

/// Provisions an admin account and mails the one-time token for
/// choosing a password. Token issuance happens in the same transaction
/// as the account creation, the mail leaves after the commit.
pub fn create_admin_user(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    new_admin: usecases::NewAdminUser,
) -> Result<(User, EmailNonce)> {
    let (user, reset_token) = connections.exclusive()?.transaction(|conn| {
        usecases::create_admin_user(conn, new_admin).map_err(|err| {
            log::warn!("Failed to create admin account: {}", err);
            err
        })
    })?;
    notify.admin_account_created(&user, &reset_token);
    Ok((user, reset_token))
}
