use ocdb_core::gateways::notify::NotificationGateway;

use super::*;

pub fn register_user(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    new_user: usecases::NewUser,
) -> Result<User> {
    let user = connections.exclusive()?.transaction(|conn| {
        usecases::register_user(conn, new_user).map_err(|err| {
            log::warn!("Failed to register user: {}", err);
            err
        })
    })?;

    // Mails leave only after the account has been committed.
    notify.user_registered(&user);
    if let Some(city_id) = &user.city_id {
        notify_community_admins(connections, notify, city_id)?;
    }
    Ok(user)
}

pub fn activate_user(connections: &sqlite::Connections, user_id: &Id, token: &str) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::activate_user(conn, user_id, token).map_err(|err| {
            log::warn!("Failed to activate account '{}': {}", user_id, err);
            err
        })
    })?)
}

/// Tells the community admins of a city about a signup in their city.
pub fn notify_community_admins(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    city_id: &Id,
) -> Result<()> {
    let conn = connections.shared()?;
    let city = conn.get_city(city_id)?;
    for admin in usecases::community_admins_of_city(&conn, city_id)? {
        notify.community_admin_alerted(&admin, &city);
    }
    notify.city_signup_notified(&city);
    Ok(())
}
