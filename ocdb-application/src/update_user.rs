use super::*;

pub fn update_user_settings(
    connections: &sqlite::Connections,
    user_id: &Id,
    update: usecases::SettingsUpdate,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::update_user_settings(conn, user_id, update).map_err(|err| {
            log::warn!("Failed to update settings of user '{}': {}", user_id, err);
            err
        })
    })?)
}

pub fn admin_update_user(
    connections: &sqlite::Connections,
    actor_id: &Id,
    user_id: &Id,
    update: usecases::AdminUserUpdate,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::admin_update_user(conn, actor_id, user_id, update).map_err(|err| {
            log::warn!("Failed to update account '{}': {}", user_id, err);
            err
        })
    })?)
}
