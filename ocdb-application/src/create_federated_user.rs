use super::*;

pub fn create_federated_user(
    connections: &sqlite::Connections,
    new_user: usecases::NewFederatedUser,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_federated_user(conn, new_user).map_err(|err| {
            log::warn!("Failed to create federated account: {}", err);
            err
        })
    })?)
}
