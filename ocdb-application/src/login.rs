use super::*;

pub fn login_user(
    connections: &sqlite::Connections,
    credentials: &usecases::Credentials<'_>,
) -> Result<User> {
    Ok(usecases::login_user(&connections.shared()?, credentials)?)
}

pub fn login_admin(
    connections: &sqlite::Connections,
    credentials: &usecases::Credentials<'_>,
) -> Result<User> {
    Ok(usecases::login_admin(&connections.shared()?, credentials)?)
}
