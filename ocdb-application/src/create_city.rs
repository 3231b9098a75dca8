use super::*;

pub fn create_city(connections: &sqlite::Connections, new_city: usecases::NewCity) -> Result<City> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_city(conn, new_city).map_err(|err| {
            log::warn!("Failed to create city: {}", err);
            err
        })
    })?)
}
