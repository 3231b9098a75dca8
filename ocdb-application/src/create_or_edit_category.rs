use super::*;

pub fn create_or_edit_category(
    connections: &sqlite::Connections,
    input: usecases::CategoryInput,
) -> Result<(Category, bool)> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_or_edit_category(conn, input).map_err(|err| {
            log::warn!("Failed to store category: {}", err);
            err
        })
    })?)
}
