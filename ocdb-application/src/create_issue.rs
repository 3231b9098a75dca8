use super::*;

pub fn create_issue(
    connections: &sqlite::Connections,
    new_issue: usecases::NewIssue,
) -> Result<Issue> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_issue(conn, new_issue).map_err(|err| {
            log::warn!("Failed to create issue: {}", err);
            err
        })
    })?)
}
