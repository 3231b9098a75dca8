use super::*;

pub fn change_issue_status(
    connections: &sqlite::Connections,
    actor_id: &Id,
    issue_id: &Id,
    status: IssueStatus,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::change_issue_status(conn, actor_id, issue_id, status).map_err(|err| {
            log::warn!("Failed to change status of issue '{}': {}", issue_id, err);
            err
        })
    })?)
}
