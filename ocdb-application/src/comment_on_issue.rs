use super::*;

pub fn comment_on_issue(
    connections: &sqlite::Connections,
    user_id: &Id,
    issue_id: &Id,
    text: &str,
) -> Result<Comment> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::comment_on_issue(conn, user_id, issue_id, text).map_err(|err| {
            log::warn!("Failed to comment on issue '{}': {}", issue_id, err);
            err
        })
    })?)
}
