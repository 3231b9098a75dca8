use super::prelude::*;

/// Moves an issue through its lifecycle. Only the reporter of the
/// issue and SSG admins may change the status; setting
/// [`IssueStatus::Deleted`] is how issues are (soft) deleted.
pub fn change_issue_status<R>(
    repo: &R,
    actor_id: &Id,
    issue_id: &Id,
    status: IssueStatus,
) -> Result<()>
where
    R: IssueRepo + UserRepo,
{
    let actor = repo.get_user(actor_id)?;
    let mut issue = repo.get_issue(issue_id)?;
    if issue.user_id != *actor_id && !actor.is_ssg_admin() {
        return Err(Error::Forbidden);
    }
    log::info!(
        "Changing status of issue '{}' from {} to {}",
        issue.id,
        issue.status,
        status
    );
    issue.status = status;
    repo.update_issue(&issue)?;
    Ok(())
}
