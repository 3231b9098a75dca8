use time::Duration;

use super::prelude::*;

/// Whether the recorded view also counted as unique for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOutcome {
    pub unique: bool,
}

/// Records a view of an issue.
///
/// The raw view counter is incremented on every call. The session view
/// counter is only incremented when this session has not viewed the
/// issue within the given epsilon; the per-session state is updated
/// accordingly.
pub fn mark_issue_viewed<R>(
    repo: &R,
    issue_id: &Id,
    session: &str,
    epsilon: Duration,
) -> Result<ViewOutcome>
where
    R: IssueRepo + UniqueViewRepo,
{
    let mut issue = repo.get_issue(issue_id)?;
    let now = Timestamp::now();

    let unique = match repo.find_unique_view(issue_id, session)? {
        Some(mut view) => {
            let elapsed = now - view.viewed_at;
            if elapsed > epsilon {
                view.viewed_at = now;
                repo.update_unique_view(&view)?;
                issue.session_view_count += 1;
                true
            } else {
                false
            }
        }
        None => {
            let view = UniqueView {
                id: Id::new(),
                issue_id: issue_id.clone(),
                session: session.to_string(),
                viewed_at: now,
            };
            repo.create_unique_view(&view)?;
            issue.session_view_count += 1;
            true
        }
    };

    issue.view_count += 1;
    repo.update_issue(&issue)?;
    Ok(ViewOutcome { unique })
}
