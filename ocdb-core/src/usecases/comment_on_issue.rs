use super::prelude::*;

/// Adds a comment to an issue and bumps its comment counter.
pub fn comment_on_issue<R>(repo: &R, user_id: &Id, issue_id: &Id, text: &str) -> Result<Comment>
where
    R: IssueRepo + CommentRepo,
{
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyComment);
    }
    let mut issue = repo.get_issue(issue_id)?;
    let comment = Comment {
        id: Id::new(),
        issue_id: issue_id.clone(),
        user_id: user_id.clone(),
        text: text.to_string(),
        created_at: Timestamp::now(),
    };
    repo.create_comment(&comment)?;
    issue.comment_count += 1;
    repo.update_issue(&issue)?;
    Ok(comment)
}
