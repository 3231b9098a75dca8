use super::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    Cast,
    /// The user had already voted; nothing changed.
    AlreadyCast,
    /// Users cannot vote for their own issues; nothing changed.
    OwnIssue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnvoteOutcome {
    Withdrawn,
    /// There was no vote to withdraw; nothing changed.
    NotCast,
    OwnIssue,
}

/// Casts a vote on an issue. The issue's vote counter is incremented
/// if and only if a new vote was actually recorded.
pub fn vote_for_issue<R>(repo: &R, user_id: &Id, issue_id: &Id) -> Result<VoteOutcome>
where
    R: IssueRepo + VoteRepo,
{
    let mut issue = repo.get_issue(issue_id)?;
    if issue.user_id == *user_id {
        return Ok(VoteOutcome::OwnIssue);
    }
    if repo.find_vote(user_id, issue_id)?.is_some() {
        return Ok(VoteOutcome::AlreadyCast);
    }
    let vote = Vote {
        id: Id::new(),
        user_id: user_id.clone(),
        issue_id: issue_id.clone(),
        created_at: Timestamp::now(),
    };
    repo.create_vote(&vote)?;
    issue.vote_count += 1;
    repo.update_issue(&issue)?;
    Ok(VoteOutcome::Cast)
}

/// Withdraws a vote. The counter is decremented if and only if a vote
/// was actually deleted, and never drops below zero.
pub fn unvote_for_issue<R>(repo: &R, user_id: &Id, issue_id: &Id) -> Result<UnvoteOutcome>
where
    R: IssueRepo + VoteRepo,
{
    let mut issue = repo.get_issue(issue_id)?;
    if issue.user_id == *user_id {
        return Ok(UnvoteOutcome::OwnIssue);
    }
    let Some(vote) = repo.find_vote(user_id, issue_id)? else {
        return Ok(UnvoteOutcome::NotCast);
    };
    repo.delete_vote(&vote.id)?;
    issue.vote_count = issue.vote_count.saturating_sub(1);
    repo.update_issue(&issue)?;
    Ok(UnvoteOutcome::Withdrawn)
}
