use super::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowOutcome {
    Followed,
    /// The subscription already existed; nothing changed.
    AlreadyFollowing,
}

/// Subscribes a user to an issue. Following twice is a no-op.
pub fn follow_issue<R>(repo: &R, user_id: &Id, issue_id: &Id) -> Result<FollowOutcome>
where
    R: IssueRepo + FollowRepo,
{
    let issue = repo.get_issue(issue_id)?;
    if repo.find_issue_follow(user_id, &issue.id)?.is_some() {
        return Ok(FollowOutcome::AlreadyFollowing);
    }
    repo.create_issue_follow(&IssueFollow {
        id: Id::new(),
        user_id: user_id.clone(),
        issue_id: issue.id,
        created_at: Timestamp::now(),
    })?;
    Ok(FollowOutcome::Followed)
}

/// Subscribes a user to another user.
pub fn follow_user<R>(repo: &R, follower_id: &Id, followed_id: &Id) -> Result<FollowOutcome>
where
    R: UserRepo + FollowRepo,
{
    let followed = repo.get_user(followed_id)?;
    if repo.find_user_follow(follower_id, &followed.id)?.is_some() {
        return Ok(FollowOutcome::AlreadyFollowing);
    }
    repo.create_user_follow(&UserFollow {
        id: Id::new(),
        follower_id: follower_id.clone(),
        followed_id: followed.id,
        created_at: Timestamp::now(),
    })?;
    Ok(FollowOutcome::Followed)
}

/// Everything a user follows: their issue subscriptions first, then
/// their user subscriptions.
pub fn follows_of_user<R: FollowRepo>(repo: &R, user_id: &Id) -> Result<UserFollows> {
    Ok(repo.follows_of_user(user_id)?)
}
