use super::*;

// Follows are simple row inserts; the use cases run directly on the
// exclusive connection without a surrounding transaction.

pub fn follow_issue(
    connections: &sqlite::Connections,
    user_id: &Id,
    issue_id: &Id,
) -> Result<usecases::FollowOutcome> {
    Ok(usecases::follow_issue(
        &connections.exclusive()?,
        user_id,
        issue_id,
    )?)
}

pub fn follow_user(
    connections: &sqlite::Connections,
    follower_id: &Id,
    followed_id: &Id,
) -> Result<usecases::FollowOutcome> {
    Ok(usecases::follow_user(
        &connections.exclusive()?,
        follower_id,
        followed_id,
    )?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use usecases::FollowOutcome;

    #[test]
    fn follow_issues_and_users() {
        let fixture = BackendFixture::new();
        let (reporter, issue) = fixture.reported_issue();
        let ana = fixture.register_active_user("ana");

        assert_eq!(
            FollowOutcome::Followed,
            flows::follow_issue(&fixture.db_connections, &ana.id, &issue.id).unwrap()
        );
        assert_eq!(
            FollowOutcome::AlreadyFollowing,
            flows::follow_issue(&fixture.db_connections, &ana.id, &issue.id).unwrap()
        );
        assert_eq!(
            FollowOutcome::Followed,
            flows::follow_user(&fixture.db_connections, &ana.id, &reporter.id).unwrap()
        );

        let follows = flows::follows_of_user(&fixture.db_connections, &ana.id).unwrap();
        assert_eq!(1, follows.issues.len());
        assert_eq!(issue.id, follows.issues[0].issue_id);
        assert_eq!(1, follows.users.len());
        assert_eq!(reporter.id, follows.users[0].followed_id);

        // The reporter follows nobody
        let follows = flows::follows_of_user(&fixture.db_connections, &reporter.id).unwrap();
        assert!(follows.issues.is_empty());
        assert!(follows.users.is_empty());
    }

    #[test]
    fn follow_unknown_issue_fails() {
        let fixture = BackendFixture::new();
        let ana = fixture.register_active_user("ana");
        assert!(flows::follow_issue(&fixture.db_connections, &ana.id, &Id::new()).is_err());
    }
}
