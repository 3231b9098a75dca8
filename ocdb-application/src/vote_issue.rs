use super::*;

pub fn vote_for_issue(
    connections: &sqlite::Connections,
    user_id: &Id,
    issue_id: &Id,
) -> Result<usecases::VoteOutcome> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::vote_for_issue(conn, user_id, issue_id).map_err(|err| {
            log::warn!("Failed to vote for issue '{}': {}", issue_id, err);
            err
        })
    })?)
}

pub fn unvote_for_issue(
    connections: &sqlite::Connections,
    user_id: &Id,
    issue_id: &Id,
) -> Result<usecases::UnvoteOutcome> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::unvote_for_issue(conn, user_id, issue_id).map_err(|err| {
            log::warn!("Failed to withdraw vote for issue '{}': {}", issue_id, err);
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use usecases::{UnvoteOutcome, VoteOutcome};

    fn vote(fixture: &BackendFixture, user: &User, issue: &Issue) -> VoteOutcome {
        flows::vote_for_issue(&fixture.db_connections, &user.id, &issue.id).unwrap()
    }

    fn unvote(fixture: &BackendFixture, user: &User, issue: &Issue) -> UnvoteOutcome {
        flows::unvote_for_issue(&fixture.db_connections, &user.id, &issue.id).unwrap()
    }

    #[test]
    fn count_each_voter_once() {
        let fixture = BackendFixture::new();
        let (reporter, issue) = fixture.reported_issue();
        let ana = fixture.register_active_user("ana");
        let vedran = fixture.register_active_user("vedran");

        assert_eq!(VoteOutcome::Cast, vote(&fixture, &ana, &issue));
        assert_eq!(VoteOutcome::AlreadyCast, vote(&fixture, &ana, &issue));
        assert_eq!(VoteOutcome::Cast, vote(&fixture, &vedran, &issue));
        assert_eq!(VoteOutcome::OwnIssue, vote(&fixture, &reporter, &issue));
        assert_eq!(2, fixture.get_issue(&issue.id).vote_count);
    }

    #[test]
    fn withdrawing_never_goes_below_zero() {
        let fixture = BackendFixture::new();
        let (_, issue) = fixture.reported_issue();
        let ana = fixture.register_active_user("ana");

        assert_eq!(UnvoteOutcome::NotCast, unvote(&fixture, &ana, &issue));
        assert_eq!(0, fixture.get_issue(&issue.id).vote_count);

        assert_eq!(VoteOutcome::Cast, vote(&fixture, &ana, &issue));
        assert_eq!(UnvoteOutcome::Withdrawn, unvote(&fixture, &ana, &issue));
        assert_eq!(UnvoteOutcome::NotCast, unvote(&fixture, &ana, &issue));
        assert_eq!(0, fixture.get_issue(&issue.id).vote_count);
    }

    #[test]
    fn voting_again_after_withdrawal() {
        let fixture = BackendFixture::new();
        let (_, issue) = fixture.reported_issue();
        let ana = fixture.register_active_user("ana");

        assert_eq!(VoteOutcome::Cast, vote(&fixture, &ana, &issue));
        assert_eq!(UnvoteOutcome::Withdrawn, unvote(&fixture, &ana, &issue));
        assert_eq!(VoteOutcome::Cast, vote(&fixture, &ana, &issue));
        assert_eq!(1, fixture.get_issue(&issue.id).vote_count);
    }
}
