use time::Duration;

use super::*;

// View counters are best-effort statistics. The use case runs directly
// on the exclusive connection without a surrounding transaction; a
// failure halfway through loses at most one count.
pub fn mark_issue_viewed(
    connections: &sqlite::Connections,
    issue_id: &Id,
    session: &str,
    epsilon: Duration,
) -> Result<usecases::ViewOutcome> {
    Ok(usecases::mark_issue_viewed(
        &connections.exclusive()?,
        issue_id,
        session,
        epsilon,
    )?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use time::Duration;

    const EPSILON: Duration = Duration::hours(1);

    fn view(fixture: &BackendFixture, issue: &Issue, session: &str) -> bool {
        flows::mark_issue_viewed(&fixture.db_connections, &issue.id, session, EPSILON)
            .unwrap()
            .unique
    }

    #[test]
    fn repeated_views_of_a_session_count_once() {
        let fixture = BackendFixture::new();
        let (_, issue) = fixture.reported_issue();

        assert!(view(&fixture, &issue, "session-a"));
        assert!(!view(&fixture, &issue, "session-a"));
        assert!(view(&fixture, &issue, "session-b"));

        let issue = fixture.get_issue(&issue.id);
        assert_eq!(3, issue.view_count);
        assert_eq!(2, issue.session_view_count);
    }

    #[test]
    fn views_become_unique_again_after_the_epsilon() {
        let fixture = BackendFixture::new();
        let (_, issue) = fixture.reported_issue();

        assert!(view(&fixture, &issue, "session-a"));

        // Backdate the stored view beyond the epsilon
        {
            let conn = fixture.db_connections.exclusive().unwrap();
            let mut stored = conn
                .find_unique_view(&issue.id, "session-a")
                .unwrap()
                .unwrap();
            stored.viewed_at = Timestamp::from_millis(
                stored.viewed_at.as_millis() - EPSILON.whole_milliseconds() as i64 - 1,
            );
            conn.update_unique_view(&stored).unwrap();
        }

        assert!(view(&fixture, &issue, "session-a"));
        let issue = fixture.get_issue(&issue.id);
        assert_eq!(2, issue.view_count);
        assert_eq!(2, issue.session_view_count);
    }
}
