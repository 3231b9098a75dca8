use crate::{id::Id, time::Timestamp};

/// A user's vote on an issue.
///
/// At most one vote per (user, issue) pair. Uniqueness is enforced by the
/// voting workflow, not by the schema.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub id         : Id,
    pub user_id    : Id,
    pub issue_id   : Id,
    pub created_at : Timestamp,
}
