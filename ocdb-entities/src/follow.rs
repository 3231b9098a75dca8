use crate::{id::Id, time::Timestamp};

/// Subscription of a user to an issue.
///
/// Like votes, follows are unique per (user, target) pair by application
/// check only.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueFollow {
    pub id         : Id,
    pub user_id    : Id,
    pub issue_id   : Id,
    pub created_at : Timestamp,
}

/// Subscription of a user to another user.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFollow {
    pub id          : Id,
    pub follower_id : Id,
    pub followed_id : Id,
    pub created_at  : Timestamp,
}
