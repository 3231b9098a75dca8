use crate::{id::Id, time::Timestamp};

/// A comment on an issue, owned by the issue (cascade delete).
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : Id,
    pub issue_id   : Id,
    pub user_id    : Id,
    pub text       : String,
    pub created_at : Timestamp,
}
