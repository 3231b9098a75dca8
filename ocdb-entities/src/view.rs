use crate::{id::Id, time::Timestamp};

/// Per-session view de-duplication state for an issue.
///
/// `viewed_at` is the wall-clock time of the last view counted for this
/// session; a new view only counts once the configured epsilon has elapsed.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueView {
    pub id        : Id,
    pub issue_id  : Id,
    /// Anonymous session identifier (browser cookie).
    pub session   : String,
    pub viewed_at : Timestamp,
}
