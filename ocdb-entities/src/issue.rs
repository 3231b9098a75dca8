use num_derive::{FromPrimitive, ToPrimitive};
use strum::{Display, EnumString};

use crate::{geo::MapPoint, id::Id, time::Timestamp};

/// A citizen-submitted report, the central entity of the system.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub id                 : Id,
    pub title              : String,
    pub description        : String,
    pub position           : MapPoint,
    pub status             : IssueStatus,
    /// Total number of views, incremented on every call.
    pub view_count         : u64,
    /// Views de-duplicated per session within a configurable window.
    pub session_view_count : u64,
    /// Never less than the number of distinct voters (invariant: >= 0 is
    /// guaranteed by the unsigned type, decrements saturate).
    pub vote_count         : u64,
    pub comment_count      : u64,
    pub share_count        : u64,
    pub user_id            : Id,
    pub category_id        : Id,
    pub city_id            : Id,
    pub created_at         : Timestamp,
}

impl Issue {
    pub fn is_deleted(&self) -> bool {
        self.status == IssueStatus::Deleted
    }
}

/// Lifecycle status of an issue.
///
/// `Deleted` acts as a soft delete: such issues are excluded from all
/// default queries. The numeric discriminants are the persistence format.
#[rustfmt::skip]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    FromPrimitive, ToPrimitive, Display, EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum IssueStatus {
    Open       = 1,
    InProgress = 2,
    Accepted   = 3,
    Fixed      = 4,
    Deleted    = 5,
    ReOpened   = 6,
}

impl Default for IssueStatus {
    fn default() -> Self {
        IssueStatus::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{FromPrimitive, ToPrimitive};

    #[test]
    fn status_codes_are_stable() {
        assert_eq!(Some(1), IssueStatus::Open.to_i16());
        assert_eq!(Some(5), IssueStatus::Deleted.to_i16());
        assert_eq!(Some(IssueStatus::ReOpened), IssueStatus::from_i16(6));
        assert_eq!(None, IssueStatus::from_i16(0));
        assert_eq!(None, IssueStatus::from_i16(7));
    }

    #[test]
    fn status_string_forms() {
        assert_eq!("in_progress", IssueStatus::InProgress.to_string());
        assert_eq!("re_opened", IssueStatus::ReOpened.to_string());
        assert_eq!(
            IssueStatus::Fixed,
            "fixed".parse::<IssueStatus>().unwrap()
        );
        assert!("nonsense".parse::<IssueStatus>().is_err());
    }
}
