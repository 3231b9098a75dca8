use crate::{id::Id, time::Timestamp};

/// Icon file assigned to categories that do not bring their own.
pub const DEFAULT_ICON: &str = "default.png";

/// Classification tag for issues.
///
/// Categories form a hierarchy of exactly two levels: a category either has
/// no parent or its parent is a top-level category. Deleted categories are
/// kept as rows but excluded from all default queries.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id          : Id,
    pub name        : String,
    pub description : Option<String>,
    /// Hex color, stored without the leading '#'.
    pub color       : String,
    pub icon        : String,
    pub parent_id   : Option<Id>,
    pub created_at  : Timestamp,
    pub deleted     : bool,
}
