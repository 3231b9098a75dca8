use crate::{id::Id, time::Timestamp};

/// An uploaded photo.
///
/// Images are uploaded before the issue exists and attached to it on
/// creation, so the issue reference starts out empty. Thumbnailing and
/// storage are outside the domain layer.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub id         : Id,
    pub issue_id   : Option<Id>,
    pub file_name  : String,
    pub created_at : Timestamp,
}
