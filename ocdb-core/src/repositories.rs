// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

/// Ordering of issue listings. All orders are descending, newest or
/// most popular first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    CreatedAt,
    MostViewed,
    MostVoted,
    MostDiscussed,
}

/// Filter parameters for issue listings with all references already
/// resolved. Category subtree expansion happens in the use case layer,
/// so an empty id list means "no category filter".
#[derive(Clone, Debug, Default)]
pub struct IssueQueryParams {
    pub category_ids: Vec<Id>,
    pub status: Option<IssueStatus>,
    pub city_id: Option<Id>,
    /// Half-open interval: `created_at >= start && created_at < end`.
    pub created_between: Option<(Timestamp, Timestamp)>,
    pub sort: SortOrder,
}

/// An issue together with the referenced rows a listing needs, loaded
/// in bulk to avoid per-row queries.
#[derive(Clone, Debug)]
pub struct EnrichedIssue {
    pub issue: Issue,
    pub user: User,
    pub city: City,
    pub category: Category,
    pub images: Vec<Image>,
}

/// Issue follows and user follows of a single user, in that order.
#[derive(Clone, Debug, Default)]
pub struct UserFollows {
    pub issues: Vec<IssueFollow>,
    pub users: Vec<UserFollow>,
}

pub trait CategoryRepo {
    fn create_category(&self, category: &Category) -> Result<()>;
    fn update_category(&self, category: &Category) -> Result<()>;

    // Only categories that are not marked as deleted
    fn get_category(&self, id: &Id) -> Result<Category>;
    fn all_categories(&self) -> Result<Vec<Category>>;
    fn subcategory_ids(&self, parent_id: &Id) -> Result<Vec<Id>>;

    fn mark_category_deleted(&self, id: &Id) -> Result<()>;
}

pub trait IssueRepo {
    fn create_issue(&self, issue: &Issue) -> Result<()>;
    fn update_issue(&self, issue: &Issue) -> Result<()>;

    // Soft-deleted issues are treated as missing
    fn get_issue(&self, id: &Id) -> Result<Issue>;

    fn query_issues(
        &self,
        params: &IssueQueryParams,
        pagination: &Pagination,
    ) -> Result<Vec<EnrichedIssue>>;

    // Strict containment, issues on the bbox boundary are excluded
    fn query_issues_in_bbox(&self, bbox: &MapBbox, limit: u64) -> Result<Vec<Issue>>;

    fn count_issues(&self) -> Result<usize>;
}

pub trait CommentRepo {
    fn create_comment(&self, comment: &Comment) -> Result<()>;
    fn load_comments_of_issue(&self, issue_id: &Id) -> Result<Vec<Comment>>;
}

pub trait VoteRepo {
    fn create_vote(&self, vote: &Vote) -> Result<()>;
    fn find_vote(&self, user_id: &Id, issue_id: &Id) -> Result<Option<Vote>>;
    fn delete_vote(&self, id: &Id) -> Result<()>;
    fn count_votes_of_issue(&self, issue_id: &Id) -> Result<usize>;
}

pub trait FollowRepo {
    fn create_issue_follow(&self, follow: &IssueFollow) -> Result<()>;
    fn find_issue_follow(&self, user_id: &Id, issue_id: &Id) -> Result<Option<IssueFollow>>;

    fn create_user_follow(&self, follow: &UserFollow) -> Result<()>;
    fn find_user_follow(&self, follower_id: &Id, followed_id: &Id) -> Result<Option<UserFollow>>;

    fn follows_of_user(&self, user_id: &Id) -> Result<UserFollows>;
}

pub trait UniqueViewRepo {
    fn create_unique_view(&self, view: &UniqueView) -> Result<()>;
    fn find_unique_view(&self, issue_id: &Id, session: &str) -> Result<Option<UniqueView>>;
    fn update_unique_view(&self, view: &UniqueView) -> Result<()>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: &Id) -> Result<User>;
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;
}

pub trait CityRepo {
    fn create_city(&self, city: &City) -> Result<()>;
    fn get_city(&self, id: &Id) -> Result<City>;
    fn all_cities(&self) -> Result<Vec<City>>;
}

pub trait ImageRepo {
    fn create_image(&self, image: &Image) -> Result<()>;

    // Returns the number of images that were actually attached
    fn attach_images_to_issue(&self, image_ids: &[Id], issue_id: &Id) -> Result<usize>;

    fn load_images_of_issue(&self, issue_id: &Id) -> Result<Vec<Image>>;
}

pub trait PasswordResetRepo {
    // At most one live reset per account: replaces any previous one
    fn replace_password_reset(&self, reset: PasswordReset) -> Result<EmailNonce>;

    // Deletes the reset on a successful read, so it cannot be used twice
    fn consume_password_reset(&self, email_nonce: &EmailNonce) -> Result<PasswordReset>;
}
