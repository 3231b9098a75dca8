mod activate_user;
mod admin_update_user;
mod change_issue_status;
mod comment_on_issue;
mod community_admins;
mod create_admin_user;
mod create_city;
mod create_federated_user;
mod create_issue;
mod create_or_edit_category;
mod delete_category;
mod error;
mod follow;
mod login;
mod mark_issue_viewed;
mod password_reset;
mod query_issues;
mod query_issues_in_bbox;
mod register_user;
mod stats;
mod subcategories;
mod update_user_settings;
mod user_map_view;
mod vote_issue;

#[cfg(test)]
pub mod tests;

type Result<T> = std::result::Result<T, Error>;

pub use self::{
    activate_user::*, admin_update_user::*, change_issue_status::*, comment_on_issue::*,
    community_admins::*, create_admin_user::*, create_city::*, create_federated_user::*,
    create_issue::*, create_or_edit_category::*, delete_category::*, error::Error, follow::*,
    login::*, mark_issue_viewed::*, password_reset::*, query_issues::*, query_issues_in_bbox::*,
    register_user::*, stats::*, subcategories::*, update_user_settings::*, user_map_view::*,
    vote_issue::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::repositories::Error as RepoError;
    pub use crate::{entities::*, repositories::*};
}
