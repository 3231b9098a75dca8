#[macro_use]
extern crate log;

mod change_issue_status;
mod comment_on_issue;
mod create_admin_user;
mod create_city;
mod create_federated_user;
mod create_issue;
mod create_or_edit_category;
mod delete_category;
mod follow;
mod login;
mod mark_issue_viewed;
mod queries;
mod register_user;
mod reset_password;
mod seed;
mod update_user;
mod vote_issue;

pub mod prelude {
    pub use super::{
        change_issue_status::*, comment_on_issue::*, create_admin_user::*, create_city::*,
        create_federated_user::*, create_issue::*, create_or_edit_category::*, delete_category::*,
        follow::*, login::*, mark_issue_viewed::*, queries::*, register_user::*,
        reset_password::*, seed::*, update_user::*, vote_issue::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use ocdb_core::{entities::*, repositories::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use ocdb_db_sqlite::Connections;
}
