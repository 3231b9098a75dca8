use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The title is invalid")]
    Title,
    #[error("The category name is invalid")]
    CategoryName,
    #[error("The parent category must be a top-level category")]
    ParentCategory,
    #[error("The city name is invalid")]
    CityName,
    #[error("Invalid color")]
    Color,
    #[error("Invalid position")]
    Position,
    #[error("Bounding box is invalid")]
    Bbox,
    #[error("Invalid email address")]
    Email,
    #[error("Invalid password")]
    Password,
    #[error("The username is invalid")]
    Username,
    #[error("Invalid credentials")]
    Credentials,
    #[error("The account has not been activated")]
    AccountInactive,
    #[error("The username is already taken")]
    UsernameTaken,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("This is not allowed")]
    Forbidden,
    #[error("Token invalid")]
    TokenInvalid,
    #[error("Invalid issue status")]
    Status,
    #[error("Empty comment")]
    EmptyComment,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<ocdb_entities::password::ParseError> for Error {
    fn from(_: ocdb_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<ocdb_entities::email::EmailAddressParseError> for Error {
    fn from(_: ocdb_entities::email::EmailAddressParseError) -> Self {
        Self::Email
    }
}

impl From<ocdb_entities::nonce::EmailNonceDecodingError> for Error {
    fn from(_: ocdb_entities::nonce::EmailNonceDecodingError) -> Self {
        Self::TokenInvalid
    }
}
