use ocdb_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use std::io;
use thiserror::Error;

pub use ocdb_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ocdb_core::usecases::Error> for AppError {
    fn from(err: ocdb_core::usecases::Error) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<ocdb_entities::password::ParseError> for AppError {
    fn from(err: ocdb_entities::password::ParseError) -> Self {
        BError::from(err).into()
    }
}

impl From<ocdb_entities::email::EmailAddressParseError> for AppError {
    fn from(err: ocdb_entities::email::EmailAddressParseError) -> Self {
        BError::from(err).into()
    }
}

impl From<ocdb_entities::nonce::EmailNonceDecodingError> for AppError {
    fn from(err: ocdb_entities::nonce::EmailNonceDecodingError) -> Self {
        BError::from(err).into()
    }
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<String> for BError {
    fn from(s: String) -> Self {
        Self::Internal(s)
    }
}

impl From<ocdb_entities::password::ParseError> for BError {
    fn from(_: ocdb_entities::password::ParseError) -> Self {
        Self::Parameter(ParameterError::Password)
    }
}

impl From<ocdb_entities::email::EmailAddressParseError> for BError {
    fn from(_: ocdb_entities::email::EmailAddressParseError) -> Self {
        Self::Parameter(ParameterError::Email)
    }
}

impl From<ocdb_entities::nonce::EmailNonceDecodingError> for BError {
    fn from(_: ocdb_entities::nonce::EmailNonceDecodingError) -> Self {
        Self::Parameter(ParameterError::TokenInvalid)
    }
}
