use std::{fmt, str::FromStr};

use thiserror::Error;

/// A salted bcrypt password hash.
///
/// Parsing from a string validates the plaintext and hashes it, so a
/// `Password` value never contains the plaintext itself.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Password(String);

impl Password {
    pub const fn min_len() -> usize {
        6
    }

    pub fn verify(&self, password: &str) -> bool {
        pwhash::bcrypt::verify(password, &self.0)
    }

    pub fn from_hash(hash: String) -> Self {
        Self(hash)
    }
}

#[derive(Debug, Error)]
#[error("Invalid password")]
pub struct ParseError;

impl From<Password> for String {
    fn from(from: Password) -> Self {
        from.0
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Password {
    type Err = ParseError;

    fn from_str(password: &str) -> Result<Self, Self::Err> {
        if password.len() < Password::min_len() {
            return Err(ParseError);
        }
        let res = Self(pwhash::bcrypt::hash(password).map_err(|_| ParseError)?);
        debug_assert!(res.verify(password));
        Ok(res)
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.0)
    }
}
