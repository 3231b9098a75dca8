#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # ocdb-entities
//!
//! Reusable, agnostic domain entities for OpenCivicDB.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod category;
pub mod city;
pub mod comment;
pub mod email;
pub mod follow;
pub mod geo;
pub mod id;
pub mod image;
pub mod issue;
pub mod nonce;
pub mod password;
pub mod password_reset;
pub mod time;
pub mod user;
pub mod view;
pub mod vote;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
