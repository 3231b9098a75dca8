use num_derive::{FromPrimitive, ToPrimitive};
use strum::{Display, EnumString};

use crate::{email::EmailAddress, id::Id, nonce::Nonce, password::Password, time::Timestamp};

pub const DEFAULT_LOCALE: &str = "bs";
pub const SUPPORTED_LOCALES: &[&str] = &["bs", "en"];

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id               : Id,
    pub username         : String,
    pub email            : EmailAddress,
    /// `None` for federated accounts that sign in through their provider.
    pub password         : Option<Password>,
    pub federated        : Option<FederatedIdentity>,
    pub role             : Role,
    pub active           : bool,
    pub city_id          : Option<Id>,
    pub first_name       : Option<String>,
    pub last_name        : Option<String>,
    pub website          : Option<String>,
    pub about            : Option<String>,
    pub locale           : String,
    pub image_id         : Option<Id>,
    /// Compared verbatim against the token supplied on account activation.
    /// Regenerated whenever an inactive account is re-registered.
    pub activation_nonce : Nonce,
    pub created_at       : Timestamp,
}

impl User {
    /// An ephemeral stand-in for an unauthenticated caller.
    ///
    /// Guest users are never persisted; every call site constructs its own
    /// value instead of sharing a process-wide instance.
    pub fn guest() -> Self {
        Self {
            id: Id::default(),
            username: "guest".into(),
            email: EmailAddress::new_unchecked(String::new()),
            password: None,
            federated: None,
            role: Role::Guest,
            active: false,
            city_id: None,
            first_name: Some("Guest".into()),
            last_name: None,
            website: None,
            about: None,
            locale: DEFAULT_LOCALE.into(),
            image_id: None,
            activation_nonce: Nonce::default(),
            created_at: Timestamp::default(),
        }
    }

    pub fn is_guest(&self) -> bool {
        self.role == Role::Guest
    }

    pub fn is_community_admin(&self) -> bool {
        self.role == Role::CommunityAdmin
    }

    pub fn is_ssg_admin(&self) -> bool {
        self.role == Role::SsgAdmin
    }

    pub fn is_federated(&self) -> bool {
        self.federated.is_some()
    }

    pub fn display_name(&self) -> &str {
        &self.username
    }

    /// First and last name, falling back to the username when both are
    /// missing or blank.
    pub fn full_name(&self) -> String {
        let full = match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => String::new(),
        };
        if full.trim().is_empty() {
            self.username.clone()
        } else {
            full
        }
    }
}

/// The fb_id/token pair of a social-login account.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederatedIdentity {
    pub provider_user_id : String,
    pub access_token     : String,
}

#[rustfmt::skip]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord,
    FromPrimitive, ToPrimitive, Display, EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    Guest          = 1,
    User           = 2,
    CommunityAdmin = 3,
    SsgAdmin       = 4,
}

impl Default for Role {
    fn default() -> Role {
        Role::Guest
    }
}
