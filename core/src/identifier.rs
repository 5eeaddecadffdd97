//! User and list identifiers.
//!
//! # Design
//! Callers may address a user by numeric id, by screen name, or with an
//! identifier carrying both. All of these funnel into `UserIdentifier` through
//! `From` conversions, and `resolve` collapses it into a single canonical
//! `UserTarget`. The numeric id always wins when both fields are usable.
//!
//! "Unset" is `None`. An id of zero is not a usable id either, the remote API
//! never allocates it.
//!
//! Resolution never fails here. An identifier that resolves to nothing is
//! rejected by the validators.

use serde::{Deserialize, Serialize};

use crate::types::User;

/// Loose description of a user as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_name: Option<String>,
}

/// Canonical user reference, exactly one of id or screen name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserTarget {
    Id(u64),
    ScreenName(String),
}

impl UserIdentifier {
    pub fn new(id: Option<u64>, screen_name: Option<String>) -> Self {
        Self { id, screen_name }
    }

    pub fn resolve(&self) -> Option<UserTarget> {
        if let Some(id) = self.id.filter(|id| *id > 0) {
            return Some(UserTarget::Id(id));
        }
        self.screen_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(|name| UserTarget::ScreenName(name.to_string()))
    }
}

impl From<u64> for UserIdentifier {
    fn from(id: u64) -> Self {
        Self {
            id: Some(id),
            screen_name: None,
        }
    }
}

impl From<&str> for UserIdentifier {
    fn from(screen_name: &str) -> Self {
        Self {
            id: None,
            screen_name: Some(screen_name.to_string()),
        }
    }
}

impl From<String> for UserIdentifier {
    fn from(screen_name: String) -> Self {
        Self {
            id: None,
            screen_name: Some(screen_name),
        }
    }
}

impl From<&User> for UserIdentifier {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            screen_name: user.screen_name.clone(),
        }
    }
}

impl From<&UserIdentifier> for UserIdentifier {
    fn from(identifier: &UserIdentifier) -> Self {
        identifier.clone()
    }
}

impl From<UserTarget> for UserIdentifier {
    fn from(target: UserTarget) -> Self {
        match target {
            UserTarget::Id(id) => id.into(),
            UserTarget::ScreenName(name) => name.into(),
        }
    }
}

/// Loose description of a list: either its id, or its slug plus owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListIdentifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default)]
    pub owner: UserIdentifier,
}

/// Canonical list reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListTarget {
    Id(u64),
    Slug { slug: String, owner: UserTarget },
}

impl ListIdentifier {
    pub fn from_id(list_id: u64) -> Self {
        Self {
            list_id: Some(list_id),
            ..Self::default()
        }
    }

    pub fn from_slug(slug: impl Into<String>, owner: impl Into<UserIdentifier>) -> Self {
        Self {
            list_id: None,
            slug: Some(slug.into()),
            owner: owner.into(),
        }
    }

    pub fn resolve(&self) -> Option<ListTarget> {
        if let Some(id) = self.list_id.filter(|id| *id > 0) {
            return Some(ListTarget::Id(id));
        }
        let slug = self.slug.as_deref().filter(|s| !s.is_empty())?;
        let owner = self.owner.resolve()?;
        Some(ListTarget::Slug {
            slug: slug.to_string(),
            owner,
        })
    }
}
