//! Domain values read or produced by the request core.
//!
//! # Design
//! Only the fields the core actually inspects are modelled. Everything else in
//! a response stays inside the raw JSON string handed back to the caller.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identifier::UserIdentifier;

/// A user as far as the core cares: enough to identify them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub screen_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A direct message and its lifecycle flags.
///
/// The flags encode Draft (neither set), Published (`is_published`) and
/// Destroyed (both set).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub recipient: UserIdentifier,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub is_destroyed: bool,
}

/// Input for sending a direct message.
///
/// `message` is set when publishing a previously drafted `Message`, so that
/// its lifecycle flags can be checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishMessageParameters {
    pub text: Option<String>,
    pub recipient: UserIdentifier,
    pub message: Option<Message>,
}

impl PublishMessageParameters {
    pub fn new(text: impl Into<String>, recipient: impl Into<UserIdentifier>) -> Self {
        Self {
            text: Some(text.into()),
            recipient: recipient.into(),
            message: None,
        }
    }
}

impl From<&Message> for PublishMessageParameters {
    fn from(message: &Message) -> Self {
        Self {
            text: Some(message.text.clone()),
            recipient: message.recipient.clone(),
            message: Some(message.clone()),
        }
    }
}

/// Per-relationship switches sent with a friendship update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipAuthorizations {
    pub retweets_enabled: bool,
    pub device_notifications_enabled: bool,
}

impl RelationshipAuthorizations {
    pub fn new(retweets_enabled: bool, device_notifications_enabled: bool) -> Self {
        Self {
            retweets_enabled,
            device_notifications_enabled,
        }
    }
}

/// Visibility of a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivacyMode {
    #[default]
    Public,
    Private,
}

impl PrivacyMode {
    /// Wire form, always lowercase.
    pub fn as_str(self) -> &'static str {
        match self {
            PrivacyMode::Public => "public",
            PrivacyMode::Private => "private",
        }
    }
}

impl fmt::Display for PrivacyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input for creating a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateList {
    pub name: String,
    pub mode: PrivacyMode,
    pub description: Option<String>,
}

impl CreateList {
    pub fn new(name: impl Into<String>, mode: PrivacyMode) -> Self {
        Self {
            name: name.into(),
            mode,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One page of a cursored id listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdsCursorPage {
    pub ids: Vec<u64>,
    pub next_cursor: i64,
    #[serde(default)]
    pub previous_cursor: i64,
}

/// A latitude/longitude pair. Not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}
