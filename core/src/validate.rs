//! Precondition guards run before any request is built.
//!
//! Each guard returns the canonical value the query generator needs, so a
//! request can only be generated from input that already passed validation.

use crate::error::ApiError;
use crate::identifier::{ListIdentifier, ListTarget, UserIdentifier, UserTarget};
use crate::types::{Message, PublishMessageParameters};

pub fn validate_identifiable(target: &UserIdentifier) -> Result<UserTarget, ApiError> {
    target.resolve().ok_or(ApiError::MissingIdentifier)
}

pub fn validate_list_identifier(list: &ListIdentifier) -> Result<ListTarget, ApiError> {
    list.resolve().ok_or(ApiError::MissingIdentifier)
}

pub fn is_message_text_valid(text: Option<&str>) -> bool {
    matches!(text, Some(t) if !t.is_empty())
}

/// Check that a message can be sent and return its resolved recipient.
///
/// Lifecycle flags of an attached message are checked first: a message that
/// was already published or destroyed is rejected whatever its other fields
/// hold.
pub fn validate_publishable(params: Option<&PublishMessageParameters>) -> Result<UserTarget, ApiError> {
    let params = params.ok_or(ApiError::NullParameters)?;

    if let Some(message) = &params.message {
        if message.is_published {
            return Err(ApiError::AlreadyPublished);
        }
        if message.is_destroyed {
            return Err(ApiError::AlreadyDestroyed);
        }
    }

    let recipient = params.recipient.resolve().ok_or(ApiError::InvalidRecipient)?;

    if !is_message_text_valid(params.text.as_deref()) {
        return Err(ApiError::InvalidMessageText);
    }

    Ok(recipient)
}

pub fn validate_destroyable(message: Option<&Message>) -> Result<(), ApiError> {
    let message = message.ok_or(ApiError::NullMessage)?;
    if !message.is_published {
        return Err(ApiError::NotYetPublished);
    }
    if message.is_destroyed {
        return Err(ApiError::AlreadyDestroyed);
    }
    Ok(())
}

pub fn validate_message_id(id: Option<u64>) -> Result<u64, ApiError> {
    id.filter(|id| *id > 0).ok_or(ApiError::MissingIdentifier)
}

pub fn validate_destroyable_by_id(id: Option<u64>) -> Result<u64, ApiError> {
    validate_message_id(id)
}
