//! Request core for a social-graph and direct-messaging REST API.
//!
//! # Overview
//! Turns typed operations (follow, unfollow, relationship settings, direct
//! messages, lists) into `HttpRequest` descriptors, rejects invalid input
//! before anything is sent, and walks cursored id listings to completion. The
//! actual HTTP round-trip is delegated to a caller-supplied `Transport`.
//!
//! # Design
//! - `identifier` normalizes ids and screen names into one canonical target.
//! - `validate` holds the precondition guards, returning `Result`.
//! - `query::QueryGenerator` is pure: same input, same descriptor.
//! - `cursor::CursorAccessor` is all-or-nothing across pages.
//! - `controller::SocialController` chains the above per operation.
//! - Nothing here keeps state between calls, so a controller can be shared
//!   across threads whenever its transport can.

pub mod config;
pub mod controller;
pub mod cursor;
pub mod error;
pub mod http;
pub mod identifier;
pub mod query;
pub mod transport;
pub mod types;
pub mod validate;

#[cfg(test)]
mod testing;

pub use config::ClientConfig;
pub use controller::SocialController;
pub use cursor::CursorAccessor;
pub use error::{ApiError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use identifier::{ListIdentifier, ListTarget, UserIdentifier, UserTarget};
pub use query::QueryGenerator;
pub use transport::Transport;
pub use types::{
    Coordinates, CreateList, IdsCursorPage, Message, PrivacyMode, PublishMessageParameters,
    RelationshipAuthorizations, User,
};
