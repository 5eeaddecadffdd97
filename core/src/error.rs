//! Error types for the request core.
//!
//! # Design
//! Validation failures each get their own variant so callers (and tests) can
//! match on the exact kind without string inspection. They are all raised
//! before a request is built. Anything the transport reports, including a
//! non-2xx status, is wrapped in `Transport` and passed through unchanged.

use thiserror::Error;

/// Failures reported by a `Transport` implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request never produced a response (connection, TLS, timeout...).
    #[error("transport failed: {0}")]
    Io(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// Errors returned by the validators and the controller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Neither a usable numeric id nor a non-empty screen name was given.
    #[error("no usable identifier: a numeric id or screen name must be set")]
    MissingIdentifier,

    /// Message text is absent or empty.
    #[error("message text is not valid")]
    InvalidMessageText,

    /// The message recipient cannot be identified.
    #[error("message recipient cannot be identified")]
    InvalidRecipient,

    #[error("message has already been published")]
    AlreadyPublished,

    #[error("message has already been destroyed")]
    AlreadyDestroyed,

    #[error("message has not yet been published")]
    NotYetPublished,

    #[error("publish message parameters cannot be null")]
    NullParameters,

    #[error("message cannot be null")]
    NullMessage,

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A response body could not be decoded into the expected shape.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The server handed back a cursor that was already requested.
    #[error("cursor {0} was already requested")]
    CursorLoop(i64),
}
