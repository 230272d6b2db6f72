//! Error types for typed JSON encoding and decoding.

use thiserror::Error;

/// Errors surfaced by [`Codec::encode`](crate::Codec::encode) and
/// [`Codec::decode`](crate::Codec::decode).
///
/// Nothing is recovered locally: every variant is a hard stop for the call
/// that produced it.
#[derive(Error, Debug)]
pub enum CodecError {
    /// An extension value whose exact type has no registered adapter.
    #[error("Object of type {type_name} is not JSON serializable")]
    UnsupportedType { type_name: &'static str },

    /// A tagged record whose identifier is not in the registry.
    #[error("Unknown type tag: {0}")]
    UnknownTag(String),

    /// A tagged record with a known identifier but no data field.
    #[error("Tagged record \"{0}\" has no data field")]
    MissingData(String),

    /// Input is not well-formed JSON.
    #[error(transparent)]
    Syntax(#[from] serde_json::Error),

    /// Failure raised by an adapter's `to_payload` or `from_payload`.
    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors raised by adapter functions.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// The payload handed to `from_payload` has the wrong shape.
    #[error("Expected {expected} payload, found {found}")]
    UnexpectedPayload {
        expected: &'static str,
        found: &'static str,
    },

    /// An erased adapter was called with a value of another type.
    #[error("Adapter \"{identifier}\" cannot convert a value of type {found}")]
    WrongType {
        identifier: String,
        found: &'static str,
    },

    #[error("Range step must not be zero")]
    ZeroStep,

    #[error(transparent)]
    InvalidBase64(#[from] base64::DecodeError),

    #[error(transparent)]
    InvalidPattern(#[from] regex::Error),

    #[error("{0}")]
    Custom(String),
}
