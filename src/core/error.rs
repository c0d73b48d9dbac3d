//! Message errors.

use thiserror::Error;

/// Errors raised when a message crosses into the typed core.
///
/// Inside Rust the message set is a closed enum and every `update` matches it
/// exhaustively, so none of these can occur there. They exist for the dynamic
/// boundary: command names and encoded messages handed over by a caller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MessageError {
    /// The message kind is not part of the closed set.
    #[error("Unhandled message kind '{kind}'")]
    UnhandledMessageKind { kind: String },

    /// The message kind is known but its payload is absent.
    #[error("Message '{kind}' requires an argument")]
    MissingArgument { kind: String },

    /// The encoded message could not be parsed.
    #[error("Malformed message: {0}")]
    Malformed(String),
}

impl MessageError {
    pub fn unhandled(kind: impl Into<String>) -> Self {
        Self::UnhandledMessageKind { kind: kind.into() }
    }
}
