//! Error types for parsing KIE API values.

use thiserror::Error;

/// Errors that can occur when parsing versions, release ids or conversation ids.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The input string is empty.
    #[error("{what} cannot be empty")]
    Empty { what: &'static str },

    /// A version component is not a number.
    #[error("invalid version component '{component}' in '{input}'")]
    InvalidVersion { input: String, component: String },

    /// A release id does not have exactly three non-empty parts.
    #[error("invalid release id '{0}': expected 'group:artifact:version'")]
    InvalidReleaseId(String),

    /// A conversation id string does not follow the wire format.
    #[error("invalid conversation id '{input}': {message}")]
    InvalidConversationId { input: String, message: String },
}

impl ApiError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, ApiError::Empty { .. })
    }

    /// Returns true if this error came from a malformed conversation id.
    pub fn is_conversation_id_error(&self) -> bool {
        matches!(self, ApiError::InvalidConversationId { .. })
    }
}
