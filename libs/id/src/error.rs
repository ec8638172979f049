//! Error types for binding and calling conversation id operations.

use std::fmt;

use thiserror::Error;

/// Failure raised by an underlying conversation id operation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The operations the adapter binds against the KIE API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    From,
    FromString,
    KieServerId,
    ContainerId,
    ReleaseId,
    UniqueString,
}

impl Operation {
    /// All operations, in binding order.
    pub const ALL: [Operation; 6] = [
        Operation::From,
        Operation::FromString,
        Operation::KieServerId,
        Operation::ContainerId,
        Operation::ReleaseId,
        Operation::UniqueString,
    ];

    /// The operation's name on the KIE conversation id type.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::From => "from",
            Operation::FromString => "from_string",
            Operation::KieServerId => "kie_server_id",
            Operation::ContainerId => "container_id",
            Operation::ReleaseId => "release_id",
            Operation::UniqueString => "unique_string",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reasons the conversation id capability could not be bound.
///
/// Every variant means the same thing to callers: the capability is
/// unavailable and the façade degrades to returning nothing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The header constant is not exported.
    #[error("constant {0} not found")]
    MissingConstant(&'static str),

    /// The conversation id type is not exported.
    #[error("type {0} not found")]
    MissingType(&'static str),

    /// The type exists but lacks an operation.
    #[error("operation {operation} not found on {type_name}")]
    MissingOperation {
        type_name: &'static str,
        operation: Operation,
    },

    /// The operation exists with a different signature.
    #[error("operation {operation} has an unexpected signature, expected {expected}")]
    SignatureMismatch {
        operation: Operation,
        expected: &'static str,
    },

    /// The surface refused access to a member.
    #[error("access denied: {0}")]
    AccessDenied(String),
}

impl BindError {
    /// The operation this failure is about, if any.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            BindError::MissingOperation { operation, .. }
            | BindError::SignatureMismatch { operation, .. } => Some(*operation),
            _ => None,
        }
    }
}

/// A bound operation failed while running.
///
/// Only raised once the capability is known to be present; an unavailable
/// capability is reported as `None`, never as an error.
#[derive(Debug, Error)]
#[error("conversation id operation {operation} failed: {source}")]
pub struct CallError {
    operation: Operation,
    #[source]
    source: BoxError,
}

impl CallError {
    pub fn new(operation: Operation, source: impl Into<BoxError>) -> Self {
        Self {
            operation,
            source: source.into(),
        }
    }

    /// The operation that failed.
    pub fn operation(&self) -> Operation {
        self.operation
    }
}
