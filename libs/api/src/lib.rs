//! # kie-api
//!
//! The KIE server API surface that the conversation-id adapter binds against.
//!
//! ## Contents
//!
//! - [`Version`]: the server's self-reported `MAJOR.MINOR.MICRO[.QUALIFIER]`
//! - [`ReleaseId`]: a `group:artifact:version` coordinate
//! - [`KieServerEnvironment`]: where the running server version comes from
//! - [`constants`]: well-known server constants
//!
//! ## Versioned surface
//!
//! Builds with the `conversation-id` feature model a 6.4+ server: they declare
//! version `6.4.0.Final`, export [`ConversationId`] and the
//! `KIE_CONVERSATION_ID_TYPE_HEADER` constant. Builds without it model an
//! older server where neither exists.

pub mod constants;
#[cfg(feature = "conversation-id")]
mod conversation;
mod environment;
mod error;
mod release_id;
mod version;

#[cfg(feature = "conversation-id")]
pub use conversation::ConversationId;
pub use environment::{KieServerEnvironment, KIE_SERVER_VERSION_ENV};
pub use error::ApiError;
pub use release_id::ReleaseId;
pub use version::Version;
