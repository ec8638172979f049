//! # kie-id
//!
//! Conversation ids for KIE server clients, whether or not the server has them.
//!
//! ## Design Principles
//!
//! - The server version decides, once, whether conversation ids exist
//! - Binding is all-or-nothing; a half-bound capability is never observable
//! - An unavailable capability is not an error: operations return `None`
//! - Failures inside a bound KIE API call are surfaced as [`CallError`]
//!
//! ## Binding
//!
//! [`Capability::bind`] consults a [`VersionGate`] and, for servers at 6.4 or
//! later, resolves the header constant, the conversation id type and its six
//! operations from a [`BindingSurface`]. Any lookup failure is logged at warn
//! level and leaves the capability unavailable, with the header name falling
//! back to `X-KIE-ConversationId`.
//!
//! ## Process-wide use
//!
//! [`capability`] binds against the running server on first use and hands out
//! the same [`Capability`] afterwards. Callers that prefer explicit wiring can
//! build their own with [`Capability::bind`] and pass it around.

mod binding;
mod config;
mod conversation;
mod error;
mod gate;
mod global;
pub mod surface;

pub use binding::{Capability, DEFAULT_CONVERSATION_ID_HEADER};
pub use config::{Config, HEADER_FALLBACK_ENV};
pub use conversation::{display_string, ConversationId};
pub use error::{BindError, BoxError, CallError, Operation};
pub use gate::{supports, VersionGate, VersionSource, MINIMUM_MAJOR, MINIMUM_MINOR};
pub use global::{capability, from, from_string, header_name, is_supported, LazyCapability};
pub use surface::{BindingSurface, NativeConversationId, NativeSurface};

/// Re-export the KIE API value types that flow through the façade
pub use kie_api::{ReleaseId, Version};
