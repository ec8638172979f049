//! The process-wide conversation id capability.

use std::sync::OnceLock;

use kie_api::ReleaseId;

use crate::surface::NativeSurface;
use crate::{CallError, Capability, Config, ConversationId, VersionGate};

/// A [`Capability`] bound on first use, at most once.
///
/// Concurrent first callers block until the single binding finishes; later
/// callers read the stored capability without locking.
pub struct LazyCapability {
    cell: OnceLock<Capability>,
    bind: fn() -> Capability,
}

impl LazyCapability {
    pub const fn new(bind: fn() -> Capability) -> Self {
        Self {
            cell: OnceLock::new(),
            bind,
        }
    }

    pub fn get(&self) -> &Capability {
        self.cell.get_or_init(self.bind)
    }
}

static CAPABILITY: LazyCapability = LazyCapability::new(bind_from_env);

fn bind_from_env() -> Capability {
    let config = Config::from_env();
    let gate = VersionGate::new(config.environment());
    Capability::bind_with_config(&gate, &NativeSurface, &config)
}

/// The capability bound against the running server, computed once.
pub fn capability() -> &'static Capability {
    CAPABILITY.get()
}

/// Whether the running server version supports conversation ids.
///
/// Re-reads the version on each call; binding happens separately in
/// [`capability`].
pub fn is_supported() -> bool {
    VersionGate::new(Config::from_env().environment()).is_capability_available()
}

/// Header name carrying conversation ids.
pub fn header_name() -> &'static str {
    capability().header_name()
}

/// Starts a new conversation through the process-wide capability.
pub fn from(
    kie_server_id: &str,
    container_id: &str,
    release_id: &ReleaseId,
) -> Result<Option<ConversationId>, CallError> {
    capability().from(kie_server_id, container_id, release_id)
}

/// Parses a conversation id through the process-wide capability.
pub fn from_string(text: &str) -> Result<Option<ConversationId>, CallError> {
    capability().from_string(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_is_stable() {
        let first = capability();
        let second = capability();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.is_available(), second.is_available());
        assert!(!header_name().is_empty());
    }
}
