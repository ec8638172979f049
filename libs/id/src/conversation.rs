//! Conversation ids and the operations routed through a [`Capability`].

use std::fmt;

use kie_api::ReleaseId;

use crate::binding::Bindings;
use crate::surface::{Accessor, NativeConversationId, NativeRef};
use crate::{CallError, Capability, Operation};

/// A conversation id produced by the KIE API.
///
/// Only [`Capability::from`] and [`Capability::from_string`] create one, so
/// holding a `ConversationId` means the capability was bound when it was made.
#[derive(Clone)]
pub struct ConversationId {
    native: NativeRef,
}

impl ConversationId {
    fn new(native: NativeRef) -> Self {
        Self { native }
    }

    /// The wrapped KIE API value.
    pub fn native(&self) -> &dyn NativeConversationId {
        self.native.as_ref()
    }

    /// The KIE API's own string form, unmodified.
    pub fn to_display_string(&self) -> String {
        self.native.to_string()
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.native, f)
    }
}

impl fmt::Debug for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConversationId").field(&self.native).finish()
    }
}

impl serde::Serialize for ConversationId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_display_string())
    }
}

/// String form of an optional conversation id.
pub fn display_string(id: Option<&ConversationId>) -> Option<String> {
    id.map(ConversationId::to_display_string)
}

impl Capability {
    /// Starts a new conversation.
    ///
    /// `Ok(None)` when the capability is unavailable or the KIE API declined
    /// to build an id from these inputs.
    pub fn from(
        &self,
        kie_server_id: &str,
        container_id: &str,
        release_id: &ReleaseId,
    ) -> Result<Option<ConversationId>, CallError> {
        let Some(bindings) = &self.bindings else {
            return Ok(None);
        };
        let native = (bindings.from)(kie_server_id, container_id, release_id)
            .map_err(|e| CallError::new(Operation::From, e))?;
        Ok(native.map(ConversationId::new))
    }

    /// Parses a conversation id from its string form.
    pub fn from_string(&self, text: &str) -> Result<Option<ConversationId>, CallError> {
        let Some(bindings) = &self.bindings else {
            return Ok(None);
        };
        let native =
            (bindings.from_string)(text).map_err(|e| CallError::new(Operation::FromString, e))?;
        Ok(native.map(ConversationId::new))
    }

    pub fn kie_server_id(&self, id: &ConversationId) -> Result<Option<String>, CallError> {
        self.read(Operation::KieServerId, id, |b| &b.kie_server_id)
    }

    pub fn container_id(&self, id: &ConversationId) -> Result<Option<String>, CallError> {
        self.read(Operation::ContainerId, id, |b| &b.container_id)
    }

    pub fn release_id(&self, id: &ConversationId) -> Result<Option<ReleaseId>, CallError> {
        self.read(Operation::ReleaseId, id, |b| &b.release_id)
    }

    pub fn unique_string(&self, id: &ConversationId) -> Result<Option<String>, CallError> {
        self.read(Operation::UniqueString, id, |b| &b.unique_string)
    }

    fn read<T>(
        &self,
        operation: Operation,
        id: &ConversationId,
        accessor: impl FnOnce(&Bindings) -> &Accessor<T>,
    ) -> Result<Option<T>, CallError> {
        let Some(bindings) = &self.bindings else {
            return Ok(None);
        };
        accessor(bindings.as_ref())(id.native()).map_err(|e| CallError::new(operation, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_string_of_none() {
        assert_eq!(display_string(None), None);
    }

    #[test]
    fn test_unavailable_returns_nothing() {
        let capability = Capability::unavailable();
        let release = ReleaseId::new("g", "a", "1");
        assert!(capability.from("s", "c", &release).unwrap().is_none());
        assert!(capability.from_string("'s':'c':'g:a:1':'u'").unwrap().is_none());
    }
}
