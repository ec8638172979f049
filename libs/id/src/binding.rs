//! One-time binding of the conversation id capability.

use std::fmt;
use std::sync::Arc;

use kie_api::ReleaseId;
use tracing::{debug, warn};

use crate::gate::{supports, VersionGate, VersionSource};
use crate::surface::{
    Accessor, BindingSurface, ConstructFn, ParseFn, CONVERSATION_ID_TYPE,
};
use crate::{BindError, Config, Operation};

/// Header name used when the server cannot provide its own constant.
pub const DEFAULT_CONVERSATION_ID_HEADER: &str = "X-KIE-ConversationId";

/// The complete set of bound handles. Never exists partially.
pub(crate) struct Bindings {
    pub(crate) from: ConstructFn,
    pub(crate) from_string: ParseFn,
    pub(crate) kie_server_id: Accessor<String>,
    pub(crate) container_id: Accessor<String>,
    pub(crate) release_id: Accessor<ReleaseId>,
    pub(crate) unique_string: Accessor<String>,
}

impl Bindings {
    /// Resolves the header constant, the type and every operation, in that
    /// order, stopping at the first failure.
    fn resolve(surface: &dyn BindingSurface) -> Result<(String, Self), BindError> {
        let header_name = surface.header_constant()?;
        surface.locate_type(CONVERSATION_ID_TYPE)?;

        let bindings = Self {
            from: surface.resolve_from()?,
            from_string: surface.resolve_from_string()?,
            kie_server_id: surface.resolve_text(Operation::KieServerId)?,
            container_id: surface.resolve_text(Operation::ContainerId)?,
            release_id: surface.resolve_release_id()?,
            unique_string: surface.resolve_text(Operation::UniqueString)?,
        };
        Ok((header_name, bindings))
    }
}

/// The bound (or degraded) conversation id capability.
///
/// Built once and immutable afterwards. Clones share the same handles, so a
/// `Capability` can be handed to every call site that needs it.
#[derive(Clone)]
pub struct Capability {
    pub(crate) bindings: Option<Arc<Bindings>>,
    header_name: Arc<str>,
}

impl Capability {
    /// Binds against `surface` if `gate` admits the running server version.
    pub fn bind<S: VersionSource>(gate: &VersionGate<S>, surface: &dyn BindingSurface) -> Self {
        Self::bind_with_config(gate, surface, &Config::default())
    }

    /// Like [`Capability::bind`], falling back to `config`'s header name.
    pub fn bind_with_config<S: VersionSource>(
        gate: &VersionGate<S>,
        surface: &dyn BindingSurface,
        config: &Config,
    ) -> Self {
        let version = gate.version();
        if !supports(&version) {
            debug!(%version, "server version predates conversation ids");
            return Self::unavailable_with_header(&config.header_fallback);
        }

        match Bindings::resolve(surface) {
            Ok((header_name, bindings)) => {
                debug!(%version, header = %header_name, "conversation id capability bound");
                Self {
                    bindings: Some(Arc::new(bindings)),
                    header_name: header_name.into(),
                }
            }
            Err(e) => {
                warn!(error = %e, %version, "conversation id capability unavailable");
                Self::unavailable_with_header(&config.header_fallback)
            }
        }
    }

    /// The degraded capability: every operation yields nothing.
    pub fn unavailable() -> Self {
        Self::unavailable_with_header(DEFAULT_CONVERSATION_ID_HEADER)
    }

    fn unavailable_with_header(header_name: &str) -> Self {
        Self {
            bindings: None,
            header_name: header_name.into(),
        }
    }

    /// Whether binding succeeded.
    pub fn is_available(&self) -> bool {
        self.bindings.is_some()
    }

    /// Name of the HTTP header carrying conversation ids. Always present.
    pub fn header_name(&self) -> &str {
        &self.header_name
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capability")
            .field("available", &self.is_available())
            .field("header_name", &self.header_name)
            .finish()
    }
}
