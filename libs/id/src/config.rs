//! Configuration for binding the conversation id capability.

use kie_api::{KieServerEnvironment, Version, KIE_SERVER_VERSION_ENV};
use tracing::warn;

use crate::DEFAULT_CONVERSATION_ID_HEADER;

/// Environment variable overriding the fallback header name.
pub const HEADER_FALLBACK_ENV: &str = "KIE_CONVERSATION_ID_HEADER_FALLBACK";

/// Conversation id configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Pinned server version, from `KIE_SERVER_VERSION`. `None` asks the
    /// server environment.
    pub server_version: Option<Version>,

    /// Header name reported while the capability is unavailable.
    pub header_fallback: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_version: None,
            header_fallback: DEFAULT_CONVERSATION_ID_HEADER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let header_fallback = lookup(HEADER_FALLBACK_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_CONVERSATION_ID_HEADER.to_string());

        let server_version =
            lookup(KIE_SERVER_VERSION_ENV).and_then(|raw| match Version::parse(&raw) {
                Ok(version) => Some(version),
                Err(e) => {
                    warn!(error = %e, value = %raw, "ignoring unparsable KIE_SERVER_VERSION");
                    None
                }
            });

        Self {
            server_version,
            header_fallback,
        }
    }

    #[must_use]
    pub fn with_server_version(mut self, version: Version) -> Self {
        self.server_version = Some(version);
        self
    }

    #[must_use]
    pub fn with_header_fallback(mut self, header: impl Into<String>) -> Self {
        self.header_fallback = header.into();
        self
    }

    /// The server environment the version gate should consult.
    pub fn environment(&self) -> KieServerEnvironment {
        match &self.server_version {
            Some(version) => KieServerEnvironment::with_version(version.clone()),
            None => KieServerEnvironment::from_env(),
        }
    }
}
