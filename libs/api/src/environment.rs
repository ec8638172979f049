//! The running server's environment.

use tracing::warn;

use crate::Version;

/// Environment variable carrying the running server version.
pub const KIE_SERVER_VERSION_ENV: &str = "KIE_SERVER_VERSION";

/// Reports which KIE server version the process runs against.
#[derive(Debug, Clone, Default)]
pub struct KieServerEnvironment {
    version: Option<Version>,
}

impl KieServerEnvironment {
    /// An environment that resolves the version lazily from the process.
    pub fn from_env() -> Self {
        Self::default()
    }

    /// An environment pinned to `version`.
    pub fn with_version(version: Version) -> Self {
        Self {
            version: Some(version),
        }
    }

    /// Returns the running server version.
    ///
    /// A pinned version wins, then `KIE_SERVER_VERSION`, then the version this
    /// API build declares. An unparsable variable falls through to the
    /// declared version.
    pub fn version(&self) -> Version {
        if let Some(version) = &self.version {
            return version.clone();
        }

        match std::env::var(KIE_SERVER_VERSION_ENV) {
            Ok(raw) => match Version::parse(&raw) {
                Ok(version) => version,
                Err(e) => {
                    warn!(error = %e, value = %raw, "ignoring unparsable KIE_SERVER_VERSION");
                    Version::api()
                }
            },
            Err(_) => Version::api(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_version_wins() {
        let env = KieServerEnvironment::with_version(Version::new(7, 1, 0));
        assert_eq!(env.version(), Version::new(7, 1, 0));
    }
}
