//! Server version gate for the conversation id capability.

use kie_api::{KieServerEnvironment, Version};

/// Lowest major version exporting conversation ids.
pub const MINIMUM_MAJOR: u32 = 6;

/// Lowest minor version exporting conversation ids.
pub const MINIMUM_MINOR: u32 = 4;

/// Something that can report the running server version.
pub trait VersionSource {
    fn version(&self) -> Version;
}

impl VersionSource for KieServerEnvironment {
    fn version(&self) -> Version {
        KieServerEnvironment::version(self)
    }
}

impl VersionSource for Version {
    fn version(&self) -> Version {
        self.clone()
    }
}

/// Answers whether the running server can provide conversation ids.
#[derive(Debug, Clone, Default)]
pub struct VersionGate<S = KieServerEnvironment> {
    source: S,
}

impl<S: VersionSource> VersionGate<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The version currently reported by the source.
    pub fn version(&self) -> Version {
        self.source.version()
    }

    /// Reads the version now and applies the threshold.
    pub fn is_capability_available(&self) -> bool {
        supports(&self.version())
    }
}

/// True iff `major >= 6` and `minor >= 4`.
///
/// Both components are compared independently, so `7.0` does not qualify.
pub fn supports(version: &Version) -> bool {
    version.major() >= MINIMUM_MAJOR && version.minor() >= MINIMUM_MINOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(5, 9, false)]
    #[case(6, 3, false)]
    #[case(6, 4, true)]
    #[case(6, 5, true)]
    #[case(7, 0, false)]
    #[case(7, 4, true)]
    fn test_threshold(#[case] major: u32, #[case] minor: u32, #[case] expected: bool) {
        let gate = VersionGate::new(Version::new(major, minor, 0));
        assert_eq!(gate.is_capability_available(), expected);
    }

    #[test]
    fn test_qualifier_ignored() {
        let version = Version::new(6, 4, 0).with_qualifier("Beta1");
        assert!(VersionGate::new(version).is_capability_available());
    }

    #[test]
    fn test_environment_source() {
        let env = KieServerEnvironment::with_version(Version::new(6, 2, 0));
        assert!(!VersionGate::new(env).is_capability_available());
    }

    proptest! {
        #[test]
        fn prop_below_threshold_unavailable(major in 0u32..6, minor in 0u32..100) {
            prop_assert!(!supports(&Version::new(major, minor, 0)));
        }

        #[test]
        fn prop_minor_below_threshold_unavailable(major in 6u32..100, minor in 0u32..4) {
            prop_assert!(!supports(&Version::new(major, minor, 0)));
        }

        #[test]
        fn prop_at_or_above_threshold_available(major in 6u32..100, minor in 4u32..100, micro in 0u32..100) {
            prop_assert!(supports(&Version::new(major, minor, micro)));
        }
    }
}
