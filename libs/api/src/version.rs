//! KIE server version numbers.

use std::fmt;
use std::str::FromStr;

use crate::ApiError;

/// A KIE server version, `MAJOR.MINOR.MICRO[.QUALIFIER]`.
///
/// Qualifiers may also be attached with a dash (`7.0.0-SNAPSHOT`); the
/// separator is kept so the string form reads back as it was written. Missing
/// minor or micro components read as zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u32,
    minor: u32,
    micro: u32,
    qualifier: Option<String>,
    qualifier_separator: char,
}

impl Version {
    /// Creates a version without a qualifier.
    #[must_use]
    pub const fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
            qualifier: None,
            qualifier_separator: '.',
        }
    }

    /// Returns a copy of this version carrying `qualifier`.
    #[must_use]
    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    /// The version this build of the API declares for the running server.
    #[must_use]
    pub fn api() -> Self {
        #[cfg(feature = "conversation-id")]
        let version = Self::new(6, 4, 0);
        #[cfg(not(feature = "conversation-id"))]
        let version = Self::new(6, 3, 0);
        version.with_qualifier("Final")
    }

    #[must_use]
    pub const fn major(&self) -> u32 {
        self.major
    }

    #[must_use]
    pub const fn minor(&self) -> u32 {
        self.minor
    }

    #[must_use]
    pub const fn micro(&self) -> u32 {
        self.micro
    }

    #[must_use]
    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    /// Parses a version string such as `6.4.0.Final`.
    pub fn parse(s: &str) -> Result<Self, ApiError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ApiError::Empty { what: "version" });
        }

        let (numbers, dash_qualifier) = match s.split_once('-') {
            Some((numbers, qualifier)) => (numbers, Some(qualifier)),
            None => (s, None),
        };

        let mut parts = numbers.splitn(4, '.');
        let mut next_number = |required: bool| -> Result<u32, ApiError> {
            match parts.next() {
                Some(part) => part.parse().map_err(|_| ApiError::InvalidVersion {
                    input: s.to_string(),
                    component: part.to_string(),
                }),
                None if required => Err(ApiError::InvalidVersion {
                    input: s.to_string(),
                    component: String::new(),
                }),
                None => Ok(0),
            }
        };

        let major = next_number(true)?;
        let minor = next_number(false)?;
        let micro = next_number(false)?;
        let dot_qualifier = parts.next();

        let (qualifier, qualifier_separator) = match (dot_qualifier, dash_qualifier) {
            (Some(dot), Some(dash)) => (Some(format!("{dot}-{dash}")), '.'),
            (Some(q), None) => (Some(q.to_string()), '.'),
            (None, Some(q)) => (Some(q.to_string()), '-'),
            (None, None) => (None, '.'),
        };

        Ok(Self {
            major,
            minor,
            micro,
            qualifier: qualifier.filter(|q| !q.is_empty()),
            qualifier_separator,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if let Some(qualifier) = &self.qualifier {
            write!(f, "{}{qualifier}", self.qualifier_separator)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("6.4.0.Final", 6, 4, 0, Some("Final"))]
    #[case("6.3.0", 6, 3, 0, None)]
    #[case("7.0.0-SNAPSHOT", 7, 0, 0, Some("SNAPSHOT"))]
    #[case("6", 6, 0, 0, None)]
    #[case(" 6.5 ", 6, 5, 0, None)]
    #[case("6.4.1.Beta-redhat-1", 6, 4, 1, Some("Beta-redhat-1"))]
    fn test_parse(
        #[case] input: &str,
        #[case] major: u32,
        #[case] minor: u32,
        #[case] micro: u32,
        #[case] qualifier: Option<&str>,
    ) {
        let version = Version::parse(input).unwrap();
        assert_eq!(version.major(), major);
        assert_eq!(version.minor(), minor);
        assert_eq!(version.micro(), micro);
        assert_eq!(version.qualifier(), qualifier);
    }

    #[test]
    fn test_parse_empty() {
        let err = Version::parse("  ").unwrap_err();
        assert!(err.is_empty());
    }

    #[test]
    fn test_parse_non_numeric() {
        let err = Version::parse("six.four").unwrap_err();
        assert!(matches!(err, ApiError::InvalidVersion { .. }));
    }

    #[test]
    fn test_display() {
        assert_eq!(Version::new(6, 4, 0).to_string(), "6.4.0");
        assert_eq!(
            Version::new(6, 4, 0).with_qualifier("Final").to_string(),
            "6.4.0.Final"
        );
    }

    #[rstest]
    #[case("6.4.0.Final")]
    #[case("7.0.0-SNAPSHOT")]
    #[case("6.4.1.Beta-redhat-1")]
    #[case("6.3.0")]
    fn test_display_keeps_separator(#[case] input: &str) {
        let version = Version::parse(input).unwrap();
        assert_eq!(version.to_string(), input);
        let json = serde_json::to_string(&version).unwrap();
        let parsed: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, version);
        assert_eq!(parsed.to_string(), input);
    }

    #[test]
    fn test_json_roundtrip() {
        let version = Version::new(6, 5, 0).with_qualifier("Final");
        let json = serde_json::to_string(&version).unwrap();
        assert_eq!(json, "\"6.5.0.Final\"");
        let parsed: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(version, parsed);
    }

    #[cfg(feature = "conversation-id")]
    #[test]
    fn test_api_version_declares_conversation_support() {
        let version = Version::api();
        assert_eq!((version.major(), version.minor()), (6, 4));
    }

    #[cfg(not(feature = "conversation-id"))]
    #[test]
    fn test_api_version_predates_conversation_support() {
        let version = Version::api();
        assert_eq!((version.major(), version.minor()), (6, 3));
    }
}
