//! Conversation ids, available from KIE server 6.4.
//!
//! A conversation id pins a client conversation to one server, container and
//! release. Its wire form quotes each field and joins them with `:`:
//!
//! ```text
//! 'server1':'container1':'org.kie:project1:1.0':'8f3c0b7e-...'
//! ```
//!
//! The release id is itself colon-separated, which is why every field is
//! quoted and fields are split on `':'` rather than on `:`. Fields may not be
//! empty or contain a quote, so every id built by [`ConversationId::from`]
//! parses back with [`ConversationId::from_string`].

use std::fmt;

use uuid::Uuid;

use crate::{ApiError, ReleaseId};

const QUOTE: char = '\'';
const FIELD_SEPARATOR: &str = "':'";

/// Identifies a conversation between a client and one KIE server container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConversationId {
    kie_server_id: String,
    container_id: String,
    release_id: ReleaseId,
    unique_string: String,
}

impl ConversationId {
    /// Starts a new conversation with a fresh unique string.
    ///
    /// Returns `None` when the inputs cannot be carried by the wire form: an
    /// empty field, a quote in any field, or a release id that does not parse
    /// back to itself.
    pub fn from(
        kie_server_id: &str,
        container_id: &str,
        release_id: &ReleaseId,
    ) -> Option<Self> {
        let release = release_id.to_string();
        if ![kie_server_id, container_id, release.as_str()]
            .into_iter()
            .all(is_encodable)
        {
            return None;
        }
        if ReleaseId::parse(&release).ok().as_ref() != Some(release_id) {
            return None;
        }

        Some(Self {
            kie_server_id: kie_server_id.to_string(),
            container_id: container_id.to_string(),
            release_id: release_id.clone(),
            unique_string: Uuid::new_v4().to_string(),
        })
    }

    /// Parses the wire form produced by `Display`.
    ///
    /// Blank input carries no conversation and yields `Ok(None)`.
    pub fn from_string(s: &str) -> Result<Option<Self>, ApiError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let invalid = |message: &str| ApiError::InvalidConversationId {
            input: s.to_string(),
            message: message.to_string(),
        };

        let inner = trimmed
            .strip_prefix(QUOTE)
            .and_then(|rest| rest.strip_suffix(QUOTE))
            .ok_or_else(|| invalid("fields must be quoted"))?;

        let fields: Vec<&str> = inner.split(FIELD_SEPARATOR).collect();
        let [kie_server_id, container_id, release_id, unique_string] = fields.as_slice() else {
            return Err(invalid("expected 4 fields"));
        };

        if kie_server_id.is_empty() || container_id.is_empty() || unique_string.is_empty() {
            return Err(invalid("fields cannot be empty"));
        }

        let release_id = ReleaseId::parse(release_id).map_err(|e| invalid(&e.to_string()))?;

        Ok(Some(Self {
            kie_server_id: kie_server_id.to_string(),
            container_id: container_id.to_string(),
            release_id,
            unique_string: unique_string.to_string(),
        }))
    }

    pub fn kie_server_id(&self) -> &str {
        &self.kie_server_id
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn release_id(&self) -> &ReleaseId {
        &self.release_id
    }

    /// The random part distinguishing conversations on the same container.
    pub fn unique_string(&self) -> &str {
        &self.unique_string
    }
}

fn is_encodable(field: &str) -> bool {
    !field.is_empty() && !field.contains(QUOTE)
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}':'{}':'{}':'{}'",
            self.kie_server_id, self.container_id, self.release_id, self.unique_string
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release() -> ReleaseId {
        ReleaseId::new("org.kie.example", "project1", "1.0")
    }

    #[test]
    fn test_wire_roundtrip() {
        let id = ConversationId::from("server1", "container1", &release()).unwrap();
        let s = id.to_string();
        assert!(s.starts_with("'server1':'container1':'org.kie.example:project1:1.0':'"));
        let parsed = ConversationId::from_string(&s).unwrap().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_unique_strings_differ() {
        let a = ConversationId::from("server1", "container1", &release()).unwrap();
        let b = ConversationId::from("server1", "container1", &release()).unwrap();
        assert_ne!(a.unique_string(), b.unique_string());
    }

    #[test]
    fn test_unencodable_inputs_are_none() {
        assert!(ConversationId::from("", "container1", &release()).is_none());
        assert!(ConversationId::from("server1", "", &release()).is_none());
        assert!(ConversationId::from("srv':'x", "container1", &release()).is_none());
        assert!(ConversationId::from("server1", "it's", &release()).is_none());

        for release_id in [
            ReleaseId::new("g", "a", ""),
            ReleaseId::new("g", "a:b", "1"),
            ReleaseId::new("g", "a'", "1"),
        ] {
            assert!(
                ConversationId::from("server1", "container1", &release_id).is_none(),
                "{release_id} should be rejected"
            );
        }
    }

    #[test]
    fn test_whitespace_fields_roundtrip() {
        let id = ConversationId::from(" server1 ", "container 1", &release()).unwrap();
        let parsed = ConversationId::from_string(&id.to_string()).unwrap().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_blank_input_is_none() {
        assert_eq!(ConversationId::from_string("").unwrap(), None);
        assert_eq!(ConversationId::from_string("   ").unwrap(), None);
    }

    #[test]
    fn test_malformed_input() {
        for input in [
            "server1:container1",
            "'server1':'container1'",
            "'server1':'container1':'not-a-release':'abc'",
            "'':'container1':'g:a:v':'abc'",
        ] {
            let err = ConversationId::from_string(input).unwrap_err();
            assert!(err.is_conversation_id_error(), "{input} should be rejected");
        }
    }
}
