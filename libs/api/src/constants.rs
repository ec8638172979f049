//! Well-known KIE server constants.

pub const KIE_SERVER_ID: &str = "org.kie.server.id";
pub const KIE_SERVER_LOCATION: &str = "org.kie.server.location";
pub const KIE_CONTENT_TYPE_HEADER: &str = "X-KIE-ContentType";
pub const KIE_CLASS_TYPE_HEADER: &str = "X-KIE-ClassType";

/// Header carrying the conversation id between client and server (6.4+).
#[cfg(feature = "conversation-id")]
pub const KIE_CONVERSATION_ID_TYPE_HEADER: &str = "X-KIE-ConversationId";
