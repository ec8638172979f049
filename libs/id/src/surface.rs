//! The lookup surface the capability is bound against.
//!
//! A [`BindingSurface`] hands out one typed handle per operation. The handles
//! close over the KIE API and operate on [`NativeRef`] values whose concrete
//! type only the surface knows. [`NativeSurface`] binds the real `kie_api`
//! when built with the `kie-6-4` feature; without it every lookup fails and
//! the capability stays unavailable.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use kie_api::ReleaseId;

use crate::{BindError, BoxError, Operation};

/// Name under which the conversation id type is looked up.
pub const CONVERSATION_ID_TYPE: &str = "kie_api::ConversationId";

/// Name under which the header constant is looked up.
pub const CONVERSATION_ID_HEADER_CONSTANT: &str =
    "kie_api::constants::KIE_CONVERSATION_ID_TYPE_HEADER";

/// A conversation id value owned by the KIE API.
pub trait NativeConversationId: fmt::Display + fmt::Debug + Send + Sync + 'static {
    /// Used by the surface to recover its concrete type.
    fn as_any(&self) -> &dyn Any;
}

/// Shared handle to a native conversation id.
pub type NativeRef = Arc<dyn NativeConversationId>;

/// Bound `from(kie_server_id, container_id, release_id)`.
pub type ConstructFn =
    Arc<dyn Fn(&str, &str, &ReleaseId) -> Result<Option<NativeRef>, BoxError> + Send + Sync>;

/// Bound `from_string(text)`.
pub type ParseFn = Arc<dyn Fn(&str) -> Result<Option<NativeRef>, BoxError> + Send + Sync>;

/// Bound field accessor on a native conversation id.
pub type Accessor<T> =
    Arc<dyn Fn(&dyn NativeConversationId) -> Result<Option<T>, BoxError> + Send + Sync>;

/// The dependency's lookup surface, one fallible step per binding input.
pub trait BindingSurface {
    /// Reads the conversation id header constant.
    fn header_constant(&self) -> Result<String, BindError>;

    /// Checks that the conversation id type `type_name` exists.
    fn locate_type(&self, type_name: &'static str) -> Result<(), BindError>;

    fn resolve_from(&self) -> Result<ConstructFn, BindError>;

    fn resolve_from_string(&self) -> Result<ParseFn, BindError>;

    /// Resolves one of the string-valued accessors.
    fn resolve_text(&self, operation: Operation) -> Result<Accessor<String>, BindError>;

    fn resolve_release_id(&self) -> Result<Accessor<ReleaseId>, BindError>;
}

/// Binds against the `kie_api` crate linked into this build.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeSurface;

#[cfg(feature = "kie-6-4")]
mod native {
    use std::any::Any;
    use std::sync::Arc;

    use kie_api::{constants, ConversationId, ReleaseId};

    use super::*;

    impl NativeConversationId for ConversationId {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn downcast(value: &dyn NativeConversationId) -> Result<&ConversationId, BoxError> {
        value
            .as_any()
            .downcast_ref::<ConversationId>()
            .ok_or_else(|| format!("{value} is not a {CONVERSATION_ID_TYPE}").into())
    }

    fn wrap(id: ConversationId) -> NativeRef {
        Arc::new(id)
    }

    impl BindingSurface for NativeSurface {
        fn header_constant(&self) -> Result<String, BindError> {
            Ok(constants::KIE_CONVERSATION_ID_TYPE_HEADER.to_string())
        }

        fn locate_type(&self, type_name: &'static str) -> Result<(), BindError> {
            if type_name == CONVERSATION_ID_TYPE {
                Ok(())
            } else {
                Err(BindError::MissingType(type_name))
            }
        }

        fn resolve_from(&self) -> Result<ConstructFn, BindError> {
            Ok(Arc::new(
                |kie_server_id: &str,
                 container_id: &str,
                 release_id: &ReleaseId|
                 -> Result<Option<NativeRef>, BoxError> {
                    let id = ConversationId::from(kie_server_id, container_id, release_id);
                    Ok(id.map(wrap))
                },
            ))
        }

        fn resolve_from_string(&self) -> Result<ParseFn, BindError> {
            Ok(Arc::new(
                |text: &str| -> Result<Option<NativeRef>, BoxError> {
                    Ok(ConversationId::from_string(text)?.map(wrap))
                },
            ))
        }

        fn resolve_text(&self, operation: Operation) -> Result<Accessor<String>, BindError> {
            let read: fn(&ConversationId) -> &str = match operation {
                Operation::KieServerId => ConversationId::kie_server_id,
                Operation::ContainerId => ConversationId::container_id,
                Operation::UniqueString => ConversationId::unique_string,
                other => {
                    return Err(BindError::SignatureMismatch {
                        operation: other,
                        expected: "fn(&ConversationId) -> &str",
                    })
                }
            };
            Ok(Arc::new(
                move |value: &dyn NativeConversationId| -> Result<Option<String>, BoxError> {
                    Ok(Some(read(downcast(value)?).to_string()))
                },
            ))
        }

        fn resolve_release_id(&self) -> Result<Accessor<ReleaseId>, BindError> {
            Ok(Arc::new(
                |value: &dyn NativeConversationId| -> Result<Option<ReleaseId>, BoxError> {
                    Ok(Some(downcast(value)?.release_id().clone()))
                },
            ))
        }
    }
}

#[cfg(not(feature = "kie-6-4"))]
impl BindingSurface for NativeSurface {
    fn header_constant(&self) -> Result<String, BindError> {
        Err(BindError::MissingConstant(CONVERSATION_ID_HEADER_CONSTANT))
    }

    fn locate_type(&self, type_name: &'static str) -> Result<(), BindError> {
        Err(BindError::MissingType(type_name))
    }

    fn resolve_from(&self) -> Result<ConstructFn, BindError> {
        Err(missing(Operation::From))
    }

    fn resolve_from_string(&self) -> Result<ParseFn, BindError> {
        Err(missing(Operation::FromString))
    }

    fn resolve_text(&self, operation: Operation) -> Result<Accessor<String>, BindError> {
        Err(missing(operation))
    }

    fn resolve_release_id(&self) -> Result<Accessor<ReleaseId>, BindError> {
        Err(missing(Operation::ReleaseId))
    }
}

#[cfg(not(feature = "kie-6-4"))]
fn missing(operation: Operation) -> BindError {
    BindError::MissingOperation {
        type_name: CONVERSATION_ID_TYPE,
        operation,
    }
}

#[cfg(all(test, feature = "kie-6-4"))]
mod tests {
    use super::*;

    #[test]
    fn test_native_surface_resolves_everything() {
        let surface = NativeSurface;
        assert_eq!(surface.header_constant().unwrap(), "X-KIE-ConversationId");
        surface.locate_type(CONVERSATION_ID_TYPE).unwrap();
        assert!(surface.resolve_from().is_ok());
        assert!(surface.resolve_from_string().is_ok());
        assert!(surface.resolve_release_id().is_ok());
        for op in [
            Operation::KieServerId,
            Operation::ContainerId,
            Operation::UniqueString,
        ] {
            assert!(surface.resolve_text(op).is_ok(), "{op} should resolve");
        }
    }

    #[test]
    fn test_text_accessor_rejects_wrong_operation() {
        let err = NativeSurface.resolve_text(Operation::ReleaseId).err().unwrap();
        assert!(matches!(err, BindError::SignatureMismatch { .. }));
    }

    #[test]
    fn test_accessor_rejects_foreign_value() {
        #[derive(Debug)]
        struct Foreign;

        impl fmt::Display for Foreign {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("foreign")
            }
        }

        impl NativeConversationId for Foreign {
            fn as_any(&self) -> &dyn Any {
                self
            }
        }

        let read = NativeSurface.resolve_text(Operation::KieServerId).unwrap();
        assert!(read(&Foreign).is_err());
    }
}
