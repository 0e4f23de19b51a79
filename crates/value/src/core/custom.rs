//! Collaborator-defined variants
//!
//! Composite and event modules build their own values (structs, resources,
//! events) on the same envelope convention. They implement [`CustomValue`],
//! wrap instances in [`Value::Custom`](crate::Value::Custom), and register a
//! decoder for their tag through
//! [`RegistryBuilder::register`](crate::registry::RegistryBuilder::register).

use std::fmt;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::error::CodecResult;

/// Behaviour every collaborator-defined variant provides
pub trait CustomValue: fmt::Debug + Send + Sync {
    /// Wire type tag, unique across the registry
    fn type_tag(&self) -> &str;

    /// Human-readable form
    fn to_display_string(&self) -> CodecResult<String>;

    /// Payload placed under the envelope's `value` key; `None` omits the key
    fn encode_payload(&self) -> CodecResult<Option<JsonValue>>;
}

/// Shared handle to a [`CustomValue`]
///
/// Two handles are equal when they point at the same value, or when their
/// tags match and both encode to the same payload.
#[derive(Clone)]
pub struct Custom(Arc<dyn CustomValue>);

impl Custom {
    pub fn new(value: impl CustomValue + 'static) -> Self {
        Self(Arc::new(value))
    }

    pub fn inner(&self) -> &dyn CustomValue {
        self.0.as_ref()
    }
}

impl From<Arc<dyn CustomValue>> for Custom {
    fn from(value: Arc<dyn CustomValue>) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Custom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl PartialEq for Custom {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.0, &other.0) {
            return true;
        }
        if self.0.type_tag() != other.0.type_tag() {
            return false;
        }
        match (self.0.encode_payload(), other.0.encode_payload()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}
