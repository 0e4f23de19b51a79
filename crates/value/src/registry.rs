//! Type registry: wire tag → decoder
//!
//! A [`RegistryBuilder`] collects decoders, rejecting duplicate tags, and
//! [`build`](RegistryBuilder::build) freezes it into an immutable
//! [`TypeRegistry`]. The process-wide registry sits behind a `OnceLock`:
//! [`install`] may replace the built-in table exactly once, before the first
//! call to [`global`]; afterwards it is read-only and shared freely.

use std::sync::OnceLock;

use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::core::tag;
use crate::core::value::Value;
use crate::decode::{self, DecodeContext, Decoder, Envelope};
use crate::error::{CodecError, CodecResult};
use crate::scalar::{IntKind, WordKind};

/// Decode entry point for one tag: receives the envelope and a context for
/// decoding nested envelopes.
pub type DecodeFn = fn(&Envelope<'_>, &mut DecodeContext<'_>) -> CodecResult<Value>;

/// Mutable collection of decoders, frozen by [`build`](Self::build)
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    decoders: IndexMap<String, DecodeFn>,
}

impl RegistryBuilder {
    /// Empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-populated with every built-in tag
    pub fn with_builtins() -> Self {
        let mut builder = Self::new();
        builder.put(tag::VOID, decode::decode_void);
        builder.put(tag::OPTIONAL, decode::decode_optional);
        builder.put(tag::BOOL, decode::decode_bool);
        builder.put(tag::STRING, decode::decode_string);
        builder.put(tag::ADDRESS, decode::decode_address);
        for kind in IntKind::ALL {
            builder.put(kind.tag(), decode::decode_integer);
        }
        for kind in WordKind::ALL {
            builder.put(kind.tag(), decode::decode_unsupported);
        }
        builder.put(tag::FIX64, decode::decode_fix64);
        builder.put(tag::UFIX64, decode::decode_ufix64);
        builder.put(tag::ARRAY, decode::decode_array);
        builder.put(tag::DICTIONARY, decode::decode_dictionary);
        builder.put(tag::CONTRACT, decode::decode_unsupported);
        builder.put(tag::LINK, decode::decode_unsupported);
        builder.put(tag::PATH, decode::decode_unsupported);
        builder.put(tag::TYPE, decode::decode_unsupported);
        builder.put(tag::CAPABILITY, decode::decode_unsupported);
        builder
    }

    fn put(&mut self, tag: &'static str, decoder: DecodeFn) {
        let previous = self.decoders.insert(tag.to_owned(), decoder);
        debug_assert!(previous.is_none(), "built-in tag {tag} registered twice");
    }

    /// Add a decoder for `tag`.
    ///
    /// Fails with [`CodecError::DuplicateTag`] if the tag is already present.
    pub fn register(&mut self, tag: impl Into<String>, decoder: DecodeFn) -> CodecResult<&mut Self> {
        let tag = tag.into();
        if self.decoders.contains_key(&tag) {
            return Err(CodecError::duplicate_tag(tag));
        }
        self.decoders.insert(tag, decoder);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Freeze into an immutable registry
    pub fn build(self) -> TypeRegistry {
        debug!(tags = self.decoders.len(), "type registry built");
        TypeRegistry {
            decoders: self.decoders,
        }
    }
}

/// Immutable tag → decoder table
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    decoders: IndexMap<String, DecodeFn>,
}

impl TypeRegistry {
    /// Registry holding exactly the built-in tags
    pub fn builtin() -> Self {
        RegistryBuilder::with_builtins().build()
    }

    pub fn decoder_for(&self, tag: &str) -> Option<DecodeFn> {
        self.decoders.get(tag).copied()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.decoders.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Registered tags in registration order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.decoders.keys().map(String::as_str)
    }

    /// Decode one envelope with default limits
    pub fn decode_envelope(&self, json: &JsonValue) -> CodecResult<Value> {
        Decoder::new(self).decode(json)
    }
}

static GLOBAL: OnceLock<TypeRegistry> = OnceLock::new();

/// The process-wide registry, initialized with the built-ins on first use
pub fn global() -> &'static TypeRegistry {
    GLOBAL.get_or_init(TypeRegistry::builtin)
}

/// Install `registry` as the process-wide registry.
///
/// Must happen before anything calls [`global`]; fails with
/// [`CodecError::RegistryFrozen`] once the registry has been set or used.
pub fn install(registry: TypeRegistry) -> CodecResult<&'static TypeRegistry> {
    let tags = registry.len();
    GLOBAL.set(registry).map_err(|_| CodecError::RegistryFrozen)?;
    debug!(tags, "process-wide type registry installed");
    Ok(global())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builtins_cover_every_tag() {
        let registry = TypeRegistry::builtin();
        assert_eq!(registry.len(), 32);
        for tag in [
            "Void", "Optional", "Bool", "String", "Address", "Int", "Int8", "UInt256", "Word8",
            "Word64", "Fix64", "UFix64", "Array", "Dictionary", "Contract", "Link", "Path",
            "Type", "Capability",
        ] {
            assert!(registry.contains(tag), "missing {tag}");
        }
        assert_eq!(registry.tags().next(), Some("Void"));
    }

    #[test]
    fn test_duplicate_tag_rejected() {
        let mut builder = RegistryBuilder::with_builtins();
        let err = builder.register("Int", decode::decode_void).unwrap_err();
        assert!(matches!(err, CodecError::DuplicateTag { ref tag } if tag == "Int"));
    }

    #[test]
    fn test_register_new_tag() {
        let mut builder = RegistryBuilder::new();
        builder
            .register("Nothing", decode::decode_void)
            .unwrap()
            .register("Maybe", decode::decode_optional)
            .unwrap();
        let registry = builder.build();

        assert_eq!(registry.tags().collect::<Vec<_>>(), ["Nothing", "Maybe"]);
        assert_eq!(
            registry.decode_envelope(&json!({"type": "Nothing"})).unwrap(),
            Value::Void
        );
        assert!(
            registry
                .decode_envelope(&json!({"type": "Void"}))
                .unwrap_err()
                .is_unknown_type()
        );
    }

    #[test]
    fn test_global_is_builtin() {
        assert!(global().contains("Dictionary"));
    }
}
