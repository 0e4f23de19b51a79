//! The JSON-Cadence value model
//!
//! One enum case per wire variant. Values are immutable after construction;
//! the encoder lives in [`crate::encode`], the decoder in [`crate::decode`].

use num_bigint::BigInt;

use crate::collections::{Dictionary, KeyValuePair};
use crate::core::custom::{Custom, CustomValue};
use crate::core::tag;
use crate::scalar::{Address, Fix64, IntKind, Integer, UFix64, Word, WordKind};

/// A Cadence runtime value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Empty payload; encodes without a `value` key
    #[default]
    Void,

    /// Present or absent nested value
    Optional(Option<Box<Value>>),

    Bool(bool),

    String(String),

    Address(Address),

    /// `Int`, `Int8`..`Int256`, `UInt`, `UInt8`..`UInt256`
    Integer(Integer),

    /// `Word8`..`Word64`; no wire codec
    Word(Word),

    Fix64(Fix64),

    UFix64(UFix64),

    /// Ordered sequence
    Array(Vec<Value>),

    /// Ordered key/value pairs
    Dictionary(Dictionary),

    // Declared by the type system but without a wire codec here.
    Contract,
    Link,
    Path,
    TypeValue,
    Capability,

    /// Collaborator-defined variant (composites, events)
    Custom(Custom),
}

impl Value {
    // ==================== Constructors ====================

    pub const fn void() -> Self {
        Self::Void
    }

    pub fn optional(value: Option<Value>) -> Self {
        Self::Optional(value.map(Box::new))
    }

    /// Present optional
    pub fn some(value: impl Into<Value>) -> Self {
        Self::Optional(Some(Box::new(value.into())))
    }

    /// Absent optional
    pub const fn none() -> Self {
        Self::Optional(None)
    }

    pub const fn bool(v: bool) -> Self {
        Self::Bool(v)
    }

    pub fn string(v: impl Into<String>) -> Self {
        Self::String(v.into())
    }

    pub const fn address(v: Address) -> Self {
        Self::Address(v)
    }

    /// Unbounded signed integer (`Int`)
    pub fn int(v: impl Into<BigInt>) -> Self {
        Self::Integer(Integer::new(IntKind::Int, v))
    }

    /// Unbounded unsigned integer (`UInt`)
    pub fn uint(v: impl Into<BigInt>) -> Self {
        Self::Integer(Integer::new(IntKind::UInt, v))
    }

    /// Integer of any declared kind
    pub fn integer(kind: IntKind, v: impl Into<BigInt>) -> Self {
        Self::Integer(Integer::new(kind, v))
    }

    pub fn word(kind: WordKind, v: impl Into<BigInt>) -> Self {
        Self::Word(Word::new(kind, v))
    }

    /// Signed fixed-point from its scaled integer (value × 10^8)
    pub fn fix64(scaled: impl Into<BigInt>) -> Self {
        Self::Fix64(Fix64::from_scaled(scaled))
    }

    /// Unsigned fixed-point from its scaled integer (value × 10^8)
    pub fn ufix64(scaled: impl Into<BigInt>) -> Self {
        Self::UFix64(UFix64::from_scaled(scaled))
    }

    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Self::Array(items.into_iter().collect())
    }

    pub fn dictionary(pairs: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Self::Dictionary(pairs.into_iter().collect())
    }

    pub fn custom(value: impl CustomValue + 'static) -> Self {
        Self::Custom(Custom::new(value))
    }

    // ==================== Type queries ====================

    /// Wire type tag of this value
    pub fn type_tag(&self) -> &str {
        match self {
            Self::Void => tag::VOID,
            Self::Optional(_) => tag::OPTIONAL,
            Self::Bool(_) => tag::BOOL,
            Self::String(_) => tag::STRING,
            Self::Address(_) => tag::ADDRESS,
            Self::Integer(i) => i.kind().tag(),
            Self::Word(w) => w.kind().tag(),
            Self::Fix64(_) => tag::FIX64,
            Self::UFix64(_) => tag::UFIX64,
            Self::Array(_) => tag::ARRAY,
            Self::Dictionary(_) => tag::DICTIONARY,
            Self::Contract => tag::CONTRACT,
            Self::Link => tag::LINK,
            Self::Path => tag::PATH,
            Self::TypeValue => tag::TYPE,
            Self::Capability => tag::CAPABILITY,
            Self::Custom(c) => c.inner().type_tag(),
        }
    }

    /// Whether this variant has a wire codec. Containers answer for
    /// themselves only, not for their elements.
    pub fn is_supported(&self) -> bool {
        !matches!(
            self,
            Self::Word(_)
                | Self::Contract
                | Self::Link
                | Self::Path
                | Self::TypeValue
                | Self::Capability
        )
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    #[inline]
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Optional(_) | Self::Array(_) | Self::Dictionary(_))
    }

    // ==================== Accessors ====================

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_address(&self) -> Option<&Address> {
        match self {
            Self::Address(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Self::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// Scaled integer of either fixed-point variant
    pub fn as_scaled(&self) -> Option<&BigInt> {
        match self {
            Self::Fix64(f) => Some(f.scaled()),
            Self::UFix64(f) => Some(f.scaled()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&Dictionary> {
        match self {
            Self::Dictionary(d) => Some(d),
            _ => None,
        }
    }

    /// Inner value of an `Optional`; `None` for absent or non-optional values
    pub fn as_optional(&self) -> Option<&Value> {
        match self {
            Self::Optional(inner) => inner.as_deref(),
            _ => None,
        }
    }

    pub fn as_custom(&self) -> Option<&dyn CustomValue> {
        match self {
            Self::Custom(c) => Some(c.inner()),
            _ => None,
        }
    }
}

// ==================== From ====================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Address> for Value {
    fn from(v: Address) -> Self {
        Self::Address(v)
    }
}

impl From<Integer> for Value {
    fn from(v: Integer) -> Self {
        Self::Integer(v)
    }
}

impl From<Fix64> for Value {
    fn from(v: Fix64) -> Self {
        Self::Fix64(v)
    }
}

impl From<UFix64> for Value {
    fn from(v: UFix64) -> Self {
        Self::UFix64(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Dictionary> for Value {
    fn from(v: Dictionary) -> Self {
        Self::Dictionary(v)
    }
}

impl From<Vec<KeyValuePair>> for Value {
    fn from(v: Vec<KeyValuePair>) -> Self {
        Self::Dictionary(Dictionary::new(v))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        Self::Optional(v.map(|inner| Box::new(inner.into())))
    }
}
