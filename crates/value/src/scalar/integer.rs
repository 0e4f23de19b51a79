//! Arbitrary precision integer variants
//!
//! `Int`, `Int8`..`Int256`, `UInt` and `UInt8`..`UInt256` all share one
//! representation: a [`BigInt`] plus the declared [`IntKind`]. The kind only
//! selects the wire tag. Width and signedness are never enforced, so
//! `UInt8` may hold `-1` or `300` and will encode them as given.
//!
//! `Word8`..`Word64` are declared with the same shape but have no wire codec.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use serde_json::Value as JsonValue;

use crate::core::tag;
use crate::error::{CodecError, CodecResult};

/// Declared width and signedness of an integer value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntKind {
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Int128,
    Int256,
    UInt,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    UInt128,
    UInt256,
}

impl IntKind {
    /// Every integer kind, in registration order
    pub const ALL: [Self; 14] = [
        Self::Int,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Int128,
        Self::Int256,
        Self::UInt,
        Self::UInt8,
        Self::UInt16,
        Self::UInt32,
        Self::UInt64,
        Self::UInt128,
        Self::UInt256,
    ];

    /// Wire type tag
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Int => tag::INT,
            Self::Int8 => tag::INT8,
            Self::Int16 => tag::INT16,
            Self::Int32 => tag::INT32,
            Self::Int64 => tag::INT64,
            Self::Int128 => tag::INT128,
            Self::Int256 => tag::INT256,
            Self::UInt => tag::UINT,
            Self::UInt8 => tag::UINT8,
            Self::UInt16 => tag::UINT16,
            Self::UInt32 => tag::UINT32,
            Self::UInt64 => tag::UINT64,
            Self::UInt128 => tag::UINT128,
            Self::UInt256 => tag::UINT256,
        }
    }

    /// Look up a kind by its wire tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Whether the declared type is signed
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Self::Int | Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64 | Self::Int128 | Self::Int256
        )
    }

    /// Declared bit width, `None` for the unbounded `Int` and `UInt`
    pub const fn bits(self) -> Option<u32> {
        match self {
            Self::Int | Self::UInt => None,
            Self::Int8 | Self::UInt8 => Some(8),
            Self::Int16 | Self::UInt16 => Some(16),
            Self::Int32 | Self::UInt32 => Some(32),
            Self::Int64 | Self::UInt64 => Some(64),
            Self::Int128 | Self::UInt128 => Some(128),
            Self::Int256 | Self::UInt256 => Some(256),
        }
    }
}

impl fmt::Display for IntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Integer value tagged with its declared kind
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Integer {
    kind: IntKind,
    value: BigInt,
}

impl Integer {
    pub fn new(kind: IntKind, value: impl Into<BigInt>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    #[inline]
    pub fn kind(&self) -> IntKind {
        self.kind
    }

    #[inline]
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    pub fn into_inner(self) -> BigInt {
        self.value
    }

    /// Parse decimal text for any kind. No range or sign check is applied.
    pub fn parse(kind: IntKind, text: &str) -> CodecResult<Self> {
        let value = parse_bigint(text)?;
        Ok(Self { kind, value })
    }

    /// Read a wire payload: decimal text, or a JSON integer of any size for
    /// lenient nodes.
    pub fn from_payload(kind: IntKind, payload: &JsonValue) -> CodecResult<Self> {
        match payload {
            JsonValue::String(text) => Self::parse(kind, text),
            // Numbers keep their source text, so any width parses exactly.
            JsonValue::Number(number) => Self::parse(kind, &number.to_string()),
            other => Err(CodecError::malformed(
                kind.tag(),
                format!("expected decimal text, got {other}"),
            )),
        }
    }

    /// Wire payload: decimal digits as JSON text
    pub fn to_payload(&self) -> JsonValue {
        JsonValue::String(self.value.to_string())
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

/// Declared width of a `Word*` value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordKind {
    Word8,
    Word16,
    Word32,
    Word64,
}

impl WordKind {
    pub const ALL: [Self; 4] = [Self::Word8, Self::Word16, Self::Word32, Self::Word64];

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Word8 => tag::WORD8,
            Self::Word16 => tag::WORD16,
            Self::Word32 => tag::WORD32,
            Self::Word64 => tag::WORD64,
        }
    }
}

/// `Word*` value. Constructible, but every codec operation on it fails with
/// [`CodecError::NotSupported`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    kind: WordKind,
    value: BigInt,
}

impl Word {
    pub fn new(kind: WordKind, value: impl Into<BigInt>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn kind(&self) -> WordKind {
        self.kind
    }

    pub fn value(&self) -> &BigInt {
        &self.value
    }
}

pub(crate) fn parse_bigint(text: &str) -> CodecResult<BigInt> {
    BigInt::from_str(text).map_err(|e| CodecError::numeric(text, e.to_string()))
}
