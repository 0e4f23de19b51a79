//! Flow account address
//!
//! An address is exactly eight bytes. On the wire it is `"0x"` followed by
//! sixteen lowercase hex digits.

use std::fmt;
use std::str::FromStr;

use crate::core::tag;
use crate::error::{CodecError, CodecResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address([u8; Address::LENGTH]);

impl Address {
    /// Byte length of an address
    pub const LENGTH: usize = 8;

    pub const ZERO: Self = Self([0; Self::LENGTH]);

    pub const fn from_bytes(bytes: [u8; Self::LENGTH]) -> Self {
        Self(bytes)
    }

    /// Build from up to eight bytes, left-padding with zeros
    pub fn from_slice(bytes: &[u8]) -> CodecResult<Self> {
        if bytes.len() > Self::LENGTH {
            return Err(CodecError::malformed(
                tag::ADDRESS,
                format!("{} bytes exceeds {}", bytes.len(), Self::LENGTH),
            ));
        }
        let mut out = [0u8; Self::LENGTH];
        out[Self::LENGTH - bytes.len()..].copy_from_slice(bytes);
        Ok(Self(out))
    }

    /// Parse hex text, with or without the `0x` prefix
    pub fn from_hex(text: &str) -> CodecResult<Self> {
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        let bytes = if digits.len() % 2 == 1 {
            hex::decode(format!("0{digits}"))
        } else {
            hex::decode(digits)
        }
        .map_err(|e| CodecError::malformed(tag::ADDRESS, format!("'{text}': {e}")))?;
        Self::from_slice(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; Self::LENGTH] {
        &self.0
    }

    /// Hex text without prefix
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl FromStr for Address {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; Address::LENGTH]> for Address {
    fn from(bytes: [u8; Address::LENGTH]) -> Self {
        Self(bytes)
    }
}
