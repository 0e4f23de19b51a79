//! Decode limits for untrusted node responses
//!
//! Inbound envelopes can nest arbitrarily deep; these limits bound the
//! recursion and the size of container payloads before any element is decoded.

use crate::error::{CodecError, CodecResult};

/// Configurable limits applied by the [`Decoder`](crate::decode::Decoder)
///
/// # Example
///
/// ```
/// use cadence_value::DecodeLimits;
///
/// let limits = DecodeLimits::default();
/// assert_eq!(limits.max_nesting_depth, 128);
///
/// let strict = DecodeLimits::strict();
/// assert_eq!(strict.max_array_length, 10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Maximum depth of nested envelopes, the outermost envelope counts as 1
    pub max_nesting_depth: usize,

    /// Maximum number of elements in an `Array` payload
    pub max_array_length: usize,

    /// Maximum number of entries in a `Dictionary` payload
    pub max_dictionary_entries: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_nesting_depth: 128,
            max_array_length: 1_000_000,
            max_dictionary_entries: 100_000,
        }
    }
}

impl DecodeLimits {
    /// Permissive limits for trusted nodes
    pub fn permissive() -> Self {
        Self {
            max_nesting_depth: 512,
            max_array_length: 10_000_000,
            max_dictionary_entries: 1_000_000,
        }
    }

    /// Strict limits for untrusted input
    pub fn strict() -> Self {
        Self {
            max_nesting_depth: 32,
            max_array_length: 10_000,
            max_dictionary_entries: 1_000,
        }
    }

    /// No limits (use with caution!)
    pub const fn unlimited() -> Self {
        Self {
            max_nesting_depth: usize::MAX,
            max_array_length: usize::MAX,
            max_dictionary_entries: usize::MAX,
        }
    }

    /// Validate nesting depth
    #[inline]
    pub fn check_depth(&self, depth: usize) -> CodecResult<()> {
        if depth > self.max_nesting_depth {
            Err(CodecError::limit_exceeded(
                "Nesting depth",
                self.max_nesting_depth,
                depth,
            ))
        } else {
            Ok(())
        }
    }

    /// Validate array length
    #[inline]
    pub fn check_array_length(&self, len: usize) -> CodecResult<()> {
        if len > self.max_array_length {
            Err(CodecError::limit_exceeded(
                "Array length",
                self.max_array_length,
                len,
            ))
        } else {
            Ok(())
        }
    }

    /// Validate dictionary entry count
    #[inline]
    pub fn check_dictionary_entries(&self, count: usize) -> CodecResult<()> {
        if count > self.max_dictionary_entries {
            Err(CodecError::limit_exceeded(
                "Dictionary entries",
                self.max_dictionary_entries,
                count,
            ))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_ordered() {
        let strict = DecodeLimits::strict();
        let default = DecodeLimits::default();
        let permissive = DecodeLimits::permissive();

        assert!(strict.max_nesting_depth < default.max_nesting_depth);
        assert!(default.max_nesting_depth < permissive.max_nesting_depth);
        assert!(strict.max_array_length < default.max_array_length);
        assert!(default.max_dictionary_entries < permissive.max_dictionary_entries);
    }

    #[test]
    fn test_checks() {
        let limits = DecodeLimits::strict();
        assert!(limits.check_depth(32).is_ok());
        assert!(limits.check_depth(33).is_err());
        assert!(limits.check_array_length(10_000).is_ok());
        assert!(limits.check_dictionary_entries(1_001).is_err());
        assert!(DecodeLimits::unlimited().check_depth(usize::MAX).is_ok());
    }
}
