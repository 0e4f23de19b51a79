//! Codec error types
//!
//! Every encode/decode entry point returns [`CodecResult`]. Failures are
//! synchronous and never retried here; a container fails as a whole when any
//! nested element fails.

use thiserror::Error;

// ============================================================================
// MAIN ERROR TYPE
// ============================================================================

/// Errors raised while encoding or decoding JSON-Cadence values.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CodecError {
    /// The envelope's type tag is not present in the registry
    #[error("Unknown type tag: '{tag}'")]
    UnknownType { tag: String },

    /// Envelope keys are missing, or the payload has the wrong shape for its tag
    #[error("Malformed {tag} value: {reason}")]
    MalformedValue { tag: String, reason: String },

    /// The variant is declared but its wire codec is intentionally unimplemented
    #[error("Operation '{operation}' not supported for {tag}")]
    NotSupported {
        tag: String,
        operation: &'static str,
    },

    /// Integer or fixed-point text could not be parsed
    #[error("Invalid numeric literal '{input}': {reason}")]
    NumericParse { input: String, reason: String },

    /// A decoder was registered twice under the same tag
    #[error("Type tag '{tag}' is already registered")]
    DuplicateTag { tag: String },

    /// The process-wide registry was already installed or used
    #[error("Type registry is frozen; install it before the first decode")]
    RegistryFrozen,

    /// A decode limit was exceeded
    #[error("{limit} exceeded: {actual} > {max}")]
    LimitExceeded {
        limit: &'static str,
        max: usize,
        actual: usize,
    },

    /// Input text was not JSON at all
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type CodecResult<T> = Result<T, CodecError>;

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl CodecError {
    /// Create an unknown type error
    pub fn unknown_type(tag: impl Into<String>) -> Self {
        Self::UnknownType { tag: tag.into() }
    }

    /// Create a malformed value error
    pub fn malformed(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedValue {
            tag: tag.into(),
            reason: reason.into(),
        }
    }

    /// Create a not supported error
    pub fn not_supported(tag: impl Into<String>, operation: &'static str) -> Self {
        Self::NotSupported {
            tag: tag.into(),
            operation,
        }
    }

    /// Create a numeric parse error
    pub fn numeric(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::NumericParse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a duplicate tag error
    pub fn duplicate_tag(tag: impl Into<String>) -> Self {
        Self::DuplicateTag { tag: tag.into() }
    }

    /// Create a limit exceeded error
    pub fn limit_exceeded(limit: &'static str, max: usize, actual: usize) -> Self {
        Self::LimitExceeded { limit, max, actual }
    }

    // ==================== Classification ====================

    /// Tag was missing from the registry
    pub fn is_unknown_type(&self) -> bool {
        matches!(self, Self::UnknownType { .. })
    }

    /// Variant is intentionally unimplemented
    pub fn is_not_supported(&self) -> bool {
        matches!(self, Self::NotSupported { .. })
    }

    /// Envelope or payload shape was wrong
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedValue { .. } | Self::Json(_))
    }

    /// Numeric text failed to parse
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::NumericParse { .. })
    }
}
