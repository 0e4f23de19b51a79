//! JSON-Cadence value model and wire codec
//!
//! Every value travels as a `{ "type": <tag>, "value": <payload> }` envelope.
//! [`Value`] models the variants, [`encode`] turns them into envelopes and
//! [`decode`] rebuilds them through a [`TypeRegistry`] of per-tag decoders.
//!
//! ```
//! use cadence_value::{Value, from_json_str, to_json_string};
//!
//! let value = Value::dictionary([(Value::string("amount"), Value::ufix64(150_000_000))]);
//! let text = to_json_string(&value).unwrap();
//! assert_eq!(
//!     text,
//!     r#"{"type":"Dictionary","value":[{"key":{"type":"String","value":"amount"},"value":{"type":"UFix64","value":"1.50000000"}}]}"#
//! );
//!
//! // UFix64 comes back as a Fix64 carrying the same scaled integer
//! let back = from_json_str(&text).unwrap();
//! assert_eq!(back.to_display_string().unwrap(), "{{amount:1.50000000}}");
//! ```
#![allow(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(clippy::all)]

pub mod collections;
pub mod core;
pub mod decode;
pub mod encode;
pub mod error;
pub mod registry;
pub mod scalar;

// Re-export core types
pub use crate::core::{Custom, CustomValue, DecodeLimits, Value, tag};
pub use error::{CodecError, CodecResult};

// Re-export scalar and collection types
pub use collections::{Dictionary, KeyValuePair};
pub use scalar::{Address, Fix64, IntKind, Integer, UFix64, Word, WordKind, fixed};

// Codec entry points
pub use decode::{DecodeContext, Decoder, Envelope, decode_envelope, from_json_str};
pub use encode::{encode_arguments, encode_arguments_bytes, encode_envelope, to_json_string};
pub use registry::{DecodeFn, RegistryBuilder, TypeRegistry};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{CodecError, CodecResult, CustomValue, DecodeLimits, Value};
    pub use crate::{Address, Dictionary, Fix64, IntKind, Integer, KeyValuePair, UFix64};
    pub use crate::{TypeRegistry, decode_envelope, encode_envelope, from_json_str, to_json_string};

    pub use serde_json::json;
}
