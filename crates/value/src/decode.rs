//! Envelope decoder
//!
//! Decoding is one recursive hook: read `type`, look the tag up in a
//! [`TypeRegistry`], and hand the `value` payload to that tag's decoder.
//! Container decoders call back into [`DecodeContext::decode`] for every
//! nested envelope, so a single parsed JSON tree is rebuilt at any depth.

use serde::{Deserialize, Deserializer, de};
use serde_json::Value as JsonValue;
use tracing::{debug, trace};

use crate::collections::{Dictionary, KeyValuePair};
use crate::core::limits::DecodeLimits;
use crate::core::tag::{KEY_KEY, TYPE_KEY, VALUE_KEY};
use crate::core::value::Value;
use crate::error::{CodecError, CodecResult};
use crate::registry::{self, TypeRegistry};
use crate::scalar::{Address, Fix64, IntKind, Integer, fixed};

/// The envelope being decoded: its tag and raw payload
#[derive(Debug, Clone, Copy)]
pub struct Envelope<'a> {
    tag: &'a str,
    value: Option<&'a JsonValue>,
}

impl<'a> Envelope<'a> {
    pub fn new(tag: &'a str, value: Option<&'a JsonValue>) -> Self {
        Self { tag, value }
    }

    pub fn tag(&self) -> &'a str {
        self.tag
    }

    /// Payload, `None` when the envelope has no `value` key
    pub fn value(&self) -> Option<&'a JsonValue> {
        self.value
    }

    /// Payload that must be present (it may still be JSON `null`)
    pub fn payload(&self) -> CodecResult<&'a JsonValue> {
        self.value
            .ok_or_else(|| self.malformed(format!("missing '{VALUE_KEY}' key")))
    }

    /// Malformed-value error for this envelope's tag
    pub fn malformed(&self, reason: impl Into<String>) -> CodecError {
        CodecError::malformed(self.tag, reason)
    }
}

/// Per-call decode state handed to every [`DecodeFn`](crate::registry::DecodeFn)
#[derive(Debug)]
pub struct DecodeContext<'r> {
    registry: &'r TypeRegistry,
    limits: DecodeLimits,
    depth: usize,
}

impl<'r> DecodeContext<'r> {
    fn new(registry: &'r TypeRegistry, limits: DecodeLimits) -> Self {
        Self {
            registry,
            limits,
            depth: 0,
        }
    }

    pub fn registry(&self) -> &'r TypeRegistry {
        self.registry
    }

    pub fn limits(&self) -> &DecodeLimits {
        &self.limits
    }

    /// Envelopes currently open, including the one being decoded
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Decode one `{ "type": .., "value": .. }` envelope
    pub fn decode(&mut self, json: &JsonValue) -> CodecResult<Value> {
        let object = json
            .as_object()
            .ok_or_else(|| CodecError::malformed("envelope", format!("expected an object, got {json}")))?;
        let tag = object
            .get(TYPE_KEY)
            .ok_or_else(|| CodecError::malformed("envelope", format!("missing '{TYPE_KEY}' key")))?
            .as_str()
            .ok_or_else(|| CodecError::malformed("envelope", format!("'{TYPE_KEY}' must be text")))?;

        let Some(decoder) = self.registry.decoder_for(tag) else {
            debug!(tag, "unknown cadence type tag");
            return Err(CodecError::unknown_type(tag));
        };

        let depth = self.depth + 1;
        self.limits.check_depth(depth)?;
        self.depth = depth;
        trace!(tag, depth, "decoding envelope");

        let result = decoder(&Envelope::new(tag, object.get(VALUE_KEY)), self);
        self.depth -= 1;
        result
    }
}

/// Registry plus limits; reusable across calls
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'r> {
    registry: &'r TypeRegistry,
    limits: DecodeLimits,
}

impl<'r> Decoder<'r> {
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self {
            registry,
            limits: DecodeLimits::default(),
        }
    }

    #[must_use]
    pub fn with_limits(mut self, limits: DecodeLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn decode(&self, json: &JsonValue) -> CodecResult<Value> {
        DecodeContext::new(self.registry, self.limits).decode(json)
    }

    /// Parse JSON text and decode it.
    ///
    /// The parser's own recursion limit is lifted so that
    /// [`DecodeLimits::max_nesting_depth`] decides how deep envelopes may nest.
    /// Text nested deeper than [`JSON_LEVELS_PER_ENVELOPE`] JSON levels per
    /// allowed envelope is rejected before parsing.
    pub fn decode_str(&self, text: &str) -> CodecResult<Value> {
        let max = self
            .limits
            .max_nesting_depth
            .saturating_mul(JSON_LEVELS_PER_ENVELOPE);
        let depth = json_depth(text);
        if depth > max {
            return Err(CodecError::limit_exceeded("JSON nesting depth", max, depth));
        }

        let mut deserializer = serde_json::Deserializer::from_str(text);
        deserializer.disable_recursion_limit();
        let json = JsonValue::deserialize(&mut deserializer)?;
        deserializer.end()?;
        self.decode(&json)
    }
}

/// JSON nesting a single envelope may add: a dictionary entry sits in an
/// envelope object, a payload array and an entry object; collaborator
/// payloads get one more level.
pub const JSON_LEVELS_PER_ENVELOPE: usize = 4;

/// Deepest `[`/`{` nesting in `text`, ignoring brackets inside strings.
/// Iterative, so hostile input cannot exhaust the stack here.
fn json_depth(text: &str) -> usize {
    let mut depth = 0_usize;
    let mut max = 0_usize;
    let mut in_string = false;
    let mut escaped = false;
    for byte in text.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                max = max.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max
}

/// Decode an envelope through the process-wide registry
pub fn decode_envelope(json: &JsonValue) -> CodecResult<Value> {
    registry::global().decode_envelope(json)
}

/// Parse JSON text and decode it through the process-wide registry
pub fn from_json_str(text: &str) -> CodecResult<Value> {
    Decoder::new(registry::global()).decode_str(text)
}

/// Reads any JSON and decodes it through the process-wide registry.
///
/// Nesting is bounded by the driving deserializer first: `serde_json::from_str`
/// stops at 128 JSON levels, about 64 nested arrays. Use
/// [`from_json_str`] or [`Decoder::decode_str`] to let [`DecodeLimits`] decide.
impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json = JsonValue::deserialize(deserializer)?;
        decode_envelope(&json).map_err(de::Error::custom)
    }
}

// ============================================================================
// BUILT-IN DECODERS
// ============================================================================

pub(crate) fn decode_void(_env: &Envelope<'_>, _ctx: &mut DecodeContext<'_>) -> CodecResult<Value> {
    Ok(Value::Void)
}

pub(crate) fn decode_optional(env: &Envelope<'_>, ctx: &mut DecodeContext<'_>) -> CodecResult<Value> {
    match env.value() {
        None | Some(JsonValue::Null) => Ok(Value::Optional(None)),
        Some(inner) => Ok(Value::Optional(Some(Box::new(ctx.decode(inner)?)))),
    }
}

pub(crate) fn decode_bool(env: &Envelope<'_>, _ctx: &mut DecodeContext<'_>) -> CodecResult<Value> {
    match env.payload()? {
        JsonValue::Bool(b) => Ok(Value::Bool(*b)),
        JsonValue::String(s) => parse_bool_literal(s)
            .map(Value::Bool)
            .ok_or_else(|| env.malformed(format!("'{s}' is not a boolean literal"))),
        other => Err(env.malformed(format!("expected boolean, got {other}"))),
    }
}

/// Boolean-like text: y/yes/t/true/on/1 and n/no/f/false/off/0, any case
fn parse_bool_literal(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "y" | "yes" | "t" | "true" | "on" | "1" => Some(true),
        "n" | "no" | "f" | "false" | "off" | "0" => Some(false),
        _ => None,
    }
}

pub(crate) fn decode_string(env: &Envelope<'_>, _ctx: &mut DecodeContext<'_>) -> CodecResult<Value> {
    match env.payload()? {
        JsonValue::String(s) => Ok(Value::String(s.clone())),
        other => Err(env.malformed(format!("expected text, got {other}"))),
    }
}

pub(crate) fn decode_address(env: &Envelope<'_>, _ctx: &mut DecodeContext<'_>) -> CodecResult<Value> {
    let text = env
        .payload()?
        .as_str()
        .ok_or_else(|| env.malformed("expected hex text"))?;
    Address::from_hex(text).map(Value::Address)
}

/// Shared by every `Int*`/`UInt*` tag; the tag only picks the kind.
pub(crate) fn decode_integer(env: &Envelope<'_>, _ctx: &mut DecodeContext<'_>) -> CodecResult<Value> {
    let kind = IntKind::from_tag(env.tag())
        .ok_or_else(|| env.malformed("not an integer type tag"))?;
    Integer::from_payload(kind, env.payload()?).map(Value::Integer)
}

pub(crate) fn decode_fix64(env: &Envelope<'_>, _ctx: &mut DecodeContext<'_>) -> CodecResult<Value> {
    let text = fixed_point_text(env)?;
    fixed::from_text(text).map(|scaled| Value::Fix64(Fix64::from_scaled(scaled)))
}

/// `UFix64` payloads are read without sign handling and come back as a
/// `Fix64` value; callers matching on `Value::UFix64` after a decode will not
/// see one.
pub(crate) fn decode_ufix64(env: &Envelope<'_>, _ctx: &mut DecodeContext<'_>) -> CodecResult<Value> {
    let text = fixed_point_text(env)?;
    fixed::from_text_unsigned(text).map(|scaled| Value::Fix64(Fix64::from_scaled(scaled)))
}

fn fixed_point_text<'a>(env: &Envelope<'a>) -> CodecResult<&'a str> {
    env.payload()?
        .as_str()
        .ok_or_else(|| env.malformed("expected fixed-point text"))
}

pub(crate) fn decode_array(env: &Envelope<'_>, ctx: &mut DecodeContext<'_>) -> CodecResult<Value> {
    let items = env
        .payload()?
        .as_array()
        .ok_or_else(|| env.malformed("expected an array of envelopes"))?;
    ctx.limits().check_array_length(items.len())?;

    items
        .iter()
        .map(|item| ctx.decode(item))
        .collect::<CodecResult<Vec<_>>>()
        .map(Value::Array)
}

pub(crate) fn decode_dictionary(env: &Envelope<'_>, ctx: &mut DecodeContext<'_>) -> CodecResult<Value> {
    let entries = match env.payload()? {
        JsonValue::Null => return Ok(Value::Dictionary(Dictionary::absent())),
        JsonValue::Array(entries) => entries,
        other => return Err(env.malformed(format!("expected an array of entries, got {other}"))),
    };
    ctx.limits().check_dictionary_entries(entries.len())?;

    let mut pairs = Vec::with_capacity(entries.len());
    for entry in entries {
        let object = entry
            .as_object()
            .ok_or_else(|| env.malformed("entry must be an object"))?;
        let key = object
            .get(KEY_KEY)
            .ok_or_else(|| env.malformed(format!("entry missing '{KEY_KEY}'")))?;
        let value = object
            .get(VALUE_KEY)
            .ok_or_else(|| env.malformed(format!("entry missing '{VALUE_KEY}'")))?;
        pairs.push(KeyValuePair {
            key: ctx.decode(key)?,
            value: ctx.decode(value)?,
        });
    }
    Ok(Value::Dictionary(Dictionary::new(pairs)))
}

/// Word*, Contract, Link, Path, Type and Capability
pub(crate) fn decode_unsupported(env: &Envelope<'_>, _ctx: &mut DecodeContext<'_>) -> CodecResult<Value> {
    Err(CodecError::not_supported(env.tag(), "decode"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bool_literals() {
        for (payload, expected) in [
            (json!(true), true),
            (json!("True"), true),
            (json!("yes"), true),
            (json!("1"), true),
            (json!("off"), false),
            (json!("F"), false),
        ] {
            let value = decode_envelope(&json!({"type": "Bool", "value": payload})).unwrap();
            assert_eq!(value, Value::Bool(expected));
        }

        let err = decode_envelope(&json!({"type": "Bool", "value": "maybe"})).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_envelope_shape_errors() {
        for bad in [
            json!([]),
            json!({"value": "1"}),
            json!({"type": 3, "value": "1"}),
            json!({"type": "Int"}),
            json!({"type": "Array", "value": {}}),
            json!({"type": "Dictionary", "value": [{"key": {"type": "Void"}}]}),
        ] {
            let err = decode_envelope(&bad).unwrap_err();
            assert!(err.is_malformed(), "{bad}: {err}");
        }
    }

    #[test]
    fn test_depth_limit() {
        let registry = TypeRegistry::builtin();
        let limits = DecodeLimits {
            max_nesting_depth: 2,
            ..DecodeLimits::default()
        };
        let decoder = Decoder::new(&registry).with_limits(limits);

        let two = json!({"type": "Optional", "value": {"type": "Void"}});
        assert_eq!(decoder.decode(&two).unwrap(), Value::some(Value::Void));

        let three = json!({"type": "Array", "value": [two]});
        let err = decoder.decode(&three).unwrap_err();
        assert!(matches!(err, CodecError::LimitExceeded { max: 2, actual: 3, .. }));
    }

    #[test]
    fn test_array_length_limit() {
        let registry = TypeRegistry::builtin();
        let limits = DecodeLimits {
            max_array_length: 1,
            ..DecodeLimits::default()
        };
        let payload = json!({"type": "Array", "value": [{"type": "Void"}, {"type": "Void"}]});
        let err = Decoder::new(&registry)
            .with_limits(limits)
            .decode(&payload)
            .unwrap_err();
        assert!(matches!(err, CodecError::LimitExceeded { .. }));
    }

    fn nested_arrays(levels: usize) -> String {
        let mut text = r#"{"type":"Void"}"#.to_owned();
        for _ in 1..levels {
            text = format!(r#"{{"type":"Array","value":[{text}]}}"#);
        }
        text
    }

    #[test]
    fn test_text_depth_follows_decode_limits() {
        // 71 envelopes is 141 JSON levels, past serde_json's default of 128
        let value = from_json_str(&nested_arrays(71)).unwrap();
        let mut depth = 1;
        let mut current = &value;
        while let Some([inner]) = current.as_array() {
            depth += 1;
            current = inner;
        }
        assert_eq!(depth, 71);
        assert_eq!(current, &Value::Void);

        let err = from_json_str(&nested_arrays(129)).unwrap_err();
        assert!(matches!(err, CodecError::LimitExceeded { max: 128, actual: 129, .. }));

        let registry = TypeRegistry::builtin();
        let strict = Decoder::new(&registry).with_limits(DecodeLimits::strict());
        assert!(strict.decode_str(&nested_arrays(32)).is_ok());
        let err = strict.decode_str(&nested_arrays(33)).unwrap_err();
        assert!(matches!(err, CodecError::LimitExceeded { max: 32, actual: 33, .. }));
    }

    #[test]
    fn test_text_too_deep_is_rejected_before_parsing() {
        let text = "[".repeat(100_000);
        let err = from_json_str(&text).unwrap_err();
        assert!(matches!(err, CodecError::LimitExceeded { max: 512, actual: 100_000, .. }));
    }

    #[test]
    fn test_json_depth_skips_strings() {
        assert_eq!(json_depth(r#"{"type":"String","value":"[[[{{"}"#), 1);
        assert_eq!(json_depth(r#"{"a":"\"[","b":[[]]}"#), 3);
        assert_eq!(json_depth(r#"{"a":"\\","b":[]}"#), 2);
        assert_eq!(json_depth("1"), 0);
    }

    #[test]
    fn test_decode_str_rejects_bad_json() {
        assert!(matches!(from_json_str("{not json").unwrap_err(), CodecError::Json(_)));
    }
}
