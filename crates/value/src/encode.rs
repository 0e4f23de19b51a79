//! Envelope encoder
//!
//! A value already knows its own tag and payload shape, so encoding needs no
//! registry. Containers encode each nested value into a full envelope.

use serde::{Serialize, Serializer, ser};
use serde_json::{Map, Value as JsonValue};

use crate::core::tag::{KEY_KEY, TYPE_KEY, VALUE_KEY};
use crate::core::value::Value;
use crate::error::{CodecError, CodecResult};

impl Value {
    /// Payload for the envelope's `value` key.
    ///
    /// `None` means the key is omitted (only `Void` among the built-ins);
    /// `Some(JsonValue::Null)` is an explicit `null` (absent optionals and
    /// dictionaries).
    pub fn encode_payload(&self) -> CodecResult<Option<JsonValue>> {
        let payload = match self {
            Self::Void => return Ok(None),
            Self::Optional(None) => JsonValue::Null,
            Self::Optional(Some(inner)) => inner.encode_envelope()?,
            Self::Bool(b) => JsonValue::Bool(*b),
            Self::String(s) => JsonValue::String(s.clone()),
            Self::Address(a) => JsonValue::String(a.to_string()),
            Self::Integer(i) => i.to_payload(),
            Self::Fix64(f) => JsonValue::String(f.to_string()),
            Self::UFix64(f) => JsonValue::String(f.to_string()),
            Self::Array(items) => JsonValue::Array(
                items
                    .iter()
                    .map(Value::encode_envelope)
                    .collect::<CodecResult<_>>()?,
            ),
            Self::Dictionary(dict) => match dict.entries() {
                None => JsonValue::Null,
                Some(entries) => JsonValue::Array(
                    entries
                        .iter()
                        .map(|pair| -> CodecResult<JsonValue> {
                            let mut entry = Map::new();
                            entry.insert(KEY_KEY.to_owned(), pair.key.encode_envelope()?);
                            entry.insert(VALUE_KEY.to_owned(), pair.value.encode_envelope()?);
                            Ok(JsonValue::Object(entry))
                        })
                        .collect::<CodecResult<_>>()?,
                ),
            },
            Self::Custom(c) => return c.inner().encode_payload(),
            Self::Word(_)
            | Self::Contract
            | Self::Link
            | Self::Path
            | Self::TypeValue
            | Self::Capability => {
                return Err(CodecError::not_supported(self.type_tag(), "encode"));
            }
        };
        Ok(Some(payload))
    }

    /// Full `{ "type": .., "value": .. }` envelope
    pub fn encode_envelope(&self) -> CodecResult<JsonValue> {
        let mut envelope = Map::new();
        envelope.insert(TYPE_KEY.to_owned(), JsonValue::String(self.type_tag().to_owned()));
        if let Some(payload) = self.encode_payload()? {
            envelope.insert(VALUE_KEY.to_owned(), payload);
        }
        Ok(JsonValue::Object(envelope))
    }
}

/// Encode one value into its envelope
pub fn encode_envelope(value: &Value) -> CodecResult<JsonValue> {
    value.encode_envelope()
}

/// Serialize one value's envelope as compact JSON text
pub fn to_json_string(value: &Value) -> CodecResult<String> {
    Ok(serde_json::to_string(&value.encode_envelope()?)?)
}

/// Encode call arguments as a JSON array of envelopes.
///
/// ```
/// use cadence_value::{encode_arguments, Value};
/// use serde_json::json;
///
/// let args = encode_arguments(&[Value::string("hi"), Value::uint(7)]).unwrap();
/// assert_eq!(
///     args,
///     json!([{"type": "String", "value": "hi"}, {"type": "UInt", "value": "7"}])
/// );
/// ```
pub fn encode_arguments(values: &[Value]) -> CodecResult<JsonValue> {
    values
        .iter()
        .map(Value::encode_envelope)
        .collect::<CodecResult<Vec<_>>>()
        .map(JsonValue::Array)
}

/// Encode call arguments the way a Flow access node takes them in a script
/// or transaction request: one compact UTF-8 JSON document per argument.
pub fn encode_arguments_bytes(values: &[Value]) -> CodecResult<Vec<Vec<u8>>> {
    values
        .iter()
        .map(|value| -> CodecResult<Vec<u8>> {
            Ok(serde_json::to_vec(&value.encode_envelope()?)?)
        })
        .collect()
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.encode_envelope()
            .map_err(ser::Error::custom)?
            .serialize(serializer)
    }
}
