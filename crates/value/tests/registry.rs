//! Registry dispatch, extension and failure modes

use cadence_value::{
    CodecError, CodecResult, CustomValue, DecodeContext, DecodeLimits, Decoder, Envelope,
    RegistryBuilder, TypeRegistry, Value, encode_envelope,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value as JsonValue, json};

/// A composite as a collaborator module would define it: an ordered list of
/// named fields, each an ordinary value.
#[derive(Debug)]
struct Event {
    id: String,
    fields: Vec<(String, Value)>,
}

impl CustomValue for Event {
    fn type_tag(&self) -> &str {
        "Event"
    }

    fn to_display_string(&self) -> CodecResult<String> {
        let fields = self
            .fields
            .iter()
            .map(|(name, value)| -> CodecResult<String> {
                Ok(format!("{name}: {}", value.to_display_string()?))
            })
            .collect::<CodecResult<Vec<_>>>()?;
        Ok(format!("{}({})", self.id, fields.join(", ")))
    }

    fn encode_payload(&self) -> CodecResult<Option<JsonValue>> {
        let fields = self
            .fields
            .iter()
            .map(|(name, value)| -> CodecResult<JsonValue> {
                Ok(json!({"name": name, "value": encode_envelope(value)?}))
            })
            .collect::<CodecResult<Vec<_>>>()?;
        Ok(Some(json!({"id": self.id, "fields": fields})))
    }
}

fn decode_event(env: &Envelope<'_>, ctx: &mut DecodeContext<'_>) -> CodecResult<Value> {
    let payload = env.payload()?;
    let id = payload["id"]
        .as_str()
        .ok_or_else(|| env.malformed("missing id"))?
        .to_owned();
    let raw_fields = payload["fields"]
        .as_array()
        .ok_or_else(|| env.malformed("missing fields"))?;

    let mut fields = Vec::with_capacity(raw_fields.len());
    for field in raw_fields {
        let name = field["name"]
            .as_str()
            .ok_or_else(|| env.malformed("field without name"))?;
        fields.push((name.to_owned(), ctx.decode(&field["value"])?));
    }
    Ok(Value::custom(Event { id, fields }))
}

fn event_registry() -> TypeRegistry {
    let mut builder = RegistryBuilder::with_builtins();
    builder.register("Event", decode_event).unwrap();
    builder.build()
}

fn sample_event() -> Value {
    Value::custom(Event {
        id: "A.0x01.Token.Deposited".to_owned(),
        fields: vec![
            ("amount".to_owned(), Value::fix64(1_000_000_000)),
            ("to".to_owned(), Value::some(Value::string("0x02"))),
        ],
    })
}

#[test]
fn test_unknown_tag() {
    let registry = TypeRegistry::builtin();
    let err = registry
        .decode_envelope(&json!({"type": "NotARealType", "value": 1}))
        .unwrap_err();
    assert!(matches!(err, CodecError::UnknownType { ref tag } if tag == "NotARealType"));
    assert_eq!(err.to_string(), "Unknown type tag: 'NotARealType'");
}

#[test]
fn test_unknown_tag_nested_fails_whole_container() {
    let registry = TypeRegistry::builtin();
    let err = registry
        .decode_envelope(&json!({
            "type": "Array",
            "value": [{"type": "Int", "value": "1"}, {"type": "Nope"}]
        }))
        .unwrap_err();
    assert!(err.is_unknown_type());
}

#[test]
fn test_duplicate_registration() {
    let mut builder = RegistryBuilder::new();
    builder.register("Event", decode_event).unwrap();
    let err = builder.register("Event", decode_event).unwrap_err();
    assert!(matches!(err, CodecError::DuplicateTag { .. }));
    assert_eq!(builder.len(), 1);
}

#[rstest]
#[case("Word8")]
#[case("Word16")]
#[case("Word32")]
#[case("Word64")]
#[case("Contract")]
#[case("Link")]
#[case("Path")]
#[case("Type")]
#[case("Capability")]
fn test_declared_tags_without_codec(#[case] tag: &str) {
    let registry = TypeRegistry::builtin();
    assert!(registry.contains(tag));
    let err = registry
        .decode_envelope(&json!({"type": tag, "value": "1"}))
        .unwrap_err();
    assert!(
        matches!(err, CodecError::NotSupported { tag: ref t, operation: "decode" } if t == tag),
        "{err}"
    );
}

#[test]
fn test_custom_value_round_trip() {
    let registry = event_registry();
    let event = sample_event();

    let json = encode_envelope(&event).unwrap();
    assert_eq!(json["type"], "Event");
    assert_eq!(
        json["value"]["fields"][0],
        json!({"name": "amount", "value": {"type": "Fix64", "value": "10.00000000"}})
    );

    let back = registry.decode_envelope(&json).unwrap();
    assert_eq!(back, event);
    assert_eq!(
        back.to_display_string().unwrap(),
        "A.0x01.Token.Deposited(amount: 10.00000000, to: Optional[0x02])"
    );
}

#[test]
fn test_custom_value_inside_builtin_container() {
    let registry = event_registry();
    let value = Value::array([sample_event(), Value::int(3)]);
    let back = registry.decode_envelope(&encode_envelope(&value).unwrap()).unwrap();
    assert_eq!(back, value);
    assert_eq!(back.as_array().unwrap()[0].as_custom().unwrap().type_tag(), "Event");
}

#[test]
fn test_builtin_registry_does_not_know_custom_tags() {
    let json = encode_envelope(&sample_event()).unwrap();
    assert!(TypeRegistry::builtin().decode_envelope(&json).unwrap_err().is_unknown_type());
}

#[test]
fn test_custom_decoder_respects_limits() {
    let registry = event_registry();
    let nested = json!({
        "type": "Event",
        "value": {
            "id": "E",
            "fields": [{"name": "inner", "value": {"type": "Optional", "value": {"type": "Void"}}}]
        }
    });
    let limits = DecodeLimits {
        max_nesting_depth: 2,
        ..DecodeLimits::strict()
    };
    let err = Decoder::new(&registry).with_limits(limits).decode(&nested).unwrap_err();
    assert!(matches!(err, CodecError::LimitExceeded { max: 2, actual: 3, .. }));

    assert!(Decoder::new(&registry).decode(&nested).is_ok());
}

#[test]
fn test_registration_order_is_kept() {
    let registry = event_registry();
    assert_eq!(registry.tags().last(), Some("Event"));
    assert_eq!(registry.len(), TypeRegistry::builtin().len() + 1);
}
