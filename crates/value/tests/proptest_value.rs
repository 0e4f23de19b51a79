//! Property-based round trips over generated value trees

use cadence_value::{
    Address, DecodeLimits, Decoder, IntKind, TypeRegistry, Value, encode_envelope, from_json_str,
    to_json_string,
};
use num_bigint::BigInt;
use proptest::prelude::*;

fn any_int_kind() -> impl Strategy<Value = IntKind> {
    prop::sample::select(IntKind::ALL.to_vec())
}

fn any_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::void()),
        any::<bool>().prop_map(Value::bool),
        ".*".prop_map(Value::string),
        any::<[u8; 8]>().prop_map(|b| Value::address(Address::from_bytes(b))),
        (any_int_kind(), any::<i128>()).prop_map(|(kind, n)| Value::integer(kind, n)),
        any::<i64>().prop_map(Value::fix64),
    ]
}

fn any_value() -> impl Strategy<Value = Value> {
    any_scalar().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::option::of(inner.clone()).prop_map(Value::optional),
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::vec((inner.clone(), inner), 0..6).prop_map(Value::dictionary),
        ]
    })
}

proptest! {
    #[test]
    fn prop_envelope_round_trip(value in any_value()) {
        let json = encode_envelope(&value).unwrap();
        let back = TypeRegistry::builtin().decode_envelope(&json).unwrap();
        prop_assert_eq!(back, value);
    }

    #[test]
    fn prop_text_round_trip(value in any_value()) {
        let text = to_json_string(&value).unwrap();
        prop_assert_eq!(from_json_str(&text).unwrap(), value);
    }

    #[test]
    fn prop_encoding_is_deterministic(value in any_value()) {
        prop_assert_eq!(to_json_string(&value).unwrap(), to_json_string(&value.clone()).unwrap());
    }

    #[test]
    fn prop_ufix64_keeps_scaled_integer(x in any::<u64>()) {
        let back = from_json_str(&to_json_string(&Value::ufix64(x)).unwrap()).unwrap();
        prop_assert_eq!(back.as_scaled(), Some(&BigInt::from(x)));
    }

    #[test]
    fn prop_display_never_fails_for_supported(value in any_value()) {
        prop_assert!(value.to_display_string().is_ok());
    }
}

#[test]
fn test_deep_nesting_is_bounded() {
    let mut value = Value::void();
    for _ in 0..40 {
        value = Value::some(value);
    }
    let json = encode_envelope(&value).unwrap();
    let registry = TypeRegistry::builtin();

    assert!(Decoder::new(&registry).decode(&json).is_ok());
    let err = Decoder::new(&registry)
        .with_limits(DecodeLimits::strict())
        .decode(&json)
        .unwrap_err();
    assert!(err.to_string().contains("Nesting depth"));
}
