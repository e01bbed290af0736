// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Wire bridge integration tests.
//!
//! Tests cover:
//! - Trees handed to prost survive binary framing unchanged
//! - Missing `kind` rejection at every nesting position
//! - Depth limits on wire input

mod common;

use std::collections::BTreeMap;

use protostruct::prost::Message;
use protostruct::prost_types::{value::Kind as WireKind, ListValue, Struct, Value};
use protostruct::{
    struct_value, value, CodecError, CodecOptions, DynamicStruct, DynamicValue, JsonValue,
    ValueCodec,
};

use common::*;

fn wire_string(s: &str) -> Value {
    Value {
        kind: Some(WireKind::StringValue(s.to_string())),
    }
}

#[test]
fn test_prost_binary_round_trip() {
    let input = JsonValue::from(geojson_polygon());
    let wire = value::encode_wire(&input).unwrap();

    let bytes = wire.encode_to_vec();
    let parsed = Value::decode(bytes.as_slice()).unwrap();
    assert_eq!(parsed, wire);

    let decoded = value::decode_wire(&parsed).unwrap();
    assert_eq!(
        serde_json::Value::try_from(decoded).unwrap(),
        geojson_polygon()
    );
}

#[test]
fn test_struct_to_wire_and_back() {
    let encoded = struct_value::encode(&object_with_undefined()).unwrap();
    let wire = Struct::from(encoded.clone());
    assert_eq!(wire.fields.len(), 3);
    assert_eq!(wire.fields["foo"], wire_string("bar"));

    let back = DynamicStruct::try_from(&wire).unwrap();
    assert_eq!(back, encoded);
}

#[test]
fn test_decode_wire_missing_variant_nested() {
    let mut inner = BTreeMap::new();
    inner.insert("ok".to_string(), wire_string("fine"));
    inner.insert("unset".to_string(), Value::default());

    let list = ListValue {
        values: vec![Value {
            kind: Some(WireKind::StructValue(Struct { fields: inner })),
        }],
    };
    let root = Value {
        kind: Some(WireKind::ListValue(list)),
    };

    let err = value::decode_wire(&root).unwrap_err();
    assert_eq!(err, CodecError::missing_variant("Struct field 'unset'"));
}

#[test]
fn test_decode_wire_default_value_is_missing_variant() {
    // An empty message on the wire decodes to a Value with no kind.
    let parsed = Value::decode(&b""[..]).unwrap();
    assert!(matches!(
        value::decode_wire(&parsed),
        Err(CodecError::MissingVariant { .. })
    ));
    assert!(DynamicValue::try_from(parsed).is_err());
}

#[test]
fn test_decode_wire_depth_limit() {
    let wire = value::encode_wire(&nested_arrays(3, JsonValue::Null)).unwrap();
    let codec = ValueCodec::new(CodecOptions::default().with_max_depth(2));
    assert_eq!(
        codec.decode_wire(&wire).unwrap_err(),
        CodecError::depth_exceeded(2)
    );
}
