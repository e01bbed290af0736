// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Nested structure fidelity using a GeoJSON polygon.

mod common;

use protostruct::{struct_value, value, DynamicValue, JsonValue};

use common::*;

fn polygon_object() -> protostruct::JsonObject {
    match JsonValue::from(geojson_polygon()) {
        JsonValue::Object(obj) => obj,
        other => panic!("expected object, got {}", other.type_name()),
    }
}

#[test]
fn test_geojson_struct_encode() {
    let encoded = struct_value::encode(&polygon_object()).unwrap();
    assert_eq!(encoded, geojson_struct());
}

#[test]
fn test_geojson_struct_decode() {
    let decoded = struct_value::decode(&geojson_struct()).unwrap();
    let json = serde_json::Value::try_from(JsonValue::Object(decoded)).unwrap();
    assert_eq!(json, geojson_polygon());
}

#[test]
fn test_geojson_coordinates_bit_exact() {
    let encoded = struct_value::encode(&polygon_object()).unwrap();
    let decoded = struct_value::decode(&encoded).unwrap();

    let ring = decoded["coordinates"].as_array().unwrap()[0]
        .as_array()
        .unwrap();
    assert_eq!(ring.len(), POLYGON_RING.len());

    for (point, (lon, lat)) in ring.iter().zip(POLYGON_RING.iter()) {
        let pair = point.as_array().unwrap();
        assert_eq!(pair[0].as_f64().unwrap().to_bits(), lon.to_bits());
        assert_eq!(pair[1].as_f64().unwrap().to_bits(), lat.to_bits());
    }
}

#[test]
fn test_geojson_nesting_depth() {
    let encoded = value::encode(&JsonValue::from(geojson_polygon())).unwrap();
    // struct -> coordinates list -> ring list -> point list
    assert_eq!(encoded.depth(), 4);
    assert!(matches!(encoded, DynamicValue::StructValue(_)));
}
