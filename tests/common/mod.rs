// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common fixtures for integration tests.

#![allow(dead_code)]

use protostruct::{DynamicList, DynamicStruct, DynamicValue, JsonObject, JsonValue};
use serde_json::json;

// ============================================================================
// Host Fixtures
// ============================================================================

/// Build a host object from literal entries.
pub fn object(entries: Vec<(&str, JsonValue)>) -> JsonObject {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// `{foo: "bar", no: false, nil: null}`
pub fn simple_object() -> JsonObject {
    object(vec![
        ("foo", JsonValue::from("bar")),
        ("no", JsonValue::Bool(false)),
        ("nil", JsonValue::Null),
    ])
}

/// The simple object plus an absent `isUndefined` field.
pub fn object_with_undefined() -> JsonObject {
    let mut obj = simple_object();
    obj.insert("isUndefined".to_string(), JsonValue::Undefined);
    obj
}

/// A GeoJSON polygon as a `serde_json` value.
pub fn geojson_polygon() -> serde_json::Value {
    json!({
        "type": "Polygon",
        "coordinates": [[
            [-117.291815, 32.868376],
            [-117.291815, 32.868457],
            [-117.291215, 32.868457],
            [-117.291215, 32.868376],
            [-117.291815, 32.868376]
        ]]
    })
}

/// The polygon ring's coordinate pairs.
pub const POLYGON_RING: [(f64, f64); 5] = [
    (-117.291815, 32.868376),
    (-117.291815, 32.868457),
    (-117.291215, 32.868457),
    (-117.291215, 32.868376),
    (-117.291815, 32.868376),
];

// ============================================================================
// Dynamic Fixtures
// ============================================================================

/// The struct expected from encoding [`simple_object`].
pub fn simple_struct() -> DynamicStruct {
    vec![
        (
            "foo".to_string(),
            DynamicValue::StringValue("bar".to_string()),
        ),
        ("no".to_string(), DynamicValue::BoolValue(false)),
        ("nil".to_string(), DynamicValue::NullValue),
    ]
    .into_iter()
    .collect()
}

/// The struct expected from encoding [`geojson_polygon`], built by hand.
pub fn geojson_struct() -> DynamicStruct {
    let ring: DynamicList = POLYGON_RING
        .iter()
        .map(|(lon, lat)| {
            DynamicValue::ListValue(
                vec![
                    DynamicValue::NumberValue(*lon),
                    DynamicValue::NumberValue(*lat),
                ]
                .into_iter()
                .collect(),
            )
        })
        .collect();
    let coordinates: DynamicList = vec![DynamicValue::ListValue(ring)].into_iter().collect();

    vec![
        (
            "type".to_string(),
            DynamicValue::StringValue("Polygon".to_string()),
        ),
        (
            "coordinates".to_string(),
            DynamicValue::ListValue(coordinates),
        ),
    ]
    .into_iter()
    .collect()
}

/// Nest `value` inside `levels` single-element arrays.
pub fn nested_arrays(levels: usize, value: JsonValue) -> JsonValue {
    (0..levels).fold(value, |inner, _| JsonValue::Array(vec![inner]))
}
