// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Bridge to the protobuf well-known types in `prost-types`.
//!
//! The dynamic tree converts losslessly into `prost_types::{Value, Struct,
//! ListValue}`, which a caller serializes with [`prost::Message`]. The reverse
//! direction is where an unset `kind` can appear; it is rejected with
//! [`CodecError::MissingVariant`].

use prost_types::value::Kind as WireKind;
use prost_types::{ListValue, NullValue, Struct, Value};

use crate::core::{CodecError, DynamicList, DynamicStruct, DynamicValue, Result};

use super::codec::{CodecOptions, Depth};

// =============================================================================
// Dynamic -> Wire
// =============================================================================

impl From<DynamicValue> for Value {
    fn from(value: DynamicValue) -> Self {
        let kind = match value {
            DynamicValue::NullValue => WireKind::NullValue(NullValue::NullValue as i32),
            DynamicValue::NumberValue(n) => WireKind::NumberValue(n),
            DynamicValue::StringValue(s) => WireKind::StringValue(s),
            DynamicValue::BoolValue(b) => WireKind::BoolValue(b),
            DynamicValue::StructValue(s) => WireKind::StructValue(s.into()),
            DynamicValue::ListValue(l) => WireKind::ListValue(l.into()),
        };
        Value { kind: Some(kind) }
    }
}

impl From<DynamicStruct> for Struct {
    fn from(value: DynamicStruct) -> Self {
        Struct {
            fields: value
                .fields
                .into_iter()
                .map(|(key, field)| (key, field.into()))
                .collect(),
        }
    }
}

impl From<DynamicList> for ListValue {
    fn from(value: DynamicList) -> Self {
        ListValue {
            values: value.values.into_iter().map(Value::from).collect(),
        }
    }
}

// =============================================================================
// Wire -> Dynamic
// =============================================================================

impl TryFrom<&Value> for DynamicValue {
    type Error = CodecError;

    fn try_from(value: &Value) -> Result<Self> {
        value_from_wire(value, Depth::root(&CodecOptions::default()), || {
            "Value".to_string()
        })
    }
}

impl TryFrom<Value> for DynamicValue {
    type Error = CodecError;

    fn try_from(value: Value) -> Result<Self> {
        DynamicValue::try_from(&value)
    }
}

impl TryFrom<&Struct> for DynamicStruct {
    type Error = CodecError;

    fn try_from(value: &Struct) -> Result<Self> {
        struct_from_wire(value, Depth::root(&CodecOptions::default()).descend()?)
    }
}

impl TryFrom<&ListValue> for DynamicList {
    type Error = CodecError;

    fn try_from(value: &ListValue) -> Result<Self> {
        list_from_wire(value, Depth::root(&CodecOptions::default()).descend()?)
    }
}

/// Convert a wire value, naming its position lazily for diagnostics.
pub(crate) fn value_from_wire(
    value: &Value,
    depth: Depth,
    location: impl FnOnce() -> String,
) -> Result<DynamicValue> {
    let Some(kind) = &value.kind else {
        let location = location();
        tracing::debug!("{} has no kind set", location);
        return Err(CodecError::missing_variant(location));
    };

    match kind {
        // NullValue has a single member; any number on the wire means null.
        WireKind::NullValue(_) => Ok(DynamicValue::NullValue),
        WireKind::NumberValue(n) => Ok(DynamicValue::NumberValue(*n)),
        WireKind::StringValue(s) => Ok(DynamicValue::StringValue(s.clone())),
        WireKind::BoolValue(b) => Ok(DynamicValue::BoolValue(*b)),
        WireKind::StructValue(s) => {
            struct_from_wire(s, depth.descend()?).map(DynamicValue::StructValue)
        }
        WireKind::ListValue(l) => {
            list_from_wire(l, depth.descend()?).map(DynamicValue::ListValue)
        }
    }
}

fn struct_from_wire(value: &Struct, depth: Depth) -> Result<DynamicStruct> {
    value
        .fields
        .iter()
        .map(|(key, field)| {
            value_from_wire(field, depth, || format!("Struct field '{key}'"))
                .map(|field| (key.clone(), field))
        })
        .collect()
}

fn list_from_wire(value: &ListValue, depth: Depth) -> Result<DynamicList> {
    value
        .values
        .iter()
        .enumerate()
        .map(|(index, element)| {
            value_from_wire(element, depth, || format!("ListValue element {index}"))
        })
        .collect()
}
