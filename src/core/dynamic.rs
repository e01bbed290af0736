// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Dynamic value tree.
//!
//! Mirrors the protobuf well-known types `google.protobuf.Value`, `Struct` and
//! `ListValue`. A [`DynamicValue`] always holds exactly one variant; the unset
//! state only exists on the wire side (see [`crate::encoding::wire`]).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Kind;

/// A dynamically typed value: null, a number, a string, a boolean, a nested
/// struct or a list of values.
///
/// Serialized with serde, variants use the protobuf field names. `NullValue`
/// carries no payload and so appears as the bare string `"nullValue"`, while
/// every other variant is an object such as `{"numberValue": 10.0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DynamicValue {
    NullValue,
    NumberValue(f64),
    StringValue(String),
    BoolValue(bool),
    StructValue(DynamicStruct),
    ListValue(DynamicList),
}

/// Structured value: field name -> dynamic value.
///
/// Field order carries no meaning; a `BTreeMap` keeps iteration deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamicStruct {
    pub fields: BTreeMap<String, DynamicValue>,
}

/// Ordered sequence of dynamic values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamicList {
    pub values: Vec<DynamicValue>,
}

impl DynamicValue {
    /// The active variant tag.
    pub fn kind(&self) -> Kind {
        match self {
            DynamicValue::NullValue => Kind::Null,
            DynamicValue::NumberValue(_) => Kind::Number,
            DynamicValue::StringValue(_) => Kind::String,
            DynamicValue::BoolValue(_) => Kind::Bool,
            DynamicValue::StructValue(_) => Kind::Struct,
            DynamicValue::ListValue(_) => Kind::List,
        }
    }

    /// Try to get the inner number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DynamicValue::NumberValue(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the inner string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DynamicValue::StringValue(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the inner bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DynamicValue::BoolValue(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the inner struct.
    pub fn as_struct(&self) -> Option<&DynamicStruct> {
        match self {
            DynamicValue::StructValue(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the inner list.
    pub fn as_list(&self) -> Option<&DynamicList> {
        match self {
            DynamicValue::ListValue(l) => Some(l),
            _ => None,
        }
    }

    /// Nesting depth of this tree; scalars have depth 0.
    ///
    /// Walks the tree recursively with no depth limit; trees built by the
    /// codec are already bounded by `CodecOptions::max_depth`.
    pub fn depth(&self) -> usize {
        match self {
            DynamicValue::StructValue(s) => {
                1 + s.fields.values().map(Self::depth).max().unwrap_or(0)
            }
            DynamicValue::ListValue(l) => {
                1 + l.values.iter().map(Self::depth).max().unwrap_or(0)
            }
            _ => 0,
        }
    }
}

impl DynamicStruct {
    /// Create an empty struct.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a field by name.
    pub fn get(&self, name: &str) -> Option<&DynamicValue> {
        self.fields.get(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the struct has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, DynamicValue)> for DynamicStruct {
    fn from_iter<I: IntoIterator<Item = (String, DynamicValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl DynamicList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<DynamicValue> for DynamicList {
    fn from_iter<I: IntoIterator<Item = DynamicValue>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(DynamicValue::NullValue.kind(), Kind::Null);
        assert_eq!(DynamicValue::NumberValue(1.0).kind(), Kind::Number);
        assert_eq!(DynamicValue::ListValue(DynamicList::new()).kind(), Kind::List);
    }

    #[test]
    fn test_depth() {
        let inner: DynamicList = vec![DynamicValue::NumberValue(1.0)].into_iter().collect();
        let outer: DynamicList = vec![DynamicValue::ListValue(inner)].into_iter().collect();
        assert_eq!(DynamicValue::BoolValue(true).depth(), 0);
        assert_eq!(DynamicValue::ListValue(outer).depth(), 2);
        assert_eq!(DynamicValue::StructValue(DynamicStruct::new()).depth(), 1);
    }

    #[test]
    fn test_serde_uses_proto_field_names() {
        let value = DynamicValue::NumberValue(10.0);
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json, serde_json::json!({"numberValue": 10.0}));
        let back: DynamicValue = serde_json::from_value(json).unwrap();
        assert_eq!(back, value);

        let null = serde_json::to_value(DynamicValue::NullValue).unwrap();
        assert_eq!(null, serde_json::json!("nullValue"));
        let back: DynamicValue = serde_json::from_value(null).unwrap();
        assert_eq!(back, DynamicValue::NullValue);

        let list: DynamicList = vec![DynamicValue::NullValue, DynamicValue::BoolValue(true)]
            .into_iter()
            .collect();
        let json = serde_json::to_value(DynamicValue::ListValue(list)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "listValue": {"values": ["nullValue", {"boolValue": true}]}
            })
        );
    }
}
