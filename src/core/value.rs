// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Host value type system.
//!
//! [`JsonValue`] is the native side of the codec: an untagged value whose
//! shape alone determines its kind. Besides the six JSON shapes it carries an
//! absent sentinel ([`JsonValue::Undefined`]) and a few host types that have
//! no JSON counterpart, so that data coming from an untyped source can be
//! represented before the codec decides whether it is encodable.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::error::{CodecError, Result};

/// Host object: field name -> value.
pub type JsonObject = HashMap<String, JsonValue>;

/// Host array.
pub type JsonArray = Vec<JsonValue>;

/// Largest integer magnitude an f64 holds exactly (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Unified host value.
///
/// Numbers may arrive as signed, unsigned or floating point; the codec folds
/// them all into a 64-bit float. `Undefined`, `Bytes`, `Timestamp` and
/// `Duration` are never produced by decoding.
///
/// Equality compares numbers by value across `Int64`, `UInt64` and
/// `Float64`, so `Int64(1) == Float64(1.0)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum JsonValue {
    // Explicit null
    Null,

    // Absent sentinel: "no value provided", distinct from Null
    Undefined,

    Bool(bool),

    // Numbers
    Int64(i64),
    UInt64(u64),
    Float64(f64),

    String(String),

    // Raw binary data
    Bytes(Vec<u8>),

    // Timestamp as nanoseconds since Unix epoch
    Timestamp(i64),

    // Duration as nanoseconds (can be negative)
    Duration(i64),

    Array(JsonArray),

    Object(JsonObject),
}

impl PartialEq for JsonValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsonValue::Null, JsonValue::Null) => true,
            (JsonValue::Undefined, JsonValue::Undefined) => true,
            (JsonValue::Bool(a), JsonValue::Bool(b)) => a == b,
            (JsonValue::Int64(a), JsonValue::Int64(b)) => a == b,
            (JsonValue::UInt64(a), JsonValue::UInt64(b)) => a == b,
            (JsonValue::Int64(i), JsonValue::UInt64(u))
            | (JsonValue::UInt64(u), JsonValue::Int64(i)) => {
                u64::try_from(*i).is_ok_and(|i| i == *u)
            }
            (a, b) if a.is_number() && b.is_number() => a.as_f64() == b.as_f64(),
            (JsonValue::String(a), JsonValue::String(b)) => a == b,
            (JsonValue::Bytes(a), JsonValue::Bytes(b)) => a == b,
            (JsonValue::Timestamp(a), JsonValue::Timestamp(b)) => a == b,
            (JsonValue::Duration(a), JsonValue::Duration(b)) => a == b,
            (JsonValue::Array(a), JsonValue::Array(b)) => a == b,
            (JsonValue::Object(a), JsonValue::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl JsonValue {
    // ========================================================================
    // Type Checking Predicates
    // ========================================================================

    /// Check if this value is an explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Check if this value is the absent sentinel.
    pub fn is_undefined(&self) -> bool {
        matches!(self, JsonValue::Undefined)
    }

    /// Check if this value is a number of any width.
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            JsonValue::Int64(_) | JsonValue::UInt64(_) | JsonValue::Float64(_)
        )
    }

    /// Check if this value is a container type (array or object).
    pub fn is_container(&self) -> bool {
        matches!(self, JsonValue::Array(_) | JsonValue::Object(_))
    }

    /// Check if this value has one of the six JSON shapes.
    ///
    /// Only the top level is inspected; containers are not walked.
    pub fn is_json_shape(&self) -> bool {
        match self {
            JsonValue::Null
            | JsonValue::Bool(_)
            | JsonValue::Int64(_)
            | JsonValue::UInt64(_)
            | JsonValue::String(_)
            | JsonValue::Array(_)
            | JsonValue::Object(_) => true,
            JsonValue::Float64(f) => f.is_finite(),
            JsonValue::Undefined
            | JsonValue::Bytes(_)
            | JsonValue::Timestamp(_)
            | JsonValue::Duration(_) => false,
        }
    }

    // ========================================================================
    // Type Conversion Methods
    // ========================================================================

    /// Try to convert this value to f64 (for numeric values only).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Int64(v) => Some(*v as f64),
            JsonValue::UInt64(v) => Some(*v as f64),
            JsonValue::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get the inner bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the inner string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the inner object.
    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Try to get the inner array.
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Get the type name of this value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Undefined => "undefined",
            JsonValue::Bool(_) => "bool",
            JsonValue::Int64(_) => "int64",
            JsonValue::UInt64(_) => "uint64",
            JsonValue::Float64(_) => "float64",
            JsonValue::String(_) => "string",
            JsonValue::Bytes(_) => "bytes",
            JsonValue::Timestamp(_) => "timestamp",
            JsonValue::Duration(_) => "duration",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }

    /// Short human-readable rendering for diagnostics.
    ///
    /// Containers are summarized by length rather than printed in full.
    pub fn describe(&self) -> String {
        match self {
            JsonValue::Null => "null".to_string(),
            JsonValue::Undefined => "undefined".to_string(),
            JsonValue::Bool(b) => b.to_string(),
            JsonValue::Int64(v) => v.to_string(),
            JsonValue::UInt64(v) => v.to_string(),
            JsonValue::Float64(v) => v.to_string(),
            JsonValue::String(s) => s.clone(),
            JsonValue::Bytes(b) => format!("<{} bytes>", b.len()),
            JsonValue::Timestamp(nanos) => Utc.timestamp_nanos(*nanos).to_rfc3339(),
            JsonValue::Duration(nanos) => format!("{nanos}ns"),
            JsonValue::Array(arr) => format!("[array of {}]", arr.len()),
            JsonValue::Object(obj) => format!("[object with {} fields]", obj.len()),
        }
    }

    // ========================================================================
    // Convenience Constructors
    // ========================================================================

    /// Create a timestamp from seconds and nanoseconds since the Unix epoch.
    pub fn timestamp_from_secs_nanos(secs: i64, nanos: u32) -> Self {
        JsonValue::Timestamp(
            secs.saturating_mul(1_000_000_000)
                .saturating_add(nanos as i64),
        )
    }

    /// Create a duration from signed seconds and nanoseconds.
    pub fn duration_from_secs_nanos(secs: i64, nanos: i32) -> Self {
        JsonValue::Duration(
            secs.saturating_mul(1_000_000_000)
                .saturating_add(nanos as i64),
        )
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::Bool(b)
    }
}

impl From<f64> for JsonValue {
    fn from(v: f64) -> Self {
        JsonValue::Float64(v)
    }
}

impl From<i64> for JsonValue {
    fn from(v: i64) -> Self {
        JsonValue::Int64(v)
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::String(s.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::String(s)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(values: Vec<JsonValue>) -> Self {
        JsonValue::Array(values)
    }
}

impl From<JsonObject> for JsonValue {
    fn from(object: JsonObject) -> Self {
        JsonValue::Object(object)
    }
}

impl<T: Into<JsonValue>> From<Option<T>> for JsonValue {
    /// `None` maps to the absent sentinel, not to null.
    fn from(opt: Option<T>) -> Self {
        opt.map_or(JsonValue::Undefined, Into::into)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for JsonValue {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::timestamp_from_secs_nanos(dt.timestamp(), dt.timestamp_subsec_nanos())
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    JsonValue::Int64(i)
                } else if let Some(u) = n.as_u64() {
                    JsonValue::UInt64(u)
                } else {
                    // Without arbitrary_precision every Number is an f64 here.
                    JsonValue::Float64(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => JsonValue::String(s),
            serde_json::Value::Array(arr) => {
                JsonValue::Array(arr.into_iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(obj) => JsonValue::Object(
                obj.into_iter()
                    .map(|(key, val)| (key, JsonValue::from(val)))
                    .collect(),
            ),
        }
    }
}

impl TryFrom<JsonValue> for serde_json::Value {
    type Error = CodecError;

    /// Integral floats within ±2^53 become JSON integers, so a value that went
    /// through the codec compares equal to the JSON it came from.
    fn try_from(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Null => Ok(serde_json::Value::Null),
            JsonValue::Bool(b) => Ok(serde_json::Value::Bool(b)),
            JsonValue::Int64(i) => Ok(serde_json::Value::from(i)),
            JsonValue::UInt64(u) => Ok(serde_json::Value::from(u)),
            JsonValue::Float64(f) => {
                // -0.0 keeps its sign by staying a float.
                let negative_zero = f == 0.0 && f.is_sign_negative();
                if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER && !negative_zero {
                    Ok(serde_json::Value::from(f as i64))
                } else {
                    serde_json::Number::from_f64(f)
                        .map(serde_json::Value::Number)
                        .ok_or_else(|| CodecError::unsupported_type("float64", f.to_string()))
                }
            }
            JsonValue::String(s) => Ok(serde_json::Value::String(s)),
            JsonValue::Array(arr) => arr
                .into_iter()
                .map(serde_json::Value::try_from)
                .collect::<Result<Vec<_>>>()
                .map(serde_json::Value::Array),
            JsonValue::Object(obj) => {
                let mut map = serde_json::Map::new();
                for (key, val) in obj {
                    map.insert(key, serde_json::Value::try_from(val)?);
                }
                Ok(serde_json::Value::Object(map))
            }
            other => Err(CodecError::unsupported_type(
                other.type_name(),
                other.describe(),
            )),
        }
    }
}
