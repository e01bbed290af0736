// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON text helpers.
//!
//! Shortcuts between JSON text and the dynamic tree, going through
//! `serde_json` and the value codec.
//!
//! ## Example
//!
//! ```
//! use protostruct::encoding::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let value = json::from_json_str(r#"{"x": 1, "y": [true, null]}"#)?;
//! assert_eq!(json::to_json_string(&value, false)?, r#"{"x":1,"y":[true,null]}"#);
//! # Ok(())
//! # }
//! ```

use crate::core::{DynamicValue, JsonValue, Result};

use super::codec::Codec;
use super::value::ValueCodec;

/// Parse JSON text into a dynamic value.
pub fn from_json_str(json: &str) -> Result<DynamicValue> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    ValueCodec::default().encode(&JsonValue::from(value))
}

/// Parse JSON bytes into a dynamic value.
pub fn from_json_slice(data: &[u8]) -> Result<DynamicValue> {
    let value: serde_json::Value = serde_json::from_slice(data)?;
    ValueCodec::default().encode(&JsonValue::from(value))
}

/// Decode a dynamic value into a `serde_json::Value`.
pub fn to_json_value(value: &DynamicValue) -> Result<serde_json::Value> {
    serde_json::Value::try_from(ValueCodec::default().decode(value)?)
}

/// Render a dynamic value as JSON text.
///
/// # Arguments
///
/// * `value` - The dynamic value to render
/// * `pretty` - Whether to pretty-print the output
pub fn to_json_string(value: &DynamicValue, pretty: bool) -> Result<String> {
    let json_value = to_json_value(value)?;

    if pretty {
        Ok(serde_json::to_string_pretty(&json_value)?)
    } else {
        Ok(serde_json::to_string(&json_value)?)
    }
}
