// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Single value encoding and decoding.
//!
//! Encoding dispatches on the shape of the host value; decoding dispatches on
//! the variant tag. Containers are handed to the struct and list codecs.
//!
//! ## Example
//!
//! ```
//! use protostruct::encoding::value;
//! use protostruct::{DynamicValue, JsonValue};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let encoded = value::encode(&JsonValue::Float64(10.0))?;
//! assert_eq!(encoded, DynamicValue::NumberValue(10.0));
//! assert_eq!(value::decode(&encoded)?, JsonValue::Float64(10.0));
//! # Ok(())
//! # }
//! ```

use crate::core::{CodecError, DynamicValue, JsonValue, Result};

use super::codec::{Codec, CodecOptions, Depth};
use super::list_value::ListCodec;
use super::struct_value::StructCodec;
use super::wire;

/// Encode a host value with default options.
pub fn encode(input: &JsonValue) -> Result<DynamicValue> {
    ValueCodec::default().encode(input)
}

/// Decode a dynamic value with default options.
pub fn decode(input: &DynamicValue) -> Result<JsonValue> {
    ValueCodec::default().decode(input)
}

/// Encode a host value straight into a `google.protobuf.Value` message.
pub fn encode_wire(input: &JsonValue) -> Result<prost_types::Value> {
    ValueCodec::default().encode_wire(input)
}

/// Decode a `google.protobuf.Value` message into a host value.
///
/// Fails with [`CodecError::MissingVariant`] if any node has no `kind` set.
pub fn decode_wire(input: &prost_types::Value) -> Result<JsonValue> {
    ValueCodec::default().decode_wire(input)
}

/// Codec for a single dynamic value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueCodec {
    options: CodecOptions,
}

impl ValueCodec {
    /// Create a value codec with the given options.
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    /// Get the codec options.
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Encode a host value into a protobuf `Value` message.
    pub fn encode_wire(&self, input: &JsonValue) -> Result<prost_types::Value> {
        self.encode(input).map(prost_types::Value::from)
    }

    /// Decode a protobuf `Value` message into a host value.
    pub fn decode_wire(&self, input: &prost_types::Value) -> Result<JsonValue> {
        let root = Depth::root(&self.options);
        let dynamic = wire::value_from_wire(input, root, || "Value".to_string())?;
        self.decode_at(&dynamic, root)
    }

    pub(crate) fn encode_at(&self, input: &JsonValue, depth: Depth) -> Result<DynamicValue> {
        match input {
            JsonValue::Null => Ok(DynamicValue::NullValue),
            JsonValue::Bool(b) => Ok(DynamicValue::BoolValue(*b)),
            JsonValue::Int64(v) => Ok(DynamicValue::NumberValue(*v as f64)),
            JsonValue::UInt64(v) => Ok(DynamicValue::NumberValue(*v as f64)),
            JsonValue::Float64(v) if v.is_finite() => Ok(DynamicValue::NumberValue(*v)),
            JsonValue::String(s) => Ok(DynamicValue::StringValue(s.clone())),
            JsonValue::Array(values) => {
                ListCodec::new(self.options)
                    .encode_at(values, depth.descend()?)
                    .map(DynamicValue::ListValue)
            }
            JsonValue::Object(object) => {
                StructCodec::new(self.options)
                    .encode_at(object, depth.descend()?)
                    .map(DynamicValue::StructValue)
            }
            other => {
                tracing::debug!(
                    "Rejecting {} value '{}': no dynamic variant",
                    other.type_name(),
                    other.describe()
                );
                Err(CodecError::unsupported_type(
                    other.type_name(),
                    other.describe(),
                ))
            }
        }
    }

    pub(crate) fn decode_at(&self, input: &DynamicValue, depth: Depth) -> Result<JsonValue> {
        match input {
            DynamicValue::NullValue => Ok(JsonValue::Null),
            DynamicValue::NumberValue(n) => Ok(JsonValue::Float64(*n)),
            DynamicValue::StringValue(s) => Ok(JsonValue::String(s.clone())),
            DynamicValue::BoolValue(b) => Ok(JsonValue::Bool(*b)),
            DynamicValue::ListValue(list) => ListCodec::new(self.options)
                .decode_at(list, depth.descend()?)
                .map(JsonValue::Array),
            DynamicValue::StructValue(fields) => StructCodec::new(self.options)
                .decode_at(fields, depth.descend()?)
                .map(JsonValue::Object),
        }
    }
}

impl Codec for ValueCodec {
    type Native = JsonValue;
    type Dynamic = DynamicValue;

    fn encode(&self, input: &JsonValue) -> Result<DynamicValue> {
        self.encode_at(input, Depth::root(&self.options))
    }

    fn decode(&self, input: &DynamicValue) -> Result<JsonValue> {
        self.decode_at(input, Depth::root(&self.options))
    }
}
