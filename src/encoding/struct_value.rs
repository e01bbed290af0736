// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Struct encoding and decoding.
//!
//! Fields holding [`JsonValue::Undefined`] are omitted on encode, so callers
//! can pass sparse objects with optional fields left unset. An explicit
//! [`JsonValue::Null`] is kept as a `nullValue` field.

use std::collections::BTreeMap;

use crate::core::{DynamicStruct, JsonObject, Result};

use super::codec::{Codec, CodecOptions, Depth};
use super::value::ValueCodec;

/// Encode a host object with default options.
pub fn encode(input: &JsonObject) -> Result<DynamicStruct> {
    StructCodec::default().encode(input)
}

/// Decode a dynamic struct with default options.
pub fn decode(input: &DynamicStruct) -> Result<JsonObject> {
    StructCodec::default().decode(input)
}

/// Codec for object-shaped values.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructCodec {
    options: CodecOptions,
}

impl StructCodec {
    /// Create a struct codec with the given options.
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    pub(crate) fn encode_at(&self, input: &JsonObject, depth: Depth) -> Result<DynamicStruct> {
        let value_codec = ValueCodec::new(self.options);
        let mut fields = BTreeMap::new();

        for (key, val) in input {
            if val.is_undefined() {
                tracing::trace!("Omitting undefined field '{}'", key);
                continue;
            }
            fields.insert(key.clone(), value_codec.encode_at(val, depth)?);
        }

        Ok(DynamicStruct { fields })
    }

    pub(crate) fn decode_at(&self, input: &DynamicStruct, depth: Depth) -> Result<JsonObject> {
        let value_codec = ValueCodec::new(self.options);
        let mut result = JsonObject::with_capacity(input.fields.len());

        for (key, field) in &input.fields {
            result.insert(key.clone(), value_codec.decode_at(field, depth)?);
        }

        Ok(result)
    }
}

impl Codec for StructCodec {
    type Native = JsonObject;
    type Dynamic = DynamicStruct;

    fn encode(&self, input: &JsonObject) -> Result<DynamicStruct> {
        self.encode_at(input, Depth::root(&self.options).descend()?)
    }

    fn decode(&self, input: &DynamicStruct) -> Result<JsonObject> {
        self.decode_at(input, Depth::root(&self.options).descend()?)
    }
}
