// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! List encoding and decoding. Element order is preserved exactly.

use crate::core::{DynamicList, JsonArray, JsonValue, Result};

use super::codec::{Codec, CodecOptions, Depth};
use super::value::ValueCodec;

/// Encode a host array with default options.
pub fn encode(input: &[JsonValue]) -> Result<DynamicList> {
    ListCodec::default().encode_slice(input)
}

/// Decode a dynamic list with default options.
pub fn decode(input: &DynamicList) -> Result<JsonArray> {
    ListCodec::default().decode(input)
}

/// Codec for array-shaped values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListCodec {
    options: CodecOptions,
}

impl ListCodec {
    /// Create a list codec with the given options.
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    /// Encode a borrowed slice of host values.
    pub fn encode_slice(&self, input: &[JsonValue]) -> Result<DynamicList> {
        self.encode_at(input, Depth::root(&self.options).descend()?)
    }

    // An undefined element is rejected by the value codec, not skipped.
    pub(crate) fn encode_at(&self, input: &[JsonValue], depth: Depth) -> Result<DynamicList> {
        let value_codec = ValueCodec::new(self.options);
        input
            .iter()
            .map(|element| value_codec.encode_at(element, depth))
            .collect::<Result<Vec<_>>>()
            .map(|values| DynamicList { values })
    }

    pub(crate) fn decode_at(&self, input: &DynamicList, depth: Depth) -> Result<JsonArray> {
        let value_codec = ValueCodec::new(self.options);
        input
            .values
            .iter()
            .map(|element| value_codec.decode_at(element, depth))
            .collect()
    }
}

impl Codec for ListCodec {
    type Native = JsonArray;
    type Dynamic = DynamicList;

    fn encode(&self, input: &JsonArray) -> Result<DynamicList> {
        self.encode_slice(input)
    }

    fn decode(&self, input: &DynamicList) -> Result<JsonArray> {
        self.decode_at(input, Depth::root(&self.options).descend()?)
    }
}
