// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Protostruct
//!
//! Bidirectional codec between JSON-like host values and the protobuf
//! `google.protobuf.Value` / `Struct` / `ListValue` dynamic value tree.
//!
//! - [`JsonValue`] is the host side: untagged, its shape is its kind
//! - [`DynamicValue`] is the tagged side: exactly one variant per node
//! - [`encoding`] holds the value, struct and list codecs
//!
//! Byte framing is left to `prost`: the [`encoding::wire`] module converts
//! the dynamic tree to and from [`prost_types::Value`].
//!
//! ## Example
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use protostruct::{struct_value, JsonObject, JsonValue};
//!
//! let mut object = JsonObject::new();
//! object.insert("foo".to_string(), JsonValue::from("bar"));
//! object.insert("missing".to_string(), JsonValue::Undefined);
//!
//! let encoded = struct_value::encode(&object)?;
//! assert_eq!(encoded.len(), 1);
//!
//! let decoded = struct_value::decode(&encoded)?;
//! assert_eq!(decoded["foo"], JsonValue::from("bar"));
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use crate::core::{
    CodecError, DynamicList, DynamicStruct, DynamicValue, JsonArray, JsonObject, JsonValue, Kind,
    Result,
};

// Encoding/decoding
pub mod encoding;

pub use encoding::{
    list_value, struct_value, value, Codec, CodecOptions, ListCodec, StructCodec, ValueCodec,
};

// Consumers serialize wire trees with these; re-exported to keep versions aligned.
pub use prost;
pub use prost_types;
