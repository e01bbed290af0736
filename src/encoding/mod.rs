// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Dynamic value encoding/decoding.
//!
//! This module provides the codec between host values and dynamic values:
//! - [`value`] - Single value codec, dispatches on shape or variant tag
//! - [`struct_value`] - Object <-> `Struct` codec
//! - [`list_value`] - Array <-> `ListValue` codec
//! - [`codec`] - Shared codec trait and options
//! - [`wire`] - Conversions to and from `prost-types` messages
//! - [`json`] - JSON text helpers

pub mod codec;
pub mod json;
pub mod list_value;
pub mod struct_value;
pub mod value;
pub mod wire;

pub use codec::{Codec, CodecOptions, DEFAULT_MAX_DEPTH};
pub use list_value::ListCodec;
pub use struct_value::StructCodec;
pub use value::ValueCodec;
