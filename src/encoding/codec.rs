// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Shared codec interface and configuration.
//!
//! ## Architecture
//!
//! The codec is one mutually recursive algorithm split along value shapes:
//!
//! - [`ValueCodec`](super::value::ValueCodec) - a single value, dispatches on shape
//! - [`StructCodec`](super::struct_value::StructCodec) - objects, one value per field
//! - [`ListCodec`](super::list_value::ListCodec) - arrays, one value per element
//!
//! All three implement [`Codec`] and are configured by [`CodecOptions`].
//!
//! ## Example
//!
//! ```
//! use protostruct::encoding::{Codec, CodecOptions, ValueCodec};
//! use protostruct::JsonValue;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let codec = ValueCodec::new(CodecOptions::default().with_max_depth(16));
//! let encoded = codec.encode(&JsonValue::from("hello"))?;
//! assert_eq!(codec.decode(&encoded)?, JsonValue::from("hello"));
//! # Ok(())
//! # }
//! ```

use crate::core::{CodecError, Result};

/// Default nesting limit, matching prost's decode recursion limit.
pub const DEFAULT_MAX_DEPTH: usize = 100;

// =============================================================================
// Codec Trait
// =============================================================================

/// Paired conversion between a host shape and its dynamic counterpart.
pub trait Codec {
    /// Host-side type (e.g., `JsonValue`, `JsonObject`).
    type Native;

    /// Dynamic-side type (e.g., `DynamicValue`, `DynamicStruct`).
    type Dynamic;

    /// Encode a host value into its dynamic representation.
    ///
    /// Fails with [`CodecError::UnsupportedType`] if any leaf has no dynamic
    /// counterpart.
    fn encode(&self, input: &Self::Native) -> Result<Self::Dynamic>;

    /// Decode a dynamic representation back into a host value.
    fn decode(&self, input: &Self::Dynamic) -> Result<Self::Native>;
}

// =============================================================================
// Options
// =============================================================================

/// Codec configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Maximum number of nested structs/lists, counting the outermost one.
    pub max_depth: usize,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CodecOptions {
    /// Set the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

// =============================================================================
// Depth Guard
// =============================================================================

/// Current nesting level during a walk.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Depth {
    level: usize,
    max: usize,
}

impl Depth {
    /// Depth of a top-level value.
    pub(crate) fn root(options: &CodecOptions) -> Self {
        Self {
            level: 0,
            max: options.max_depth,
        }
    }

    /// Step into a struct or list.
    pub(crate) fn descend(self) -> Result<Self> {
        let level = self.level + 1;
        if level > self.max {
            tracing::warn!("Nesting depth limit of {} exceeded", self.max);
            return Err(CodecError::depth_exceeded(self.max));
        }
        Ok(Self { level, ..self })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        assert_eq!(CodecOptions::default().max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(CodecOptions::default().with_max_depth(3).max_depth, 3);
    }

    #[test]
    fn test_depth_descend_within_limit() {
        let depth = Depth::root(&CodecOptions::default().with_max_depth(2));
        let depth = depth.descend().unwrap();
        let depth = depth.descend().unwrap();
        assert_eq!(depth.level, 2);
    }

    #[test]
    fn test_depth_descend_past_limit() {
        let depth = Depth::root(&CodecOptions::default().with_max_depth(1));
        let depth = depth.descend().unwrap();
        assert_eq!(depth.descend().unwrap_err(), CodecError::depth_exceeded(1));
    }

    #[test]
    fn test_zero_depth_rejects_any_container() {
        let depth = Depth::root(&CodecOptions::default().with_max_depth(0));
        assert!(depth.descend().is_err());
    }
}
