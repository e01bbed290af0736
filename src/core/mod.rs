// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout protostruct.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] - Error handling
//! - [`JsonValue`] - Host (native) value representation
//! - [`DynamicValue`] - Tagged dynamic value tree
//! - [`Kind`] - Variant tag identifier

pub mod dynamic;
pub mod error;
pub mod value;

pub use dynamic::{DynamicList, DynamicStruct, DynamicValue};
pub use error::{CodecError, Result};
pub use value::{JsonArray, JsonObject, JsonValue};

/// Variant tag of a dynamic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Number,
    String,
    Bool,
    Struct,
    List,
}

/// Error returned when parsing a `Kind` from string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseKindError {
    _private: (),
}

impl std::fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid kind name, expected one of 'nullValue', 'numberValue', 'stringValue', 'boolValue', 'structValue', 'listValue'"
        )
    }
}

impl std::error::Error for ParseKindError {}

impl std::str::FromStr for Kind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "nullValue" => Ok(Kind::Null),
            "numberValue" => Ok(Kind::Number),
            "stringValue" => Ok(Kind::String),
            "boolValue" => Ok(Kind::Bool),
            "structValue" => Ok(Kind::Struct),
            "listValue" => Ok(Kind::List),
            _ => Err(ParseKindError { _private: () }),
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Kind {
    /// Check if this kind holds nested values.
    pub fn is_container(&self) -> bool {
        matches!(self, Kind::Struct | Kind::List)
    }

    /// Protobuf field name of the variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Null => "nullValue",
            Kind::Number => "numberValue",
            Kind::String => "stringValue",
            Kind::Bool => "boolValue",
            Kind::Struct => "structValue",
            Kind::List => "listValue",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("structValue".parse::<Kind>(), Ok(Kind::Struct));
        assert_eq!("nullValue".parse::<Kind>(), Ok(Kind::Null));
        assert!("kind".parse::<Kind>().is_err());
        assert!("NumberValue".parse::<Kind>().is_err());
    }

    #[test]
    fn test_kind_as_str_round_trips() {
        for kind in [
            Kind::Null,
            Kind::Number,
            Kind::String,
            Kind::Bool,
            Kind::Struct,
            Kind::List,
        ] {
            assert_eq!(kind.as_str().parse::<Kind>(), Ok(kind));
        }
    }

    #[test]
    fn test_kind_is_container() {
        assert!(Kind::Struct.is_container());
        assert!(Kind::List.is_container());
        assert!(!Kind::String.is_container());
    }
}
