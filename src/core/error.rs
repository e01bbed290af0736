// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for protostruct.
//!
//! Every failure of the codec is terminal: the whole encode or decode call
//! fails and no partial tree is returned.
//! - Host values with no dynamic-value counterpart
//! - Dynamic nodes with no active variant
//! - Nesting deeper than the configured limit
//! - Malformed JSON text

use std::fmt;

/// Errors that can occur while encoding or decoding dynamic values.
#[derive(Debug, Clone, PartialEq)]
pub enum CodecError {
    /// Host value whose shape has no dynamic-value variant
    UnsupportedType {
        /// Type name of the rejected value (e.g., "timestamp")
        type_name: String,
        /// Rendering of the rejected value
        value: String,
    },

    /// Dynamic node with no recognized variant tag
    MissingVariant {
        /// Where the node was found (e.g., "Value", "Struct field 'foo'")
        context: String,
    },

    /// Nesting exceeded the configured maximum depth
    DepthExceeded {
        /// Configured limit
        max_depth: usize,
    },

    /// Parse error in JSON text
    ParseError {
        /// What was being parsed
        context: String,
        /// Error message
        message: String,
    },
}

impl CodecError {
    /// Create an unsupported type error.
    pub fn unsupported_type(type_name: impl Into<String>, value: impl Into<String>) -> Self {
        CodecError::UnsupportedType {
            type_name: type_name.into(),
            value: value.into(),
        }
    }

    /// Create a missing variant error.
    pub fn missing_variant(context: impl Into<String>) -> Self {
        CodecError::MissingVariant {
            context: context.into(),
        }
    }

    /// Create a depth exceeded error.
    pub fn depth_exceeded(max_depth: usize) -> Self {
        CodecError::DepthExceeded { max_depth }
    }

    /// Create a parse error.
    pub fn parse(context: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::ParseError {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::UnsupportedType { type_name, value } => {
                vec![("type", type_name.clone()), ("value", value.clone())]
            }
            CodecError::MissingVariant { context } => vec![("context", context.clone())],
            CodecError::DepthExceeded { max_depth } => {
                vec![("max_depth", max_depth.to_string())]
            }
            CodecError::ParseError { context, message } => {
                vec![("context", context.clone()), ("message", message.clone())]
            }
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::UnsupportedType { type_name, value } => {
                write!(f, "Unable to infer type for \"{value}\" ({type_name})")
            }
            CodecError::MissingVariant { context } => {
                write!(f, "Missing variant: {context} has no kind set")
            }
            CodecError::DepthExceeded { max_depth } => {
                write!(f, "Nesting depth exceeds the maximum of {max_depth}")
            }
            CodecError::ParseError { context, message } => {
                write!(f, "Parse error in {context}: {message}")
            }
        }
    }
}

impl std::error::Error for CodecError {}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::parse("json", err.to_string())
    }
}

/// Result type for protostruct operations.
pub type Result<T> = std::result::Result<T, CodecError>;
