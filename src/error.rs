// src/error.rs
//! Error types for decoding and encoding property maps.
//!
//! Every failure is structural: the input is static bytes, so nothing here
//! is retryable. Each variant names the property key it concerns (when
//! there is one) so callers can report which entry could not be modeled.

use crate::model::PropertyType;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Dynamic shape of a JSON value, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonShape {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonShape {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonShape::Null,
            Value::Bool(_) => JsonShape::Bool,
            Value::Number(_) => JsonShape::Number,
            Value::String(_) => JsonShape::String,
            Value::Array(_) => JsonShape::Array,
            Value::Object(_) => JsonShape::Object,
        }
    }
}

impl fmt::Display for JsonShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonShape::Null => "null",
            JsonShape::Bool => "boolean",
            JsonShape::Number => "number",
            JsonShape::String => "string",
            JsonShape::Array => "array",
            JsonShape::Object => "object",
        };
        f.write_str(name)
    }
}

/// The `"type"` field as it was found on a rejected entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawTag {
    /// No `"type"` field at all.
    Missing,
    /// A `"type"` field that is not a string.
    NotAString(JsonShape),
    /// A string tag outside the catalogue.
    Unknown(String),
}

impl fmt::Display for RawTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawTag::Missing => write!(f, "missing"),
            RawTag::NotAString(shape) => write!(f, "non-string {}", shape),
            RawTag::Unknown(tag) => write!(f, "\"{}\"", tag),
        }
    }
}

/// Decode/encode failure.
#[derive(Error, Debug)]
pub enum PropertyError {
    #[error("Malformed JSON: {reason}")]
    MalformedJson { reason: String },

    #[error("Unsupported property format for '{key}': expected an object, found {shape}")]
    UnsupportedPropertyFormat { key: String, shape: JsonShape },

    #[error("Unsupported property type for '{key}': {tag}")]
    UnsupportedPropertyType { key: String, tag: RawTag },

    #[error("Ambiguous shape for '{key}': {tag} payload is {shape}")]
    ShapeSniffAmbiguous {
        key: String,
        tag: PropertyType,
        shape: JsonShape,
    },

    #[error("Malformed {tag} property '{key}': {source}")]
    MalformedProperty {
        key: String,
        tag: PropertyType,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode property '{key}': {source}")]
    Encoding {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl PropertyError {
    /// Key of the offending entry, `None` for whole-input failures.
    pub fn key(&self) -> Option<&str> {
        match self {
            PropertyError::MalformedJson { .. } => None,
            PropertyError::UnsupportedPropertyFormat { key, .. }
            | PropertyError::UnsupportedPropertyType { key, .. }
            | PropertyError::ShapeSniffAmbiguous { key, .. }
            | PropertyError::MalformedProperty { key, .. } => Some(key),
            PropertyError::Encoding { key, .. } if key.is_empty() => None,
            PropertyError::Encoding { key, .. } => Some(key),
        }
    }

    /// An entry whose JSON shape cannot be modeled. Ambiguous nested
    /// shapes are reported the same way as non-object entries.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            PropertyError::UnsupportedPropertyFormat { .. }
                | PropertyError::ShapeSniffAmbiguous { .. }
        )
    }

    /// The offending tag string for unknown-tag failures.
    pub fn tag_str(&self) -> Option<&str> {
        match self {
            PropertyError::UnsupportedPropertyType {
                tag: RawTag::Unknown(tag),
                ..
            } => Some(tag),
            _ => None,
        }
    }
}

/// Result type alias for convenience
pub type Result<T, E = PropertyError> = std::result::Result<T, E>;
