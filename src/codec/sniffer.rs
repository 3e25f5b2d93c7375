// src/codec/sniffer.rs
//! Shape sniffing: picks the variant for one raw property entry.

use super::DispatchTable;
use crate::constants::TYPE_FIELD;
use crate::error::{JsonShape, PropertyError, RawTag};
use crate::model::{PropertyType, Variant};
use serde_json::Value;
use std::str::FromStr;

/// Structural check for a tag whose payload shape alone picks the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeRule {
    pub tag: PropertyType,
    /// Variant when the nested field is an object (the placeholder).
    pub on_object: Variant,
    /// Variant when the nested field is an array.
    pub on_array: Variant,
}

/// Tags that need a look at the nested field named after the tag.
pub const SHAPE_RULES: &[ShapeRule] = &[ShapeRule {
    tag: PropertyType::RichText,
    on_object: Variant::RichTextEmpty,
    on_array: Variant::RichTextList,
}];

/// Decide which variant `value` materializes into under `table`'s context.
///
/// A nested field that is missing or `null` keeps the context's default
/// variant for the tag.
pub fn sniff<P: 'static>(
    key: &str,
    value: &Value,
    table: &DispatchTable<P>,
) -> Result<Variant, PropertyError> {
    let object = value
        .as_object()
        .ok_or_else(|| PropertyError::UnsupportedPropertyFormat {
            key: key.to_string(),
            shape: JsonShape::of(value),
        })?;

    let raw_tag = match object.get(TYPE_FIELD) {
        None => return Err(unsupported_type(key, RawTag::Missing)),
        Some(Value::String(tag)) => tag,
        Some(other) => return Err(unsupported_type(key, RawTag::NotAString(JsonShape::of(other)))),
    };

    let tag = PropertyType::from_str(raw_tag)
        .map_err(|_| unsupported_type(key, RawTag::Unknown(raw_tag.clone())))?;
    let default = table
        .variant_for(tag)
        .ok_or_else(|| unsupported_type(key, RawTag::Unknown(raw_tag.clone())))?;

    let Some(rule) = SHAPE_RULES.iter().find(|rule| rule.tag == tag) else {
        log::trace!("'{}': {} -> {}", key, tag, default);
        return Ok(default);
    };

    let nested = object.get(tag.as_str());
    let variant = match nested {
        None | Some(Value::Null) => default,
        Some(Value::Object(_)) => rule.on_object,
        Some(Value::Array(_)) => rule.on_array,
        Some(other) => return Err(ambiguous(key, tag, JsonShape::of(other))),
    };

    if !table.supports(variant) {
        let shape = nested.map(JsonShape::of).unwrap_or(JsonShape::Null);
        return Err(ambiguous(key, tag, shape));
    }

    log::trace!("'{}': {} sniffed as {}", key, tag, variant);
    Ok(variant)
}

fn unsupported_type(key: &str, tag: RawTag) -> PropertyError {
    PropertyError::UnsupportedPropertyType {
        key: key.to_string(),
        tag,
    }
}

fn ambiguous(key: &str, tag: PropertyType, shape: JsonShape) -> PropertyError {
    PropertyError::ShapeSniffAmbiguous {
        key: key.to_string(),
        tag,
        shape,
    }
}
