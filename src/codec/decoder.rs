// src/codec/decoder.rs
//! Two-phase decoder: bytes → generic JSON → per-entry sniff + materialize.
//!
//! Entries are independent, so they may be materialized on the rayon pool.
//! Either every entry decodes or the whole call fails with the first error
//! observed; no partially filled container ever escapes.

use super::{sniff, DatabaseContext, PageContext, PropertyContext};
use crate::config::DecodeOptions;
use crate::constants::ANONYMOUS_ENTRY_KEY;
use crate::error::{JsonShape, PropertyError};
use crate::model::{
    AnyProperties, ContextKind, DatabaseProperties, DatabaseProperty, PageProperties,
    PageProperty, Properties,
};
use rayon::prelude::*;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a property map under context `C`.
pub fn decode_properties<C: PropertyContext>(
    bytes: &[u8],
    options: &DecodeOptions,
) -> Result<Properties<C>, PropertyError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| PropertyError::MalformedJson {
            reason: e.to_string(),
        })?;
    decode_properties_value(value, options)
}

/// Decode an already parsed property map under context `C`.
pub fn decode_properties_value<C: PropertyContext>(
    value: Value,
    options: &DecodeOptions,
) -> Result<Properties<C>, PropertyError> {
    let object = match value {
        Value::Object(object) => object,
        other => {
            return Err(PropertyError::MalformedJson {
                reason: format!(
                    "expected an object of properties, found {}",
                    JsonShape::of(&other)
                ),
            })
        }
    };

    let entries: Vec<(String, Value)> = object.into_iter().collect();
    let parallel = options.should_parallelize(entries.len());
    log::debug!(
        "Decoding {} {} properties ({})",
        entries.len(),
        C::KIND,
        if parallel { "parallel" } else { "sequential" }
    );

    let decoded: Result<Vec<_>, PropertyError> = if parallel {
        entries
            .into_par_iter()
            .map(|(key, value)| decode_keyed::<C>(key, value))
            .collect()
    } else {
        entries
            .into_iter()
            .map(|(key, value)| decode_keyed::<C>(key, value))
            .collect()
    };

    match decoded {
        Ok(entries) => Ok(entries.into_iter().collect()),
        Err(err) => {
            log::warn!("Failed to decode {} properties: {}", C::KIND, err);
            Err(err)
        }
    }
}

fn decode_keyed<C: PropertyContext>(
    key: String,
    value: Value,
) -> Result<(String, C::Property), PropertyError> {
    let property = decode_entry::<C>(&key, value)?;
    Ok((key, property))
}

/// Sniff and materialize a single entry.
pub fn decode_entry<C: PropertyContext>(
    key: &str,
    value: Value,
) -> Result<C::Property, PropertyError> {
    let table = C::dispatch_table();
    let variant = sniff(key, &value, table)?;
    let materialize =
        table
            .materializer(variant)
            .ok_or_else(|| PropertyError::ShapeSniffAmbiguous {
                key: key.to_string(),
                tag: variant.tag(),
                shape: JsonShape::of(&value),
            })?;

    materialize(value).map_err(|source| PropertyError::MalformedProperty {
        key: key.to_string(),
        tag: variant.tag(),
        source,
    })
}

/// Decode a database schema's `properties` object.
pub fn decode_database_properties(bytes: &[u8]) -> Result<DatabaseProperties, PropertyError> {
    decode_properties::<DatabaseContext>(bytes, &DecodeOptions::default())
}

/// Decode a page's `properties` object.
pub fn decode_page_properties(bytes: &[u8]) -> Result<PageProperties, PropertyError> {
    decode_properties::<PageContext>(bytes, &DecodeOptions::default())
}

/// Decode under a context chosen at runtime.
pub fn decode(bytes: &[u8], context: ContextKind) -> Result<AnyProperties, PropertyError> {
    match context {
        ContextKind::Database => decode_database_properties(bytes).map(AnyProperties::Database),
        ContextKind::Page => decode_page_properties(bytes).map(AnyProperties::Page),
    }
}

impl<'de, C: PropertyContext> Deserialize<'de> for Properties<C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decode_properties_value(value, &DecodeOptions::default())
            .map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for PageProperty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decode_entry::<PageContext>(ANONYMOUS_ENTRY_KEY, value).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for DatabaseProperty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decode_entry::<DatabaseContext>(ANONYMOUS_ENTRY_KEY, value)
            .map_err(serde::de::Error::custom)
    }
}

/// Rollup `array` items: page-context properties without names.
pub(crate) fn nested_page_properties<'de, D>(
    deserializer: D,
) -> Result<Vec<PageProperty>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            decode_entry::<PageContext>(&format!("array[{}]", index), item)
                .map_err(serde::de::Error::custom)
        })
        .collect()
}
