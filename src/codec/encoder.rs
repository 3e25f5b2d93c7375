// src/codec/encoder.rs
//! Encoder: writes every property back as `{"type": <tag>, ...fields}`.

use super::PropertyContext;
use crate::error::PropertyError;
use crate::model::{Catalogued, Properties, PropertyType};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// A payload struct paired with the tag its variant implies.
#[derive(Debug, Serialize)]
pub struct Tagged<'a, T> {
    #[serde(rename = "type")]
    tag: PropertyType,
    #[serde(flatten)]
    body: &'a T,
}

impl<'a, T: Catalogued> Tagged<'a, T> {
    pub fn new(body: &'a T) -> Self {
        Self {
            tag: T::VARIANT.tag(),
            body,
        }
    }
}

/// Encode into a JSON object value.
pub fn encode_value<C: PropertyContext>(
    properties: &Properties<C>,
) -> Result<Value, PropertyError> {
    let mut object = Map::with_capacity(properties.len());
    for (name, property) in properties {
        let value = serde_json::to_value(property).map_err(|source| PropertyError::Encoding {
            key: name.to_string(),
            source,
        })?;
        object.insert(name.to_string(), value);
    }
    log::debug!("Encoded {} {} properties", object.len(), C::KIND);
    Ok(Value::Object(object))
}

/// Encode into compact JSON bytes.
pub fn encode<C: PropertyContext>(properties: &Properties<C>) -> Result<Vec<u8>, PropertyError> {
    let value = encode_value(properties)?;
    serde_json::to_vec(&value).map_err(|source| PropertyError::Encoding {
        key: String::new(),
        source,
    })
}

/// Encode into indented JSON text.
pub fn encode_pretty<C: PropertyContext>(
    properties: &Properties<C>,
) -> Result<String, PropertyError> {
    let value = encode_value(properties)?;
    serde_json::to_string_pretty(&value).map_err(|source| PropertyError::Encoding {
        key: String::new(),
        source,
    })
}

impl<C: PropertyContext> Serialize for Properties<C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, property) in self {
            map.serialize_entry(name.as_str(), property)?;
        }
        map.end()
    }
}
