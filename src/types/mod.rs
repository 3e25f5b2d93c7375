use serde::{Deserialize, Deserializer};
use thiserror::Error;

mod colors;
mod domain_types;
mod ids;
mod rich_text;

pub use colors::*;
pub use domain_types::*;
pub use ids::*;
pub use rich_text::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid Notion ID format: {0}")]
    InvalidId(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Unknown property type: {0}")]
    UnknownPropertyType(String),
}

/// Deserializes an explicit `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
