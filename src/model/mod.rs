// src/model/mod.rs
//! The property variant catalogue.
//!
//! A property's payload shape is fully determined by its tag and the context
//! it is read in. Each concrete shape is one struct; the structs are grouped
//! into two closed families, [`DatabaseProperty`] (schema definitions) and
//! [`PageProperty`] (instance values), which share the [`PropertyType`] tag
//! vocabulary. A few shapes are context-independent and appear in both
//! families as the same type.

use crate::types::{PropertyId, ValidationError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Implements [`Catalogued`] for payload structs that carry an `id` field.
macro_rules! catalogued {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl $crate::model::Catalogued for $ty {
                const VARIANT: $crate::model::Variant = $crate::model::Variant::$variant;

                fn id(&self) -> Option<&$crate::types::PropertyId> {
                    self.id.as_ref()
                }
            }
        )+
    };
}

/// Declares a property family: the enum, its tag accessors, `From` impls,
/// and a `Serialize` impl that writes each variant with its own tag.
macro_rules! property_family {
    ($(#[$meta:meta])* $family:ident { $($case:ident($ty:ty)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $family {
            $($case($ty)),+
        }

        impl $family {
            /// Variant identity of the payload held.
            pub fn variant(&self) -> $crate::model::Variant {
                match self {
                    $(Self::$case(_) => <$ty as $crate::model::Catalogued>::VARIANT),+
                }
            }

            /// The `"type"` tag this property encodes with.
            pub fn property_type(&self) -> $crate::model::PropertyType {
                self.variant().tag()
            }

            /// Remote identifier, absent on creation payloads.
            pub fn id(&self) -> Option<&$crate::types::PropertyId> {
                match self {
                    $(Self::$case(p) => $crate::model::Catalogued::id(p)),+
                }
            }
        }

        impl serde::Serialize for $family {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                match self {
                    $(Self::$case(p) => {
                        serde::Serialize::serialize(&$crate::codec::Tagged::new(p), serializer)
                    }),+
                }
            }
        }

        $(
            impl From<$ty> for $family {
                fn from(p: $ty) -> Self {
                    Self::$case(p)
                }
            }
        )+
    };
}

mod container;
mod schema;
mod shared;
mod value;

pub use container::{AnyProperties, DatabaseProperties, PageProperties, Properties};
pub use schema::*;
pub use shared::*;
pub use value::*;

/// The `"type"` discriminator vocabulary, shared by both contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Title,
    RichText,
    Number,
    Select,
    MultiSelect,
    Date,
    Formula,
    Relation,
    Rollup,
    People,
    Files,
    Checkbox,
    Url,
    Email,
    PhoneNumber,
    CreatedTime,
    CreatedBy,
    LastEditedTime,
    LastEditedBy,
}

impl PropertyType {
    pub const ALL: [PropertyType; 19] = [
        PropertyType::Title,
        PropertyType::RichText,
        PropertyType::Number,
        PropertyType::Select,
        PropertyType::MultiSelect,
        PropertyType::Date,
        PropertyType::Formula,
        PropertyType::Relation,
        PropertyType::Rollup,
        PropertyType::People,
        PropertyType::Files,
        PropertyType::Checkbox,
        PropertyType::Url,
        PropertyType::Email,
        PropertyType::PhoneNumber,
        PropertyType::CreatedTime,
        PropertyType::CreatedBy,
        PropertyType::LastEditedTime,
        PropertyType::LastEditedBy,
    ];

    /// Wire name of the tag. Also the name of the field holding the payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Title => "title",
            PropertyType::RichText => "rich_text",
            PropertyType::Number => "number",
            PropertyType::Select => "select",
            PropertyType::MultiSelect => "multi_select",
            PropertyType::Date => "date",
            PropertyType::Formula => "formula",
            PropertyType::Relation => "relation",
            PropertyType::Rollup => "rollup",
            PropertyType::People => "people",
            PropertyType::Files => "files",
            PropertyType::Checkbox => "checkbox",
            PropertyType::Url => "url",
            PropertyType::Email => "email",
            PropertyType::PhoneNumber => "phone_number",
            PropertyType::CreatedTime => "created_time",
            PropertyType::CreatedBy => "created_by",
            PropertyType::LastEditedTime => "last_edited_time",
            PropertyType::LastEditedBy => "last_edited_by",
        }
    }
}

impl std::str::FromStr for PropertyType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownPropertyType(s.to_string()))
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Which kind of object a property map was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKind {
    /// A database's schema: per-property configuration.
    Database,
    /// A page: per-property values for one record.
    Page,
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextKind::Database => write!(f, "database"),
            ContextKind::Page => write!(f, "page"),
        }
    }
}

/// Identity of one concrete payload shape in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    TitleSchema,
    TitleValue,
    RichTextList,
    RichTextEmpty,
    Number,
    SelectSchema,
    SelectValue,
    MultiSelectSchema,
    MultiSelectValue,
    DateSchema,
    DateValue,
    FormulaSchema,
    FormulaValue,
    Relation,
    Rollup,
    PeopleSchema,
    PeopleValue,
    FilesSchema,
    FilesValue,
    CheckboxSchema,
    CheckboxValue,
    UrlSchema,
    UrlValue,
    EmailSchema,
    EmailValue,
    PhoneNumberSchema,
    PhoneNumberValue,
    CreatedTime,
    CreatedBy,
    LastEditedTime,
    LastEditedBy,
}

impl Variant {
    /// The tag every instance of this variant reports.
    pub fn tag(&self) -> PropertyType {
        match self {
            Variant::TitleSchema | Variant::TitleValue => PropertyType::Title,
            Variant::RichTextList | Variant::RichTextEmpty => PropertyType::RichText,
            Variant::Number => PropertyType::Number,
            Variant::SelectSchema | Variant::SelectValue => PropertyType::Select,
            Variant::MultiSelectSchema | Variant::MultiSelectValue => PropertyType::MultiSelect,
            Variant::DateSchema | Variant::DateValue => PropertyType::Date,
            Variant::FormulaSchema | Variant::FormulaValue => PropertyType::Formula,
            Variant::Relation => PropertyType::Relation,
            Variant::Rollup => PropertyType::Rollup,
            Variant::PeopleSchema | Variant::PeopleValue => PropertyType::People,
            Variant::FilesSchema | Variant::FilesValue => PropertyType::Files,
            Variant::CheckboxSchema | Variant::CheckboxValue => PropertyType::Checkbox,
            Variant::UrlSchema | Variant::UrlValue => PropertyType::Url,
            Variant::EmailSchema | Variant::EmailValue => PropertyType::Email,
            Variant::PhoneNumberSchema | Variant::PhoneNumberValue => PropertyType::PhoneNumber,
            Variant::CreatedTime => PropertyType::CreatedTime,
            Variant::CreatedBy => PropertyType::CreatedBy,
            Variant::LastEditedTime => PropertyType::LastEditedTime,
            Variant::LastEditedBy => PropertyType::LastEditedBy,
        }
    }

    /// The context this variant belongs to, or `None` when both contexts
    /// decode the tag into it.
    pub fn context(&self) -> Option<ContextKind> {
        match self {
            Variant::TitleSchema
            | Variant::SelectSchema
            | Variant::MultiSelectSchema
            | Variant::DateSchema
            | Variant::FormulaSchema
            | Variant::PeopleSchema
            | Variant::FilesSchema
            | Variant::CheckboxSchema
            | Variant::UrlSchema
            | Variant::EmailSchema
            | Variant::PhoneNumberSchema => Some(ContextKind::Database),
            Variant::TitleValue
            | Variant::SelectValue
            | Variant::MultiSelectValue
            | Variant::DateValue
            | Variant::FormulaValue
            | Variant::PeopleValue
            | Variant::FilesValue
            | Variant::CheckboxValue
            | Variant::UrlValue
            | Variant::EmailValue
            | Variant::PhoneNumberValue => Some(ContextKind::Page),
            Variant::RichTextList
            | Variant::RichTextEmpty
            | Variant::Number
            | Variant::Relation
            | Variant::Rollup
            | Variant::CreatedTime
            | Variant::CreatedBy
            | Variant::LastEditedTime
            | Variant::LastEditedBy => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A payload struct with a fixed place in the catalogue.
///
/// The tag is not stored in the struct; it is implied by `VARIANT` and
/// written back by the encoder.
pub trait Catalogued: Serialize + DeserializeOwned {
    const VARIANT: Variant;

    fn id(&self) -> Option<&PropertyId>;
}
