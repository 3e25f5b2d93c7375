// src/model/schema.rs
//! Database-schema variants: the configuration each property carries on a
//! database object. Tags without configuration carry the `{}` placeholder.

use super::{
    CreatedByProperty, CreatedTimeProperty, EmptyRichTextProperty, LastEditedByProperty,
    LastEditedTimeProperty, NumberProperty, RelationProperty, RichTextProperty, RollupProperty,
};
use crate::types::{null_as_default, EmptyMarker, PropertyId, RichText, SelectOption};
use serde::{Deserialize, Serialize};

/// Declares schema structs whose only payload is the placeholder marker.
macro_rules! placeholder_schema {
    ($($(#[$meta:meta])* $name:ident { $field:ident } => $variant:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
            pub struct $name {
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub id: Option<PropertyId>,
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub name: Option<String>,
                #[serde(default, deserialize_with = "null_as_default")]
                pub $field: EmptyMarker,
            }

            catalogued!($name => $variant);
        )+
    };
}

/// The title column. Its configuration is a single (usually empty) span.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TitleSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: RichText,
}

/// Options offered by a select or multi_select column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Vec<SelectOption>,
}

impl SelectConfig {
    pub fn option_named(&self, name: &str) -> Option<&SelectOption> {
        self.options.iter().find(|option| option.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub select: SelectConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MultiSelectSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub multi_select: SelectConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormulaConfig {
    #[serde(default)]
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormulaSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub formula: FormulaConfig,
}

placeholder_schema! {
    DateSchema { date } => DateSchema;
    PeopleSchema { people } => PeopleSchema;
    FilesSchema { files } => FilesSchema;
    CheckboxSchema { checkbox } => CheckboxSchema;
    UrlSchema { url } => UrlSchema;
    EmailSchema { email } => EmailSchema;
    PhoneNumberSchema { phone_number } => PhoneNumberSchema;
}

catalogued! {
    TitleSchema => TitleSchema,
    SelectSchema => SelectSchema,
    MultiSelectSchema => MultiSelectSchema,
    FormulaSchema => FormulaSchema,
}

property_family! {
    /// A property as defined on a database schema.
    DatabaseProperty {
        Title(TitleSchema),
        RichText(RichTextProperty),
        EmptyRichText(EmptyRichTextProperty),
        Number(NumberProperty),
        Select(SelectSchema),
        MultiSelect(MultiSelectSchema),
        Date(DateSchema),
        Formula(FormulaSchema),
        Relation(RelationProperty),
        Rollup(RollupProperty),
        People(PeopleSchema),
        Files(FilesSchema),
        Checkbox(CheckboxSchema),
        Url(UrlSchema),
        Email(EmailSchema),
        PhoneNumber(PhoneNumberSchema),
        CreatedTime(CreatedTimeProperty),
        CreatedBy(CreatedByProperty),
        LastEditedTime(LastEditedTimeProperty),
        LastEditedBy(LastEditedByProperty),
    }
}

impl DatabaseProperty {
    /// Column name the API echoed inside the schema object, if any.
    pub fn name(&self) -> Option<&str> {
        let name = match self {
            DatabaseProperty::Title(p) => &p.name,
            DatabaseProperty::RichText(p) => &p.name,
            DatabaseProperty::EmptyRichText(p) => &p.name,
            DatabaseProperty::Number(p) => &p.name,
            DatabaseProperty::Select(p) => &p.name,
            DatabaseProperty::MultiSelect(p) => &p.name,
            DatabaseProperty::Date(p) => &p.name,
            DatabaseProperty::Formula(p) => &p.name,
            DatabaseProperty::Relation(p) => &p.name,
            DatabaseProperty::Rollup(p) => &p.name,
            DatabaseProperty::People(p) => &p.name,
            DatabaseProperty::Files(p) => &p.name,
            DatabaseProperty::Checkbox(p) => &p.name,
            DatabaseProperty::Url(p) => &p.name,
            DatabaseProperty::Email(p) => &p.name,
            DatabaseProperty::PhoneNumber(p) => &p.name,
            DatabaseProperty::CreatedTime(p) => &p.name,
            DatabaseProperty::CreatedBy(p) => &p.name,
            DatabaseProperty::LastEditedTime(p) => &p.name,
            DatabaseProperty::LastEditedBy(p) => &p.name,
        };
        name.as_deref()
    }

    /// Options of a select or multi_select column.
    pub fn options(&self) -> Option<&[SelectOption]> {
        match self {
            DatabaseProperty::Select(p) => Some(&p.select.options),
            DatabaseProperty::MultiSelect(p) => Some(&p.multi_select.options),
            _ => None,
        }
    }
}
