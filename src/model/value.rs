// src/model/value.rs
//! Page-instance variants: the value each property holds on one record.
//!
//! Nullable values are written back as explicit `null` so an encoded page
//! property can clear a value on update.

use super::{
    CreatedByProperty, CreatedTimeProperty, EmptyRichTextProperty, LastEditedByProperty,
    LastEditedTimeProperty, NumberProperty, RelationProperty, RichTextProperty, RollupProperty,
};
use crate::types::{
    null_as_default, plain_text_of, Date, File, PropertyId, RichText, SelectOption, User,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TitleValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: Vec<RichText>,
}

impl TitleValue {
    pub fn plain_text(&self) -> String {
        plain_text_of(&self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default)]
    pub select: Option<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MultiSelectValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub multi_select: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default)]
    pub date: Option<Date>,
}

/// Computed result of a formula, tagged by its `type` field.
///
/// Encoding always writes the tag. Decoding tolerates a missing or
/// unrecognised tag by picking the first populated result field, and falls
/// back to an empty string result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormulaResult {
    String {
        #[serde(default)]
        string: Option<String>,
    },
    Number {
        #[serde(default)]
        number: Option<f64>,
    },
    Boolean {
        #[serde(default)]
        boolean: Option<bool>,
    },
    Date {
        #[serde(default)]
        date: Option<Date>,
    },
}

impl Default for FormulaResult {
    fn default() -> Self {
        FormulaResult::String { string: None }
    }
}

/// Flat wire form of a formula result, every field optional.
#[derive(Debug, Default, Deserialize)]
struct RawFormulaResult {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    string: Option<String>,
    #[serde(default)]
    number: Option<f64>,
    #[serde(default)]
    boolean: Option<bool>,
    #[serde(default)]
    date: Option<Date>,
}

impl From<RawFormulaResult> for FormulaResult {
    fn from(raw: RawFormulaResult) -> Self {
        let RawFormulaResult {
            kind,
            string,
            number,
            boolean,
            date,
        } = raw;
        match kind.as_deref() {
            Some("string") => FormulaResult::String { string },
            Some("number") => FormulaResult::Number { number },
            Some("boolean") => FormulaResult::Boolean { boolean },
            Some("date") => FormulaResult::Date { date },
            _ if string.is_some() => FormulaResult::String { string },
            _ if number.is_some() => FormulaResult::Number { number },
            _ if boolean.is_some() => FormulaResult::Boolean { boolean },
            _ if date.is_some() => FormulaResult::Date { date },
            _ => FormulaResult::default(),
        }
    }
}

impl<'de> Deserialize<'de> for FormulaResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Option::<RawFormulaResult>::deserialize(deserializer)?;
        Ok(raw.unwrap_or_default().into())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormulaValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default)]
    pub formula: FormulaResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeopleValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub people: Vec<User>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilesValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: Vec<File>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckboxValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub checkbox: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UrlValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default)]
    pub url: Option<String>,
}

impl UrlValue {
    /// The URL, if set and well-formed.
    pub fn parsed(&self) -> Option<url::Url> {
        self.url.as_deref().and_then(|raw| url::Url::parse(raw).ok())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmailValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhoneNumberValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

catalogued! {
    TitleValue => TitleValue,
    SelectValue => SelectValue,
    MultiSelectValue => MultiSelectValue,
    DateValue => DateValue,
    FormulaValue => FormulaValue,
    PeopleValue => PeopleValue,
    FilesValue => FilesValue,
    CheckboxValue => CheckboxValue,
    UrlValue => UrlValue,
    EmailValue => EmailValue,
    PhoneNumberValue => PhoneNumberValue,
}

property_family! {
    /// A property value as it appears on a page.
    PageProperty {
        Title(TitleValue),
        RichText(RichTextProperty),
        EmptyRichText(EmptyRichTextProperty),
        Number(NumberProperty),
        Select(SelectValue),
        MultiSelect(MultiSelectValue),
        Date(DateValue),
        Formula(FormulaValue),
        Relation(RelationProperty),
        Rollup(RollupProperty),
        People(PeopleValue),
        Files(FilesValue),
        Checkbox(CheckboxValue),
        Url(UrlValue),
        Email(EmailValue),
        PhoneNumber(PhoneNumberValue),
        CreatedTime(CreatedTimeProperty),
        CreatedBy(CreatedByProperty),
        LastEditedTime(LastEditedTimeProperty),
        LastEditedBy(LastEditedByProperty),
    }
}

impl PageProperty {
    /// Readable text for text-like values (title, rich_text, url, email,
    /// phone_number, select).
    pub fn as_plain_text(&self) -> Option<String> {
        match self {
            PageProperty::Title(p) => Some(p.plain_text()),
            PageProperty::RichText(p) => Some(plain_text_of(&p.rich_text)),
            PageProperty::EmptyRichText(_) => Some(String::new()),
            PageProperty::Url(p) => p.url.clone(),
            PageProperty::Email(p) => p.email.clone(),
            PageProperty::PhoneNumber(p) => p.phone_number.clone(),
            PageProperty::Select(p) => p.select.as_ref().map(|o| o.name.clone()),
            _ => None,
        }
    }
}
