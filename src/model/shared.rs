// src/model/shared.rs
//! Variants that decode the same way in schema and page context.
//!
//! Relation, rollup, number, timestamp and attribution properties are each
//! modeled as one merged type that accepts both the schema shape and the
//! instance shape. Rich text has two shapes that both contexts can send.

use super::PageProperty;
use crate::types::{
    null_as_default, DatabaseId, Date, EmptyMarker, PageReference, PropertyId, RichText, User,
    ValidationError,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// rich_text carrying a list of spans.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RichTextProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rich_text: Vec<RichText>,
}

/// rich_text carrying the `{}` placeholder.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmptyRichTextProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rich_text: EmptyMarker,
}

/// Display format of a number property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    #[default]
    Number,
    NumberWithCommas,
    Percent,
    Dollar,
    CanadianDollar,
    Euro,
    Pound,
    Yen,
    Ruble,
    Rupee,
    Won,
    Yuan,
    Real,
    Lira,
    Rupiah,
    Franc,
    HongKongDollar,
    NewZealandDollar,
    Krona,
    NorwegianKrone,
    MexicanPeso,
    Rand,
    NewTaiwanDollar,
    DanishKrone,
    Zloty,
    Baht,
    Forint,
    Koruna,
    Shekel,
    ChileanPeso,
    PhilippinePeso,
    Dirham,
    ColombianPeso,
    Riyal,
    Ringgit,
    Leu,
    ArgentinePeso,
    UruguayanPeso,
    SingaporeDollar,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NumberConfig {
    #[serde(default)]
    pub format: NumberFormat,
}

/// A page's number or a schema's number format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberPayload {
    Value(f64),
    Format(NumberConfig),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NumberProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub number: Option<NumberPayload>,
}

impl NumberProperty {
    pub fn value(&self) -> Option<f64> {
        match self.number {
            Some(NumberPayload::Value(n)) => Some(n),
            _ => None,
        }
    }

    pub fn format(&self) -> Option<NumberFormat> {
        match self.number {
            Some(NumberPayload::Format(config)) => Some(config.format),
            _ => None,
        }
    }
}

/// Relation target as configured on a database schema.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RelationConfig {
    #[serde(default)]
    pub database_id: DatabaseId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synced_property_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synced_property_name: Option<String>,
}

impl RelationConfig {
    /// The related database, validated and normalized.
    pub fn target_database(&self) -> Result<DatabaseId, ValidationError> {
        DatabaseId::parse(self.database_id.as_str())
    }
}

/// Related pages (page) or relation target (schema).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationPayload {
    Pages(Vec<PageReference>),
    Config(RelationConfig),
}

impl Default for RelationPayload {
    fn default() -> Self {
        RelationPayload::Pages(Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RelationProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub relation: RelationPayload,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
}

impl RelationProperty {
    pub fn pages(&self) -> &[PageReference] {
        match &self.relation {
            RelationPayload::Pages(pages) => pages,
            RelationPayload::Config(_) => &[],
        }
    }

    pub fn config(&self) -> Option<&RelationConfig> {
        match &self.relation {
            RelationPayload::Config(config) => Some(config),
            RelationPayload::Pages(_) => None,
        }
    }
}

/// Shape of a computed rollup result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollupKind {
    Number,
    Date,
    Array,
    Unsupported,
    Incomplete,
}

/// Aggregation applied by a rollup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollupFunction {
    Count,
    CountValues,
    Empty,
    NotEmpty,
    Unique,
    ShowUnique,
    PercentEmpty,
    PercentNotEmpty,
    Sum,
    Average,
    Median,
    Min,
    Max,
    Range,
    EarliestDate,
    LatestDate,
    DateRange,
    Checked,
    Unchecked,
    PercentChecked,
    PercentUnchecked,
    CountPerGroup,
    PercentPerGroup,
    ShowOriginal,
    #[serde(other)]
    Other,
}

/// Rollup configuration and computed result in one flat shape.
///
/// Schema objects populate the relation/rollup property pairs and
/// `function`; page objects populate `kind` and the matching result field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Rollup {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<RollupKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "crate::codec::nested_page_properties"
    )]
    pub array: Vec<PageProperty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<RollupFunction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_property_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollup_property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollup_property_id: Option<String>,
}

/// Typed view of a computed rollup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RollupValue<'a> {
    Number(Option<f64>),
    Date(Option<&'a Date>),
    Array(&'a [PageProperty]),
}

impl Rollup {
    pub fn result(&self) -> Option<RollupValue<'_>> {
        match self.kind? {
            RollupKind::Number => Some(RollupValue::Number(self.number)),
            RollupKind::Date => Some(RollupValue::Date(self.date.as_ref())),
            RollupKind::Array => Some(RollupValue::Array(&self.array)),
            RollupKind::Unsupported | RollupKind::Incomplete => None,
        }
    }

    /// Whether the relation/rollup configuration is populated.
    pub fn is_configured(&self) -> bool {
        self.relation_property_name.is_some()
            || self.relation_property_id.is_some()
            || self.rollup_property_name.is_some()
            || self.rollup_property_id.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RollupProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rollup: Rollup,
}

/// A timestamp (page) or the `{}` placeholder (schema).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    At(DateTime<Utc>),
    Placeholder(EmptyMarker),
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp::Placeholder(EmptyMarker::default())
    }
}

impl Timestamp {
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::At(at) => Some(*at),
            Timestamp::Placeholder(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreatedTimeProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_time: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LastEditedTimeProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_edited_time: Timestamp,
}

/// Author of the record. The schema placeholder decodes to an empty user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreatedByProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_by: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LastEditedByProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PropertyId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_edited_by: User,
}

catalogued! {
    RichTextProperty => RichTextList,
    EmptyRichTextProperty => RichTextEmpty,
    NumberProperty => Number,
    RelationProperty => Relation,
    RollupProperty => Rollup,
    CreatedTimeProperty => CreatedTime,
    LastEditedTimeProperty => LastEditedTime,
    CreatedByProperty => CreatedBy,
    LastEditedByProperty => LastEditedBy,
}
