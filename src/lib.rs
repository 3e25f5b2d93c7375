// src/lib.rs
//! notion-props library: decodes and encodes Notion property maps.
//!
//! A Notion database carries a *schema* (`properties` on the database
//! object) and each page carries *values* (`properties` on the page object).
//! Both are JSON objects keyed by property name whose entries are
//! discriminated by a `"type"` tag, but the same tag means a different
//! payload in each context. This crate reads either map into a closed,
//! strongly-typed model and writes it back.
//!
//! # Public API
//!
//! - **Error handling**: `PropertyError`, `JsonShape`, `RawTag`, `ValidationError`
//! - **Configuration**: `DecodeOptions`, `InspectConfig`
//! - **Codec**: `decode_page_properties`, `decode_database_properties`, `encode`, ...
//! - **Model**: `PageProperty`, `DatabaseProperty`, `Properties`, `PropertyType`, `Variant`
//! - **Domain types**: `RichText`, `SelectOption`, `Date`, `User`, `File`, ids

#[cfg(feature = "bench")]
pub mod codec;
#[cfg(not(feature = "bench"))]
mod codec;

mod config;
mod constants;
mod error;

#[cfg(feature = "bench")]
pub mod model;
#[cfg(not(feature = "bench"))]
mod model;

mod types;

// --- Error Handling ---
pub use crate::error::{JsonShape, PropertyError, RawTag, Result};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, ContextArg, DecodeOptions, InspectConfig, OutputMode};
pub use crate::constants::{PARALLEL_DECODE_THRESHOLD, SUMMARY_VALUE_PREVIEW_LENGTH};

// --- Codec ---
pub use crate::codec::{
    decode, decode_database_properties, decode_entry, decode_page_properties, decode_properties,
    decode_properties_value, encode, encode_pretty, encode_value, sniff, DatabaseContext,
    DispatchTable, Materializer, PageContext, PropertyContext, ShapeRule, Tagged, SHAPE_RULES,
};

// --- Model: tags, identities, containers ---
pub use crate::model::{
    AnyProperties, Catalogued, ContextKind, DatabaseProperties, DatabaseProperty, PageProperties,
    PageProperty, Properties, PropertyType, Variant,
};

// --- Model: context-independent variants ---
pub use crate::model::{
    CreatedByProperty, CreatedTimeProperty, EmptyRichTextProperty, LastEditedByProperty,
    LastEditedTimeProperty, NumberConfig, NumberFormat, NumberPayload, NumberProperty,
    RelationConfig, RelationPayload, RelationProperty, RichTextProperty, Rollup, RollupFunction,
    RollupKind, RollupProperty, RollupValue, Timestamp,
};

// --- Model: schema variants ---
pub use crate::model::{
    CheckboxSchema, DateSchema, EmailSchema, FilesSchema, FormulaConfig, FormulaSchema,
    MultiSelectSchema, PeopleSchema, PhoneNumberSchema, SelectConfig, SelectSchema, TitleSchema,
    UrlSchema,
};

// --- Model: value variants ---
pub use crate::model::{
    CheckboxValue, DateValue, EmailValue, FilesValue, FormulaResult, FormulaValue,
    MultiSelectValue, PeopleValue, PhoneNumberValue, SelectValue, TitleValue, UrlValue,
};

// --- Domain Types ---
pub use crate::types::{
    plain_text_of, Annotations, Color, DatabaseId, Date, EmptyMarker, Equation, ExternalFile,
    File, FileKind, HostedFile, Id, Link, Mention, PageId, PageReference, Person, PropertyId,
    PropertyName, RichText, RichTextKind, SelectOption, TextContent, User, UserId, UserKind,
};
