// src/codec/mod.rs
//! Two-phase decoding and encoding of property maps.
//!
//! Decoding first reads the input into a generic JSON value, then for every
//! entry sniffs the variant (tag + context + optional structural check) and
//! materializes the entry into that variant's struct. Encoding writes every
//! variant back with its own `"type"` tag.

mod decoder;
mod dispatch;
mod encoder;
mod sniffer;

pub use decoder::{
    decode, decode_database_properties, decode_entry, decode_page_properties,
    decode_properties, decode_properties_value,
};
pub(crate) use decoder::nested_page_properties;
pub use dispatch::{DispatchTable, Materializer};
pub use encoder::{encode, encode_pretty, encode_value, Tagged};
pub use sniffer::{sniff, ShapeRule, SHAPE_RULES};

use crate::model::{ContextKind, DatabaseProperty, PageProperty};
use serde::Serialize;
use std::fmt::Debug;

/// Binds a context to its property family and dispatch table.
pub trait PropertyContext:
    Debug + Clone + Copy + PartialEq + Eq + Default + Send + Sync + 'static
{
    type Property: Debug + Clone + PartialEq + Serialize + Send + Sync + 'static;

    const KIND: ContextKind;

    fn dispatch_table() -> &'static DispatchTable<Self::Property>;
}

/// Database-schema context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatabaseContext;

/// Page-instance context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageContext;

impl PropertyContext for DatabaseContext {
    type Property = DatabaseProperty;

    const KIND: ContextKind = ContextKind::Database;

    fn dispatch_table() -> &'static DispatchTable<DatabaseProperty> {
        &*dispatch::DATABASE_TABLE
    }
}

impl PropertyContext for PageContext {
    type Property = PageProperty;

    const KIND: ContextKind = ContextKind::Page;

    fn dispatch_table() -> &'static DispatchTable<PageProperty> {
        &*dispatch::PAGE_TABLE
    }
}
