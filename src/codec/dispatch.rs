// src/codec/dispatch.rs
//! Per-context dispatch tables.
//!
//! Each table maps a tag to the variant it selects by default in its context,
//! and each variant valid in the context to the function that materializes
//! it. Tables are built once on first use and never mutated afterwards.

use crate::model::{
    CheckboxSchema, CheckboxValue, Catalogued, ContextKind, CreatedByProperty,
    CreatedTimeProperty, DatabaseProperty, DateSchema, DateValue, EmailSchema, EmailValue,
    EmptyRichTextProperty, FilesSchema, FilesValue, FormulaSchema, FormulaValue,
    LastEditedByProperty, LastEditedTimeProperty, MultiSelectSchema, MultiSelectValue,
    NumberProperty, PageProperty, PeopleSchema, PeopleValue, PhoneNumberSchema, PhoneNumberValue,
    PropertyType, RelationProperty, RichTextProperty, RollupProperty, SelectSchema, SelectValue,
    TitleSchema, TitleValue, UrlSchema, UrlValue, Variant,
};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

/// Builds a property of family `P` from one raw entry.
pub type Materializer<P> = fn(Value) -> Result<P, serde_json::Error>;

fn materialize<T, P>(value: Value) -> Result<P, serde_json::Error>
where
    T: Catalogued,
    P: From<T>,
{
    serde_json::from_value::<T>(value).map(P::from)
}

/// Immutable tag → variant → materializer lookup for one context.
pub struct DispatchTable<P> {
    context: ContextKind,
    by_tag: HashMap<PropertyType, Variant>,
    by_variant: HashMap<Variant, Materializer<P>>,
}

impl<P: 'static> DispatchTable<P> {
    fn new(context: ContextKind) -> Self {
        Self {
            context,
            by_tag: HashMap::new(),
            by_variant: HashMap::new(),
        }
    }

    /// Register `T` as the variant its tag selects in this context.
    fn route<T>(mut self) -> Self
    where
        T: Catalogued,
        P: From<T>,
    {
        self.by_tag.insert(T::VARIANT.tag(), T::VARIANT);
        self.alternative::<T>()
    }

    /// Register `T` as reachable only through a structural sniff.
    fn alternative<T>(mut self) -> Self
    where
        T: Catalogued,
        P: From<T>,
    {
        self.by_variant
            .insert(T::VARIANT, materialize::<T, P> as Materializer<P>);
        self
    }

    pub fn context(&self) -> ContextKind {
        self.context
    }

    /// Default variant for `tag`, `None` when the tag is not in the catalogue.
    pub fn variant_for(&self, tag: PropertyType) -> Option<Variant> {
        self.by_tag.get(&tag).copied()
    }

    pub fn materializer(&self, variant: Variant) -> Option<Materializer<P>> {
        self.by_variant.get(&variant).copied()
    }

    pub fn supports(&self, variant: Variant) -> bool {
        self.by_variant.contains_key(&variant)
    }

    pub fn tags(&self) -> impl Iterator<Item = PropertyType> + '_ {
        self.by_tag.keys().copied()
    }
}

pub(crate) static DATABASE_TABLE: Lazy<DispatchTable<DatabaseProperty>> = Lazy::new(|| {
    DispatchTable::new(ContextKind::Database)
        .route::<TitleSchema>()
        .route::<EmptyRichTextProperty>()
        .alternative::<RichTextProperty>()
        .route::<NumberProperty>()
        .route::<SelectSchema>()
        .route::<MultiSelectSchema>()
        .route::<DateSchema>()
        .route::<FormulaSchema>()
        .route::<RelationProperty>()
        .route::<RollupProperty>()
        .route::<PeopleSchema>()
        .route::<FilesSchema>()
        .route::<CheckboxSchema>()
        .route::<UrlSchema>()
        .route::<EmailSchema>()
        .route::<PhoneNumberSchema>()
        .route::<CreatedTimeProperty>()
        .route::<CreatedByProperty>()
        .route::<LastEditedTimeProperty>()
        .route::<LastEditedByProperty>()
});

pub(crate) static PAGE_TABLE: Lazy<DispatchTable<PageProperty>> = Lazy::new(|| {
    DispatchTable::new(ContextKind::Page)
        .route::<TitleValue>()
        .route::<RichTextProperty>()
        .alternative::<EmptyRichTextProperty>()
        .route::<NumberProperty>()
        .route::<SelectValue>()
        .route::<MultiSelectValue>()
        .route::<DateValue>()
        .route::<FormulaValue>()
        .route::<RelationProperty>()
        .route::<RollupProperty>()
        .route::<PeopleValue>()
        .route::<FilesValue>()
        .route::<CheckboxValue>()
        .route::<UrlValue>()
        .route::<EmailValue>()
        .route::<PhoneNumberValue>()
        .route::<CreatedTimeProperty>()
        .route::<CreatedByProperty>()
        .route::<LastEditedTimeProperty>()
        .route::<LastEditedByProperty>()
});
