// src/model/container.rs
//! Property containers: one map from property name to decoded variant per
//! context. A container owns its properties outright and keeps no link to
//! the JSON it was decoded from.

use super::{ContextKind, DatabaseProperty, PageProperty, TitleSchema, TitleValue};
use crate::codec::{DatabaseContext, PageContext, PropertyContext};
use crate::types::PropertyName;
use indexmap::IndexMap;

/// Map from property name to property, for one context.
///
/// Iteration order is stable for as long as the container is not mutated;
/// no other ordering is promised.
#[derive(Debug, Clone, PartialEq)]
pub struct Properties<C: PropertyContext> {
    entries: IndexMap<PropertyName, C::Property>,
}

/// Schema of a database.
pub type DatabaseProperties = Properties<DatabaseContext>;

/// Values of one page.
pub type PageProperties = Properties<PageContext>;

impl<C: PropertyContext> Properties<C> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn context(&self) -> ContextKind {
        C::KIND
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&C::Property> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut C::Property> {
        self.entries.get_mut(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Insert or replace, returning the previous property under `name`.
    pub fn insert(
        &mut self,
        name: impl Into<PropertyName>,
        property: impl Into<C::Property>,
    ) -> Option<C::Property> {
        self.entries.insert(name.into(), property.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<C::Property> {
        self.entries.shift_remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PropertyName, &C::Property)> + '_ {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &PropertyName> + '_ {
        self.entries.keys()
    }
}

impl<C: PropertyContext> Default for Properties<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, K> FromIterator<(K, C::Property)> for Properties<C>
where
    C: PropertyContext,
    K: Into<PropertyName>,
{
    fn from_iter<I: IntoIterator<Item = (K, C::Property)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, property)| (name.into(), property))
                .collect(),
        }
    }
}

impl<C, K> Extend<(K, C::Property)> for Properties<C>
where
    C: PropertyContext,
    K: Into<PropertyName>,
{
    fn extend<I: IntoIterator<Item = (K, C::Property)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(name, property)| (name.into(), property)));
    }
}

impl<C: PropertyContext> IntoIterator for Properties<C> {
    type Item = (PropertyName, C::Property);
    type IntoIter = indexmap::map::IntoIter<PropertyName, C::Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, C: PropertyContext> IntoIterator for &'a Properties<C> {
    type Item = (&'a PropertyName, &'a C::Property);
    type IntoIter = indexmap::map::Iter<'a, PropertyName, C::Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Properties<PageContext> {
    /// The page's title property (every page has exactly one).
    pub fn title(&self) -> Option<(&PropertyName, &TitleValue)> {
        self.iter().find_map(|(name, property)| match property {
            PageProperty::Title(title) => Some((name, title)),
            _ => None,
        })
    }

    /// Plain text of the title property.
    pub fn title_text(&self) -> Option<String> {
        self.title().map(|(_, title)| title.plain_text())
    }
}

impl Properties<DatabaseContext> {
    /// The schema's title column.
    pub fn title(&self) -> Option<(&PropertyName, &TitleSchema)> {
        self.iter().find_map(|(name, property)| match property {
            DatabaseProperty::Title(title) => Some((name, title)),
            _ => None,
        })
    }
}

/// A container decoded under a context chosen at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyProperties {
    Database(DatabaseProperties),
    Page(PageProperties),
}

impl AnyProperties {
    pub fn context(&self) -> ContextKind {
        match self {
            AnyProperties::Database(_) => ContextKind::Database,
            AnyProperties::Page(_) => ContextKind::Page,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            AnyProperties::Database(props) => props.len(),
            AnyProperties::Page(props) => props.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_database(&self) -> Option<&DatabaseProperties> {
        match self {
            AnyProperties::Database(props) => Some(props),
            AnyProperties::Page(_) => None,
        }
    }

    pub fn as_page(&self) -> Option<&PageProperties> {
        match self {
            AnyProperties::Page(props) => Some(props),
            AnyProperties::Database(_) => None,
        }
    }
}
