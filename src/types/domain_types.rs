// src/types/domain_types.rs
//! Leaf value types shared by the property catalogue.

use super::{Color, UserId};
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The name of a property on a Notion page or database.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyName(String);

impl PropertyName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::borrow::Borrow<str> for PropertyName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for PropertyName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PropertyName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Placeholder object (`{}`) the API sends where a property has no
/// configuration or no instance data. Any fields it carries are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmptyMarker {}

/// Select option. Owned by the select or multi_select property it sits in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Color::is_default")]
    pub color: Color,
}

impl SelectOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: Color) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            color,
        }
    }
}

/// Date value. `start` and `end` stay raw ISO 8601 strings (date or
/// date-time); a missing `end` means a single point in time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Date {
    #[serde(default)]
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl Date {
    pub fn on(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            ..Self::default()
        }
    }

    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: Some(end.into()),
            time_zone: None,
        }
    }

    pub fn is_range(&self) -> bool {
        self.end.as_deref().is_some_and(|end| !end.is_empty())
    }

    /// Calendar day of `start`, whether it was sent as a date or a date-time.
    pub fn start_date(&self) -> Option<NaiveDate> {
        calendar_day(&self.start)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end.as_deref().and_then(calendar_day)
    }

    /// `start` as an instant, when it carries a time component.
    pub fn start_datetime(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.start).ok()
    }
}

fn calendar_day(raw: &str) -> Option<NaiveDate> {
    let day = raw.get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserKind {
    Person,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Weak reference to a user. Often only `object` and `id` are present.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(default, skip_serializing_if = "UserId::is_empty")]
    pub id: UserId,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<UserKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
}

impl User {
    pub fn reference(id: impl Into<String>) -> Self {
        Self {
            object: Some("user".to_string()),
            id: UserId::from_raw(id),
            ..Self::default()
        }
    }

    pub fn email(&self) -> Option<&str> {
        self.person.as_ref().and_then(|p| p.email.as_deref())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, self.email()) {
            (Some(name), _) => write!(f, "{}", name),
            (None, Some(email)) => write!(f, "{}", email),
            (None, None) => write!(f, "User {}", self.id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    External,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExternalFile {
    #[serde(default)]
    pub url: String,
}

/// File hosted by Notion; the signed URL stops working after `expiry_time`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HostedFile {
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_time: Option<DateTime<Utc>>,
}

/// File reference: a name plus either an external or a hosted URL.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct File {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<FileKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<ExternalFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<HostedFile>,
}

impl File {
    pub fn external(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: Some(FileKind::External),
            external: Some(ExternalFile { url: url.into() }),
            file: None,
        }
    }

    pub fn hosted(
        name: impl Into<String>,
        url: impl Into<String>,
        expiry_time: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: Some(FileKind::File),
            external: None,
            file: Some(HostedFile {
                url: url.into(),
                expiry_time,
            }),
        }
    }

    /// The URL for whichever source is populated.
    pub fn url(&self) -> Option<&str> {
        match self.kind {
            Some(FileKind::External) => self.external.as_ref().map(|e| e.url.as_str()),
            Some(FileKind::File) => self.file.as_ref().map(|f| f.url.as_str()),
            None => self
                .external
                .as_ref()
                .map(|e| e.url.as_str())
                .or_else(|| self.file.as_ref().map(|f| f.url.as_str())),
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.file
            .as_ref()
            .and_then(|f| f.expiry_time)
            .is_some_and(|expiry| expiry <= now)
    }
}
