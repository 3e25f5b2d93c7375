// src/types/rich_text.rs
//! Rich text spans as they appear inside title and rich_text properties.
//!
//! Every field is optional on the wire. Decoding fills gaps with defaults and
//! encoding skips them, so a span survives decode → encode → decode unchanged.

use super::{Color, Date, PageId, User};
use serde::{Deserialize, Serialize};

/// The kind of content a rich text span carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RichTextKind {
    Text,
    Mention,
    Equation,
}

/// Rich text item with formatting annotations.
///
/// `kind` tells which of `text`, `mention`, or `equation` is populated;
/// `plain_text` is the fallback rendering for any kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RichText {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<RichTextKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mention: Option<Mention>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equation: Option<Equation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub plain_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl RichText {
    /// Create a plain text span, the shape creation payloads use.
    pub fn plain(text: &str) -> Self {
        Self {
            kind: Some(RichTextKind::Text),
            text: Some(TextContent {
                content: text.to_string(),
                link: None,
            }),
            plain_text: text.to_string(),
            ..Self::default()
        }
    }

    /// Best-effort readable text: `plain_text`, else the text content,
    /// else the equation source.
    pub fn as_text(&self) -> &str {
        if !self.plain_text.is_empty() {
            return &self.plain_text;
        }
        if let Some(text) = &self.text {
            return &text.content;
        }
        self.equation
            .as_ref()
            .map(|eq| eq.expression.as_str())
            .unwrap_or("")
    }
}

/// Concatenate the readable text of a run of spans.
pub fn plain_text_of(spans: &[RichText]) -> String {
    spans.iter().map(RichText::as_text).collect()
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextContent {
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
}

/// An inline mention. Only the payload matching `kind` is populated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Mention {
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PageReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_preview: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Equation {
    #[serde(default)]
    pub expression: String,
}

/// Reference to another page (or database) by id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PageReference {
    #[serde(default)]
    pub id: PageId,
}

impl PageReference {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: PageId::from_raw(id),
        }
    }
}
