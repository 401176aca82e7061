//! Platform-neutral description of a chat embed.
//!
//! Renderers build an [`EmbedView`]; the bot crate converts it into the
//! chat library's builder. Setters truncate to Discord's documented
//! limits so an oversized API value can never make a reply fail.

use chrono::{DateTime, Utc};

pub const TITLE_LIMIT: usize = 256;
pub const DESCRIPTION_LIMIT: usize = 4096;
pub const FIELD_NAME_LIMIT: usize = 256;
pub const FIELD_VALUE_LIMIT: usize = 1024;
pub const FOOTER_LIMIT: usize = 2048;
pub const MAX_FIELDS: usize = 25;
/// Stand-in for blank field text, which Discord rejects.
pub const BLANK_PLACEHOLDER: &str = "-";

/// Who invoked a command; shown as the embed footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requester {
    pub name: String,
    pub avatar_url: Option<String>,
}

impl Requester {
    pub fn footer(&self) -> EmbedFooter {
        self.footer_with_prefix(None)
    }

    /// `"{prefix} · Requested by {name}"`, or the plain form without a prefix.
    pub fn footer_with_prefix(&self, prefix: Option<&str>) -> EmbedFooter {
        let text = match prefix {
            Some(prefix) => format!("{prefix} · Requested by {}", self.name),
            None => format!("Requested by {}", self.name),
        };
        EmbedFooter {
            text,
            icon_url: self.avatar_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedFooter {
    pub text: String,
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedView {
    pub title: String,
    pub description: Option<String>,
    pub color: u32,
    pub thumbnail: Option<String>,
    pub fields: Vec<EmbedField>,
    pub footer: Option<EmbedFooter>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl EmbedView {
    pub fn new(title: impl Into<String>, color: u32) -> Self {
        Self {
            title: clamp(title.into(), TITLE_LIMIT),
            description: None,
            color,
            thumbnail: None,
            fields: Vec::new(),
            footer: None,
            timestamp: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(clamp(description.into(), DESCRIPTION_LIMIT));
        self
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(url.into());
        self
    }

    /// Append a field. Fields beyond [`MAX_FIELDS`] are dropped and a
    /// blank name or value becomes [`BLANK_PLACEHOLDER`].
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        if self.fields.len() < MAX_FIELDS {
            self.fields.push(EmbedField {
                name: clamp(non_empty(name.into()), FIELD_NAME_LIMIT),
                value: clamp(non_empty(value.into()), FIELD_VALUE_LIMIT),
                inline,
            });
        }
        self
    }

    pub fn footer(mut self, mut footer: EmbedFooter) -> Self {
        footer.text = clamp(footer.text, FOOTER_LIMIT);
        self.footer = Some(footer);
        self
    }

    pub fn timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.timestamp = Some(at);
        self
    }
}

fn non_empty(text: String) -> String {
    if text.trim().is_empty() {
        BLANK_PLACEHOLDER.to_string()
    } else {
        text
    }
}

/// Cut `text` to at most `limit` characters, marking the cut with `…`.
fn clamp(text: String, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text;
    }
    let mut cut: String = text.chars().take(limit - 1).collect();
    cut.push('…');
    cut
}
