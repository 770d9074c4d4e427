pub mod builder;

use serde::Serialize;

/// One renderable unit of a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Section {
    /// Small-print line, e.g. timestamp and hostname.
    Context { label: String },
    Divider,
    /// Markdown body text.
    Body { markdown: String },
}

impl Section {
    pub fn context(label: impl Into<String>) -> Self {
        Section::Context {
            label: label.into(),
        }
    }

    pub fn body(markdown: impl Into<String>) -> Self {
        Section::Body {
            markdown: markdown.into(),
        }
    }

    /// Markdown text of a `Body`, `None` for the other variants.
    pub fn markdown(&self) -> Option<&str> {
        match self {
            Section::Body { markdown } => Some(markdown),
            _ => None,
        }
    }
}

/// A fully composed message, ready for the wire.
///
/// Constructed through [`NotificationPayloadBuilder`]; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationPayload {
    summary_text: String,
    sections: Vec<Section>,
}

impl NotificationPayload {
    /// Plain-text fallback for receivers that do not render sections.
    pub fn summary_text(&self) -> &str {
        &self.summary_text
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The last `Body` section, which carries the piped-in event text.
    pub fn last_body(&self) -> Option<&str> {
        self.sections.iter().rev().find_map(Section::markdown)
    }
}
