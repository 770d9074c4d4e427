//! Webhook JSON representation of a [`NotificationPayload`].
//!
//! ```json
//! {"text": "...", "blocks": [
//!   {"type": "context", "elements": [{"type": "mrkdwn", "text": "..."}]},
//!   {"type": "section", "text": {"type": "mrkdwn", "text": "..."}},
//!   {"type": "divider"}
//! ]}
//! ```

use models::{NotificationPayload, Section};

use serde::Serialize;

pub const MARKDOWN_TEXT_TYPE: &str = "mrkdwn";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextObject<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: &'a str,
}

impl<'a> TextObject<'a> {
    pub fn markdown(text: &'a str) -> Self {
        Self {
            kind: MARKDOWN_TEXT_TYPE,
            text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block<'a> {
    Context { elements: Vec<TextObject<'a>> },
    Divider,
    Section { text: TextObject<'a> },
}

impl<'a> From<&'a Section> for Block<'a> {
    fn from(section: &'a Section) -> Self {
        match section {
            Section::Context { label } => Block::Context {
                elements: vec![TextObject::markdown(label)],
            },
            Section::Divider => Block::Divider,
            Section::Body { markdown } => Block::Section {
                text: TextObject::markdown(markdown),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookMessage<'a> {
    pub text: &'a str,
    pub blocks: Vec<Block<'a>>,
}

impl<'a> From<&'a NotificationPayload> for WebhookMessage<'a> {
    fn from(payload: &'a NotificationPayload) -> Self {
        Self {
            text: payload.summary_text(),
            blocks: payload.sections().iter().map(Block::from).collect(),
        }
    }
}
