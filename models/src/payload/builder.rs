use crate::error::model_error::ModelError;
use crate::payload::{NotificationPayload, Section};
use crate::ErrorLocation;

use std::panic::Location;

/// Builder for [`NotificationPayload`].
///
/// Sections are kept in the order they are added.
#[derive(Debug, Default)]
pub struct NotificationPayloadBuilder {
    summary_text: Option<String>,
    sections: Vec<Section>,
}

impl NotificationPayloadBuilder {
    pub fn with_summary_text(mut self, text: impl Into<String>) -> Self {
        self.summary_text = Some(text.into());
        self
    }

    pub fn with_context(mut self, label: impl Into<String>) -> Self {
        self.sections.push(Section::context(label));
        self
    }

    pub fn with_divider(mut self) -> Self {
        self.sections.push(Section::Divider);
        self
    }

    pub fn with_body(mut self, markdown: impl Into<String>) -> Self {
        self.sections.push(Section::body(markdown));
        self
    }

    /// Build the payload with validation.
    ///
    /// The summary text may be empty (nothing was piped in) but must be set.
    #[track_caller]
    pub fn build(self) -> Result<NotificationPayload, ModelError> {
        let summary_text = self.summary_text.ok_or_else(|| ModelError::Validation {
            message: String::from("Summary text is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if self.sections.is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Payload needs at least one section"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(Section::Divider) = self.sections.first() {
            return Err(ModelError::Validation {
                message: String::from("Payload cannot start with a divider"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(NotificationPayload {
            summary_text,
            sections: self.sections,
        })
    }
}
