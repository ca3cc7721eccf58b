//! Core prompt data structures and validation.
//!
//! A [`Prompt`] is a record confirmed by the remote service: it always
//! carries a service-assigned id. A [`PromptDraft`] is a prompt waiting to
//! be created or applied as an update; it can only be built through
//! [`PromptDraft::new`], which rejects empty fields before any network
//! round trip is attempted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A saved prompt, as stored by the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    /// Opaque identifier assigned by the service on insert; stable for the
    /// lifetime of the record and never reused.
    pub id: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("prompt body must not be empty")]
    EmptyBody,
}

/// A title and body pair that passed validation but has no id yet.
///
/// The in-memory collection never holds drafts; only service-confirmed
/// [`Prompt`]s with an assigned id.
#[derive(Debug, Clone, Serialize)]
pub struct PromptDraft {
    title: String,
    body: String,
}

impl PromptDraft {
    /// Validates and builds a draft. Both fields are required; an empty
    /// field is rejected here, synchronously.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<PromptDraft, ValidationError> {
        let title = title.into();
        let body = body.into();

        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if body.is_empty() {
            return Err(ValidationError::EmptyBody);
        }

        Ok(PromptDraft { title, body })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_draft_holds_fields() {
        let draft = PromptDraft::new("Weekly Meal Plan", "Create a 7-day meal plan")
            .expect("Failed to create draft");

        assert_eq!("Weekly Meal Plan", draft.title());
        assert_eq!("Create a 7-day meal plan", draft.body());
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let result = PromptDraft::new("", "some body");
        assert_eq!(Err(ValidationError::EmptyTitle), result.map(|_| ()));
    }

    #[test]
    fn test_empty_body_is_rejected() {
        let result = PromptDraft::new("some title", "");
        assert_eq!(Err(ValidationError::EmptyBody), result.map(|_| ()));
    }

    #[test]
    fn test_whitespace_fields_are_accepted() {
        // Only the strictly empty string is rejected; whitespace content is
        // significant and belongs to the user.
        let draft = PromptDraft::new(" ", "\n").expect("Failed to create draft");
        assert_eq!(" ", draft.title());
    }

    #[test]
    fn test_draft_serializes_without_an_id() {
        let draft = PromptDraft::new("New", "Body").expect("Failed to create draft");
        let value = serde_json::to_value(&draft).expect("Failed to serialize draft");

        assert_eq!(json!({"title": "New", "body": "Body"}), value);
    }

    #[test]
    fn test_prompt_deserializes_from_service_record() {
        let record = json!({
            "id": "p1",
            "title": "8K Sci-Fi Warrior",
            "body": "A female cyborg warrior in a futuristic city",
            "created_at": "2025-09-25T10:30:00Z"
        });

        let prompt: Prompt =
            serde_json::from_value(record).expect("Failed to deserialize prompt");

        assert_eq!("p1", prompt.id);
        assert_eq!("8K Sci-Fi Warrior", prompt.title);
        assert_eq!("A female cyborg warrior in a futuristic city", prompt.body);
    }
}
