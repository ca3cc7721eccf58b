//! User-facing notification seam.
//!
//! Every store operation reports its outcome as a short message through
//! the [`Notifier`] trait. How a message is presented is the UI's concern:
//! the reference UI shows one transient message at a time, replacing the
//! current one, and dismisses it after a few seconds; the CLI prints it.

/// Receives short, human-readable outcome messages.
///
/// At most one message is relevant at a time; a new message supersedes the
/// previous one.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// The fixed messages emitted by [`PromptStore`](crate::store::PromptStore)
/// and the CLI copy action.
pub mod messages {
    pub const PROMPT_ADDED: &str = "Prompt added successfully!";
    pub const PROMPT_UPDATED: &str = "Prompt updated successfully!";
    pub const PROMPT_DELETED: &str = "Prompt deleted.";
    pub const PROMPT_COPIED: &str = "Prompt copied to clipboard!";
    pub const FILL_ALL_FIELDS: &str = "Please fill all fields";
    pub const LOAD_FAILED: &str = "Failed to load prompts.";
    pub const ADD_FAILED: &str = "Failed to add prompt.";
    pub const UPDATE_FAILED: &str = "Failed to update prompt.";
    pub const DELETE_FAILED: &str = "Failed to delete prompt.";
}
