//! # Prompt Store
//!
//! The single source of truth for the visible prompt collection and the
//! active search term.
//!
//! Every mutation round-trips through the remote storage first; local
//! state changes only after the service confirms. A failed round trip
//! leaves the collection exactly as it was before the call — no partial
//! writes, no ghost entries, no optimistic update to roll back. Outcomes
//! are reported through the [`Notifier`] seam.

use crate::notify::{Notifier, messages};
use crate::prompt::{Prompt, PromptDraft, ValidationError};
use crate::storage::{RemoteStorage, StorageError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Holds the in-memory prompt collection and mediates all mutations
/// against the remote service.
///
/// The collection is ordered newest-created first: successful creations
/// are prepended, updates keep their entry in place, and the initial load
/// takes the service's order wholesale.
pub struct PromptStore {
    storage: Box<dyn RemoteStorage>,
    notifier: Box<dyn Notifier>,
    prompts: Vec<Prompt>,
    search_term: String,
}

impl PromptStore {
    pub fn new(
        storage: impl RemoteStorage + 'static,
        notifier: impl Notifier + 'static,
    ) -> PromptStore {
        PromptStore {
            storage: Box::new(storage),
            notifier: Box::new(notifier),
            prompts: Vec::new(),
            search_term: String::new(),
        }
    }

    /// Replaces the collection with the service's current contents.
    ///
    /// On failure the collection stays empty and the failure is notified;
    /// there is no automatic retry.
    pub async fn load(&mut self) -> Result<(), StoreError> {
        match self.storage.fetch_all().await {
            Ok(prompts) => {
                self.prompts = prompts;
                Ok(())
            }
            Err(err) => {
                tracing::warn!("failed to load prompts: {}", err);
                self.notifier.notify(messages::LOAD_FAILED);
                Err(err.into())
            }
        }
    }

    /// Creates a prompt and prepends the service-confirmed record to the
    /// collection.
    pub async fn create(&mut self, title: &str, body: &str) -> Result<&Prompt, StoreError> {
        let draft = self.draft(title, body)?;
        match self.storage.insert(&draft).await {
            Ok(prompt) => {
                self.prompts.insert(0, prompt);
                self.notifier.notify(messages::PROMPT_ADDED);
                Ok(&self.prompts[0])
            }
            Err(err) => {
                tracing::warn!("failed to add prompt: {}", err);
                self.notifier.notify(messages::ADD_FAILED);
                Err(err.into())
            }
        }
    }

    /// Replaces the title and body of the prompt with the given id. The
    /// entry keeps its position in the collection.
    ///
    /// An id unknown locally is still forwarded to the service and its
    /// verdict trusted; on success there is simply nothing to reflect.
    pub async fn update(&mut self, id: &str, title: &str, body: &str) -> Result<(), StoreError> {
        let draft = self.draft(title, body)?;
        match self.storage.update(id, &draft).await {
            Ok(()) => {
                if let Some(prompt) = self.prompts.iter_mut().find(|p| p.id == id) {
                    prompt.title = draft.title().to_string();
                    prompt.body = draft.body().to_string();
                }
                self.notifier.notify(messages::PROMPT_UPDATED);
                Ok(())
            }
            Err(err) => {
                tracing::warn!("failed to update prompt '{}': {}", id, err);
                self.notifier.notify(messages::UPDATE_FAILED);
                Err(err.into())
            }
        }
    }

    /// Removes the prompt with the given id.
    pub async fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        match self.storage.delete(id).await {
            Ok(()) => {
                self.prompts.retain(|p| p.id != id);
                self.notifier.notify(messages::PROMPT_DELETED);
                Ok(())
            }
            Err(err) => {
                tracing::warn!("failed to delete prompt '{}': {}", id, err);
                self.notifier.notify(messages::DELETE_FAILED);
                Err(err.into())
            }
        }
    }

    // An empty field never reaches the adapter; validation failures are
    // notified like any other failure.
    fn draft(&self, title: &str, body: &str) -> Result<PromptDraft, StoreError> {
        PromptDraft::new(title, body).map_err(|err| {
            self.notifier.notify(messages::FILL_ALL_FIELDS);
            err.into()
        })
    }

    /// Pure local state update; no round trip.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Every prompt whose title contains the search term,
    /// case-insensitively. An empty term matches every prompt.
    pub fn visible_prompts(&self) -> Vec<&Prompt> {
        let needle = self.search_term.to_lowercase();
        self.prompts
            .iter()
            .filter(|prompt| prompt.title.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn get(&self, id: &str) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}
