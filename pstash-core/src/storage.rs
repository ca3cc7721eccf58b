//! # Remote Storage
//!
//! This module defines the contract between the prompt store and the
//! remote persistence service.
//!
//! The main components are:
//! - [`RemoteStorage`] trait - The four round-trip operations the store
//!   uses to reach the service
//! - [`StorageError`] - The opaque failure surfaced by an operation
//!
//! Each call is a single round trip: no retry, no batching, no caching.
//! Validation happens in the store before a call is made, never here.

use crate::prompt::{Prompt, PromptDraft};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("service returned no record for the inserted prompt")]
    EmptyResponse,
    #[error("service rejected the request: {0}")]
    Rejected(String),
}

/// Async interface to the hosted `prompts` table.
#[async_trait]
pub trait RemoteStorage: Send + Sync {
    /// Returns every stored prompt.
    async fn fetch_all(&self) -> Result<Vec<Prompt>, StorageError>;

    /// Creates a record from the draft and returns it with the id the
    /// service assigned.
    async fn insert(&self, draft: &PromptDraft) -> Result<Prompt, StorageError>;

    /// Replaces the title and body of the record with the given id.
    async fn update(&self, id: &str, draft: &PromptDraft) -> Result<(), StorageError>;

    /// Removes the record with the given id.
    async fn delete(&self, id: &str) -> Result<(), StorageError>;
}
