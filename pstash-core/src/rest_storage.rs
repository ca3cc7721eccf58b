//! # REST Storage
//!
//! This module provides the [`RemoteStorage`] implementation that talks to
//! the hosted data store over its PostgREST-style HTTP API. Prompts live in
//! a table named `prompts`; every request carries the project API key.

use crate::prompt::{Prompt, PromptDraft};
use crate::storage::{RemoteStorage, StorageError};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};

const TABLE: &str = "prompts";

/// A remote prompt storage backed by a PostgREST-style endpoint.
pub struct RestStorage {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestStorage {
    /// Builds a storage for the REST endpoint at `base_url`, e.g.
    /// `https://project.supabase.co/rest/v1`.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> RestStorage {
        let base_url = base_url.into();
        RestStorage {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/{}", self.base_url, TABLE)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

// PostgREST returns the representation of an insert as an array.
fn first_record(mut records: Vec<Prompt>) -> Result<Prompt, StorageError> {
    if records.is_empty() {
        return Err(StorageError::EmptyResponse);
    }
    Ok(records.remove(0))
}

#[async_trait]
impl RemoteStorage for RestStorage {
    async fn fetch_all(&self) -> Result<Vec<Prompt>, StorageError> {
        tracing::debug!("GET {}", self.table_url());
        let prompts = self
            .request(Method::GET, &self.table_url())
            .query(&[("select", "*")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(prompts)
    }

    async fn insert(&self, draft: &PromptDraft) -> Result<Prompt, StorageError> {
        tracing::debug!("POST {}", self.table_url());
        let records: Vec<Prompt> = self
            .request(Method::POST, &self.table_url())
            .header("Prefer", "return=representation")
            .json(draft)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        first_record(records)
    }

    async fn update(&self, id: &str, draft: &PromptDraft) -> Result<(), StorageError> {
        tracing::debug!("PATCH {} id={}", self.table_url(), id);
        self.request(Method::PATCH, &self.table_url())
            .query(&[("id", format!("eq.{id}"))])
            .json(draft)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StorageError> {
        tracing::debug!("DELETE {} id={}", self.table_url(), id);
        self.request(Method::DELETE, &self.table_url())
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(id: &str) -> Prompt {
        Prompt {
            id: id.to_string(),
            title: "title".to_string(),
            body: "body".to_string(),
        }
    }

    #[test]
    fn test_table_url_joins_base_and_table() {
        let storage = RestStorage::new("http://localhost:54321/rest/v1", "key");
        assert_eq!("http://localhost:54321/rest/v1/prompts", storage.table_url());
    }

    #[test]
    fn test_table_url_trims_trailing_slash() {
        let storage = RestStorage::new("http://localhost:54321/rest/v1/", "key");
        assert_eq!("http://localhost:54321/rest/v1/prompts", storage.table_url());
    }

    #[test]
    fn test_first_record_takes_the_first() {
        let record = first_record(vec![prompt("p1"), prompt("p2")]).unwrap();
        assert_eq!("p1", record.id);
    }

    #[test]
    fn test_first_record_rejects_an_empty_representation() {
        let result = first_record(vec![]);
        assert!(matches!(result, Err(StorageError::EmptyResponse)));
    }
}
