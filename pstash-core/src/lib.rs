//! # pstash Core
//!
//! This crate provides the core functionality for pstash, a personal
//! prompt library backed by a hosted data store.
//!
//! Prompts are short title+body snippets. The [`store::PromptStore`] holds
//! the in-memory collection and the active search filter, and mediates
//! every mutation through the remote service before reflecting it locally.
//!
//! # Modules
//!
//! - [`notify`] - The user-facing notification seam and message set
//! - [`prompt`] - Core prompt data structures and validation
//! - [`rest_storage`] - REST implementation of the remote storage
//! - [`storage`] - Remote storage trait and error type
//! - [`store`] - The prompt store state machine
//!
//! # Examples
//!
//! ```rust
//! use pstash_core::prompt::PromptDraft;
//!
//! // A draft is a validated title+body pair; the remote service assigns
//! // the id on insert.
//! let draft = PromptDraft::new("greeting", "Hello, world!").expect("Failed to create draft");
//! assert_eq!("greeting", draft.title());
//!
//! // Empty fields are rejected before any network call is attempted.
//! assert!(PromptDraft::new("", "Hello, world!").is_err());
//! ```

pub mod notify;
pub mod prompt;
pub mod rest_storage;
pub mod storage;
pub mod store;
