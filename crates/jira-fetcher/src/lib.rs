//! Blocking fetch layer for the Jira REST API.
//!
//! [`JiraApiFetcher`] issues Basic-authenticated GET requests against the base
//! URL of a [`JiraConnection`] and offers three retrieval modes: a single-shot
//! fetch, `isLast`/`values` pagination and `total`/`issues` issue search.

pub mod error;
pub mod fetcher;
mod http;
mod models;
pub mod request;

pub use error::FetchError;
pub use fetcher::{DEFAULT_FETCH_SIZE, JiraApiFetcher};
pub use jira_core::model::JiraConnection;
