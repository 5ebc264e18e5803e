//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Handlers only ever see the repository trait object, so
//! the backing store can be swapped without touching them.

use std::sync::Arc;

use clubhouse_core::storage::MemberRepository;

use crate::{config::Config, storage::SqliteRepository};

/// Shared application state.
///
/// This is cloned for each request handler and contains the member
/// repository backing every route.
#[derive(Clone)]
pub struct AppState {
    /// Member repository backing all handlers.
    pub members: Arc<dyn MemberRepository>,
}

impl AppState {
    /// Creates AppState backed by the file-based SQLite store from config.
    ///
    /// Opening the repository ensures the members table and seed row exist.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let repo = SqliteRepository::new(&config.sqlite_path).await?;

        Ok(Self {
            members: Arc::new(repo),
        })
    }
}
