//! Application state for the Meeting Cost Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::storage::{MeetingStore, MemoryMeetingStore};

/// Shared application state.
///
/// Contains the loaded configuration and the meeting store shared by all
/// request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The loaded engine configuration.
    config: Arc<ConfigLoader>,
    /// Where meetings and reports are kept.
    store: Arc<dyn MeetingStore>,
}

impl AppState {
    /// Creates application state backed by an empty in-memory store.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_store(config, Arc::new(MemoryMeetingStore::new()))
    }

    /// Creates application state backed by `store`.
    pub fn with_store(config: ConfigLoader, store: Arc<dyn MeetingStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the meeting store.
    pub fn store(&self) -> &dyn MeetingStore {
        self.store.as_ref()
    }
}
