#![forbid(unsafe_code)]

//! The shared configuration store
//!
//! Configuration is loaded at most once and shared read-only by every
//! rule handler for the rest of the process. The store is owned by the
//! spec builder and handed to every handler as an `Arc`, and first
//! initialization is guarded by a mutex, so the configure-once contract
//! holds even though the runtime already serializes handlers.
//!
//! A failed load leaves the store uninitialized: a later call (typically
//! from the next request) retries with whatever path it carries.

use crate::error::ConfigError;
use crate::lint::config::Configs;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Configure-once, read-many store for the engine configuration
#[derive(Debug, Default)]
pub struct ConfigStore {
    slot: Mutex<Option<Arc<Configs>>>,
}

impl ConfigStore {
    /// Creates an uninitialized store
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared configuration, loading it on first call
    ///
    /// An empty `path` initializes the store with the default (empty)
    /// configuration; that is never an error. Once initialized, every
    /// later call returns the same configuration regardless of `path`:
    /// the first call wins.
    ///
    /// # Errors
    ///
    /// Propagates `ConfigError` from reading or parsing `path`. The store
    /// stays uninitialized so the load can be retried.
    pub fn get(&self, path: &str) -> Result<Arc<Configs>, ConfigError> {
        let mut slot = self.slot.lock().expect("config store lock poisoned");
        if let Some(configs) = slot.as_ref() {
            return Ok(Arc::clone(configs));
        }

        let configs = if path.is_empty() {
            Arc::new(Configs::default())
        } else {
            Arc::new(Configs::from_file(Path::new(path))?)
        };
        *slot = Some(Arc::clone(&configs));
        Ok(configs)
    }

    /// True once a configuration has been successfully loaded
    pub fn is_initialized(&self) -> bool {
        self.slot
            .lock()
            .expect("config store lock poisoned")
            .is_some()
    }
}
