//! Durable storage for the selected language.

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use crate::settings;

/// Storage key holding the active language tag.
pub const LOCALE_STORAGE_KEY: &str = "locale";

/// Why a preference could not be read or written.
#[derive(Debug)]
pub enum StoreError {
    /// Persistence is switched off or otherwise not reachable.
    Unavailable,
    /// The backing file could not be read or written.
    Io(io::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "preference storage is unavailable"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Unavailable => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Key-value storage that survives between sessions.
pub trait PreferenceStore {
    /// What: Read a stored value.
    ///
    /// # Errors
    /// - Returns `Err` when the medium cannot be reached
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// What: Store a value, replacing any previous one.
    ///
    /// # Errors
    /// - Returns `Err` when the medium cannot be written
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store. Clones share the same map, which lets tests reopen "the same storage".
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Shared entries.
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A store whose medium is switched off: every access fails with `Unavailable`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledStore;

impl PreferenceStore for DisabledStore {
    fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

/// Store backed by `settings.conf`, preserving comments and other keys on write.
#[derive(Debug, Clone)]
pub struct SettingsFileStore {
    /// Settings file to read and rewrite.
    path: PathBuf,
}

impl SettingsFileStore {
    /// Store on an explicit settings file.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store on the user's `settings.conf` in the config directory.
    #[must_use]
    pub fn user() -> Self {
        Self::new(settings::settings_path())
    }

    /// Backing file.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl PreferenceStore for SettingsFileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(settings::read_key(&self.path, key)?)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        Ok(settings::save_key(&self.path, key, value)?)
    }
}
