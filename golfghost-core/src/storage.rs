//! Durable catalog storage backends.
//!
//! The catalog lives in a single structured file: a JSON object mapping
//! course name to record, pretty-printed for hand editing. Platform layers
//! may provide their own [`CatalogStorage`] implementation; the store itself
//! stays storage-agnostic.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::course::{Course, CourseInput};

/// Raw catalog shape on disk: course name to unvalidated record.
pub type RawCatalog = BTreeMap<String, CourseInput>;

/// Errors raised by durable catalog reads and writes.
///
/// Always recoverable: the store falls back to an empty catalog on load and
/// keeps its in-memory state on save failure.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("catalog I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("catalog is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Abstraction over where the course catalog lives.
pub trait CatalogStorage {
    /// Read the whole catalog.
    ///
    /// Returns `Ok(None)` when no catalog exists yet; that is a normal
    /// first-run state, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog exists but cannot be read or parsed.
    fn load_catalog(&self) -> Result<Option<RawCatalog>, StorageError>;

    /// Replace the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be serialized or written.
    fn save_catalog(&self, catalog: &BTreeMap<String, Course>) -> Result<(), StorageError>;
}

/// Catalog stored as one pretty-printed JSON file on the local filesystem.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStorage for JsonFileStore {
    fn load_catalog(&self) -> Result<Option<RawCatalog>, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let catalog = serde_json::from_str(&text)?;
        Ok(Some(catalog))
    }

    fn save_catalog(&self, catalog: &BTreeMap<String, Course>) -> Result<(), StorageError> {
        let text = serde_json::to_string_pretty(catalog)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}
