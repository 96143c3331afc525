//! Course catalog ownership and persistence orchestration.
//!
//! [`CourseStore`] is an explicit owned value constructed once at startup and
//! threaded through to callers; there is no ambient global catalog. Any
//! record it returns, and any record it accepts for write, satisfies the
//! course invariants.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::course::{Course, CourseInput, ValidationError};
use crate::presets;
use crate::storage::{CatalogStorage, StorageError};

/// Combined failure surface for writes that validate and then persist.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Owns the mapping from course name (unique key) to validated record.
#[derive(Debug)]
pub struct CourseStore<S> {
    storage: S,
    courses: BTreeMap<String, Course>,
}

impl<S: CatalogStorage> CourseStore<S> {
    /// Create a store with an empty catalog without touching storage.
    pub const fn empty(storage: S) -> Self {
        Self {
            storage,
            courses: BTreeMap::new(),
        }
    }

    /// Load the catalog from storage.
    ///
    /// A missing catalog yields an empty store. An unreadable or malformed
    /// catalog is logged and also yields an empty store; the system stays
    /// usable with zero courses. Records that parse but fail validation are
    /// logged and skipped.
    pub fn load(storage: S) -> Self {
        let courses = match storage.load_catalog() {
            Ok(Some(raw)) => {
                let mut courses = BTreeMap::new();
                for (name, input) in raw {
                    match Course::from_input(&input) {
                        Ok(course) => {
                            courses.insert(name, course);
                        }
                        Err(err) => log::warn!("skipping invalid course {name:?}: {err}"),
                    }
                }
                courses
            }
            Ok(None) => BTreeMap::new(),
            Err(err) => {
                log::warn!("failed to load course catalog, starting empty: {err}");
                BTreeMap::new()
            }
        };
        Self { storage, courses }
    }

    /// Write the entire in-memory catalog back to storage.
    ///
    /// # Errors
    ///
    /// Returns an error on write failure. Non-fatal: the in-memory catalog
    /// is untouched and the caller may retry.
    pub fn save(&self) -> Result<(), StorageError> {
        self.storage.save_catalog(&self.courses)
    }

    /// Check a record against the course invariants. Pure; the catalog is
    /// not consulted or modified.
    ///
    /// # Errors
    ///
    /// Returns the first missing field or per-hole length violation.
    pub fn validate(input: &CourseInput) -> Result<(), ValidationError> {
        input.validate()
    }

    /// Validate, insert-or-overwrite the keyed record, and persist.
    ///
    /// # Errors
    ///
    /// Returns a validation error without touching the catalog, or a storage
    /// error after the record was applied in memory (the caller may retry
    /// [`CourseStore::save`]).
    pub fn put(&mut self, name: &str, input: &CourseInput) -> Result<(), StoreError> {
        let course = Course::from_input(input)?;
        self.courses.insert(name.to_string(), course);
        self.save()?;
        Ok(())
    }

    /// Remove the keyed record if present and persist.
    ///
    /// Returns `Ok(false)` when the name is absent; a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting the removal fails.
    pub fn delete(&mut self, name: &str) -> Result<bool, StorageError> {
        if self.courses.remove(name).is_none() {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Look up a course by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Course> {
        self.courses.get(name)
    }

    /// Known course names, in catalog (lexicographic) order.
    #[must_use]
    pub fn course_names(&self) -> Vec<&str> {
        self.courses.keys().map(String::as_str).collect()
    }

    /// Number of courses in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Insert the built-in preset courses that are not already present and
    /// persist once. Returns the names added, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting fails; added presets stay in
    /// memory.
    pub fn seed_presets(&mut self) -> Result<Vec<String>, StorageError> {
        let mut added = Vec::new();
        for (name, input) in presets::preset_catalog() {
            if self.courses.contains_key(&name) {
                continue;
            }
            match Course::from_input(&input) {
                Ok(course) => {
                    self.courses.insert(name.clone(), course);
                    added.push(name);
                }
                Err(err) => log::warn!("skipping invalid preset {name:?}: {err}"),
            }
        }
        if !added.is_empty() {
            self.save()?;
        }
        Ok(added)
    }
}
