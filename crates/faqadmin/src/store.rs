//! Storage layer for faqadmin.
//!
//! This module provides the FAQ Store: full-file load/save of the JSON
//! backing file plus the add/update/delete operations composed from it.
//!
//! The store keeps no in-memory state between operations. Every operation
//! re-reads the full collection from disk, mutates it, and writes the full
//! collection back, so the file on disk is always the single source of
//! truth. There is no locking: concurrent writers race on the whole file and
//! the last write wins, which is accepted for single-operator usage.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::faq::{FaqEntry, Language};

/// File-backed store for the FAQ collection.
///
/// Holds only the backing-file path; see the module docs for the
/// read-modify-write model.
#[derive(Debug, Clone)]
pub struct FaqStore {
    /// Path to the backing file.
    path: PathBuf,
}

impl FaqStore {
    /// Create a store for the backing file at the given path.
    ///
    /// No I/O happens here; a missing file simply reads back as an empty
    /// collection.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path to the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full collection from the backing file.
    ///
    /// A missing file yields an empty collection, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read for any reason other than
    /// not existing, or if its content does not parse as an FAQ collection.
    /// Malformed content is never treated as an empty collection.
    pub fn load(&self) -> Result<Vec<FaqEntry>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                debug!("No data file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(Error::DataFileRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let entries: Vec<FaqEntry> =
            serde_json::from_str(&raw).map_err(|source| Error::DataFileParse {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            "Loaded {} entries from {}",
            entries.len(),
            self.path.display()
        );
        Ok(entries)
    }

    /// Overwrite the backing file with the full serialized collection.
    ///
    /// The collection is written as a pretty-printed JSON array so the file
    /// stays readable to humans and to the chatbot consumer. Parent
    /// directories are created if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, entries: &[FaqEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json).map_err(|source| Error::DataFileWrite {
            path: self.path.clone(),
            source,
        })?;

        debug!(
            "Wrote {} entries to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Append a new entry and persist the full collection.
    ///
    /// Generates a fresh unique id and returns the created entry.
    ///
    /// # Errors
    ///
    /// Returns a validation error if question, answer, or category is empty;
    /// nothing is written in that case. Also propagates load/save failures.
    pub fn add(
        &self,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
        language: Language,
    ) -> Result<FaqEntry> {
        let question = question.into();
        let answer = answer.into();
        let category = category.into();
        require_field("question", &question)?;
        require_field("answer", &answer)?;
        require_field("category", &category)?;

        let mut entries = self.load()?;
        let entry = FaqEntry::new(question, answer, category, language);
        entries.push(entry.clone());
        self.save(&entries)?;

        debug!("Added entry with id {}", entry.id);
        Ok(entry)
    }

    /// Overwrite the four content fields of the first entry matching `id`,
    /// then persist.
    ///
    /// Silently leaves the collection unchanged when no entry matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be loaded or persisted.
    pub fn update(
        &self,
        id: &str,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
        language: Language,
    ) -> Result<()> {
        let mut entries = self.load()?;

        if let Some(entry) = entries.iter_mut().find(|entry| entry.id == id) {
            entry.overwrite(question, answer, category, language);
            debug!("Updated entry {}", id);
        } else {
            debug!("No entry with id {} to update", id);
        }

        self.save(&entries)
    }

    /// Remove every entry matching `id`, then persist.
    ///
    /// An unknown id is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be loaded or persisted.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut entries = self.load()?;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);

        let removed = before - entries.len();
        if removed == 0 {
            debug!("No entry with id {} to delete", id);
        } else {
            debug!("Deleted {} entries with id {}", removed, id);
        }

        self.save(&entries)
    }
}

/// Reject empty values for a required creation field.
fn require_field(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::missing_field(field));
    }
    Ok(())
}
