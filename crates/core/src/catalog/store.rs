//! In-memory catalog store.

use std::path::Path;

use tracing::debug;

use super::{CatalogError, VideoRecord};

/// The full in-memory list of video records.
///
/// Loaded once at startup and never mutated afterwards: the backing
/// vector is private, no mutating method exists, and every query returns
/// owned clones rather than references into storage.
#[derive(Debug)]
pub struct Catalog {
    records: Vec<VideoRecord>,
}

impl Catalog {
    /// Load the catalog from a JSON file containing an array of records.
    ///
    /// A file that cannot be read or does not parse is terminal for
    /// startup; a partial catalog is never served.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Read(format!("{}: {}", path.display(), e)))?;

        let records: Vec<VideoRecord> = serde_json::from_str(&raw)
            .map_err(|e| CatalogError::Parse(format!("{}: {}", path.display(), e)))?;

        debug!(
            "Parsed {} catalog records from {}",
            records.len(),
            path.display()
        );

        Ok(Self { records })
    }

    /// Build a catalog directly from records (tests, embedding).
    pub fn from_records(records: Vec<VideoRecord>) -> Self {
        Self { records }
    }

    /// All records, in storage order.
    pub fn records(&self) -> &[VideoRecord] {
        &self.records
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds zero records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
