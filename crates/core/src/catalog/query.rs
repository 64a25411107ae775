//! Query operations over the catalog.
//!
//! Every operation reads the store and returns owned clones. Randomized
//! views are built in a fresh per-call buffer, so the stored order is
//! never disturbed and concurrent calls cannot race on a shared shuffle
//! buffer. Randomness comes from the thread-local generator, seeded once
//! per thread and never manually reseeded.

use rand::seq::SliceRandom;
use rand::Rng;

use super::{Catalog, CatalogError, VideoRecord};

/// Page size used when the caller provides no usable `limit`.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

impl Catalog {
    /// Find a record by id, case-insensitively.
    ///
    /// Scans in storage order and returns a clone of the first match, so
    /// duplicate ids resolve to the earliest record.
    pub fn get_by_id(&self, id: &str) -> Result<VideoRecord, CatalogError> {
        let needle = id.to_lowercase();
        self.records()
            .iter()
            .find(|v| v.id.to_lowercase() == needle)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Search by title substring and/or exact id.
    ///
    /// Per record, in storage order:
    /// 1. a non-empty `exact_id` equal to the record's id
    ///    (case-insensitively) includes the record and stops the scan
    ///    entirely;
    /// 2. otherwise a non-empty `query` contained in the record's title
    ///    (case-insensitively) includes the record.
    ///
    /// The stop in rule 1 terminates the whole search: records stored
    /// after the exact-id match are never evaluated, even when they would
    /// match `query`. Records stored before it that matched `query` stay
    /// in the result. With both parameters empty the result is empty.
    pub fn search(&self, query: &str, exact_id: &str) -> Vec<VideoRecord> {
        let query = query.to_lowercase();
        let exact_id = exact_id.to_lowercase();

        let mut results = Vec::new();
        for record in self.records() {
            if !exact_id.is_empty() && record.id.to_lowercase() == exact_id {
                results.push(record.clone());
                break;
            }
            if !query.is_empty() && record.title.to_lowercase().contains(&query) {
                results.push(record.clone());
            }
        }
        results
    }

    /// A window into a fresh random permutation of the whole catalog.
    ///
    /// `page < 0` is treated as page 0; `limit <= 0` falls back to
    /// [`DEFAULT_PAGE_LIMIT`]. The window `[page * limit, page * limit +
    /// limit)` is clamped to the permutation: a start at or past the end
    /// yields an empty page, and a short final page is returned as-is,
    /// not padded. Each call shuffles the full catalog independently; no
    /// ordering is carried between calls.
    pub fn page(&self, page: i64, limit: i64) -> Vec<VideoRecord> {
        let page = page.max(0) as usize;
        let limit = if limit <= 0 { DEFAULT_PAGE_LIMIT } else { limit };
        let limit = limit as usize;

        let mut shuffled = self.records().to_vec();
        shuffled.shuffle(&mut rand::rng());

        let start = page.saturating_mul(limit);
        if start >= shuffled.len() {
            return Vec::new();
        }
        let end = start.saturating_add(limit).min(shuffled.len());
        shuffled[start..end].to_vec()
    }

    /// One uniformly drawn record.
    pub fn random_one(&self) -> Result<VideoRecord, CatalogError> {
        if self.is_empty() {
            return Err(CatalogError::Empty);
        }
        let index = rand::rng().random_range(0..self.len());
        Ok(self.records()[index].clone())
    }

    /// Up to `n` records drawn without replacement: a fresh permutation of
    /// the whole catalog truncated to `min(n, len)` entries.
    pub fn random_sample(&self, n: usize) -> Vec<VideoRecord> {
        let mut shuffled = self.records().to_vec();
        shuffled.shuffle(&mut rand::rng());
        shuffled.truncate(n);
        shuffled
    }
}
