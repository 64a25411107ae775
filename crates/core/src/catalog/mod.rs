//! The video catalog: an immutable in-memory store plus its query
//! operations.
//!
//! The catalog is loaded once at startup from a JSON source file and
//! never mutated afterwards, so concurrent readers need no locking.
//! Randomized views (pagination, sampling) always operate on a private
//! per-call copy of the records.

mod query;
mod store;
mod types;

pub use query::DEFAULT_PAGE_LIMIT;
pub use store::Catalog;
pub use types::{CatalogError, Segment, VideoRecord};
