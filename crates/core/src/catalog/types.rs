//! Types for the video catalog.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One playback chapter within a video.
///
/// Segments are opaque payload: `part` is not required to be unique or
/// contiguous, and no overlap check is performed between segments of the
/// same video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Ordinal position within the video.
    pub part: u32,
    /// Offset from the start of the video, in seconds.
    pub start_seconds: u32,
    /// Segment length in seconds.
    pub duration_seconds: u32,
}

/// One catalog entry.
///
/// The serialized attribute names are shared with the catalog source file
/// and every API consumer; they must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    /// Identifier. Intended to be unique, but uniqueness is not enforced
    /// at load time; lookups resolve to the first match in storage order.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Total runtime in seconds.
    #[serde(default)]
    pub total_duration_seconds: u32,
    /// Playback segments, in playback order. May be empty.
    #[serde(default)]
    pub segments: Vec<Segment>,
    /// Thumbnail URL; may be empty.
    #[serde(default, rename = "thumbnailURL")]
    pub thumbnail_url: String,
}

/// Errors for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog source: {0}")]
    Read(String),

    #[error("Failed to parse catalog source: {0}")]
    Parse(String),

    #[error("Video not found: {0}")]
    NotFound(String),

    #[error("Catalog is empty")]
    Empty,
}
