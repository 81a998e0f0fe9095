use serde::{Deserialize, Serialize};

/// A title as listed by one of the catalog endpoints.
///
/// The `slug` is the identity: two entries with the same slug denote the
/// same title even when the remaining fields differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub slug: String,
    pub title: String,
    pub cover_url: String,
    pub view_count: Option<u64>,
    /// Epoch milliseconds of the most recent chapter upload, as reported upstream.
    pub latest_update: Option<i64>,
}

impl CatalogEntry {
    pub fn new(slug: impl Into<String>, title: impl Into<String>, cover_url: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            cover_url: cover_url.into(),
            view_count: None,
            latest_update: None,
        }
    }
}

/// A catalog entry tagged with the edition track it was listed under.
///
/// Distinct editions (standard and mature) may share a slug, so anything
/// that deduplicates tracked entries keys on `track` and `slug` together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedEntry {
    pub entry: CatalogEntry,
    pub track: String,
}

impl TrackedEntry {
    pub fn dedup_key(&self) -> String {
        format!("{}{}", self.track, self.entry.slug)
    }
}

impl From<TrackedEntry> for CatalogEntry {
    fn from(tracked: TrackedEntry) -> Self {
        tracked.entry
    }
}
