//! Bucket merging for aggregation endpoints.
//!
//! Popular and latest responses carry several overlapping buckets of
//! entries. They are flattened in bucket order, deduplicated keeping the
//! first occurrence, and then sorted.

use std::collections::HashSet;
use std::hash::Hash;

use crate::models::{CatalogEntry, TrackedEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Concatenate `buckets`, keep the first entry per `dedup_key`, then sort by `sort_key`.
///
/// Bucket order is priority order: an entry from an earlier bucket wins
/// over a later duplicate even if the later one would sort first. The sort
/// is stable, so entries with equal sort keys keep their concatenation order.
pub fn merge_buckets<T, B, K, S>(
    buckets: B,
    dedup_key: impl Fn(&T) -> K,
    sort_key: impl Fn(&T) -> S,
    order: SortOrder,
) -> Vec<T>
where
    B: IntoIterator<Item = Vec<T>>,
    K: Eq + Hash,
    S: Ord,
{
    let mut seen = HashSet::new();
    let mut merged: Vec<T> = buckets
        .into_iter()
        .flatten()
        .filter(|item| seen.insert(dedup_key(item)))
        .collect();

    match order {
        SortOrder::Ascending => merged.sort_by(|a, b| sort_key(a).cmp(&sort_key(b))),
        SortOrder::Descending => merged.sort_by(|a, b| sort_key(b).cmp(&sort_key(a))),
    }
    merged
}

/// Popular aggregation: one track, keyed on slug, most viewed first.
pub fn merge_popular<B>(buckets: B) -> Vec<CatalogEntry>
where
    B: IntoIterator<Item = Vec<CatalogEntry>>,
{
    let merged = merge_buckets(
        buckets,
        |entry: &CatalogEntry| entry.slug.clone(),
        |entry: &CatalogEntry| entry.view_count,
        SortOrder::Descending,
    );
    tracing::debug!(count = merged.len(), "Merged popular buckets");
    merged
}

/// Latest aggregation: several edition tracks keyed on track and slug,
/// most recently updated first.
pub fn merge_latest<B>(buckets: B) -> Vec<CatalogEntry>
where
    B: IntoIterator<Item = Vec<TrackedEntry>>,
{
    let merged = merge_buckets(
        buckets,
        TrackedEntry::dedup_key,
        |tracked: &TrackedEntry| tracked.entry.latest_update,
        SortOrder::Descending,
    );
    tracing::debug!(count = merged.len(), "Merged latest buckets");
    merged.into_iter().map(CatalogEntry::from).collect()
}
