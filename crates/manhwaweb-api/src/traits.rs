//! Trait definitions for catalog sources.
//!
//! A host drives any source through [`CatalogSource`] without knowing which
//! upstream API sits behind it.

use std::future::Future;

use manhwaweb_core::chapters::ChapterPolicy;
use manhwaweb_core::filters::FilterSelection;
use manhwaweb_core::models::{CatalogEntry, Chapter, MangaDetails, Page};
use manhwaweb_core::pagination::PageResult;

/// A browsable, searchable manga catalog.
pub trait CatalogSource: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Most viewed titles.
    fn popular(
        &self,
        page: u32,
    ) -> impl Future<Output = Result<PageResult<CatalogEntry>, Self::Error>> + Send;

    /// Most recently updated titles.
    fn latest(
        &self,
        page: u32,
    ) -> impl Future<Output = Result<PageResult<CatalogEntry>, Self::Error>> + Send;

    /// Free-text search narrowed by filters. `page` is 1-based.
    fn search(
        &self,
        query: &str,
        filters: &[FilterSelection],
        page: u32,
    ) -> impl Future<Output = Result<PageResult<CatalogEntry>, Self::Error>> + Send;

    fn details(&self, slug: &str) -> impl Future<Output = Result<MangaDetails, Self::Error>> + Send;

    /// All chapters of a title, newest first.
    fn chapters(
        &self,
        slug: &str,
        policy: ChapterPolicy,
    ) -> impl Future<Output = Result<Vec<Chapter>, Self::Error>> + Send;

    /// Page images of a chapter, given the chapter's host-relative URL.
    fn pages(&self, chapter_url: &str) -> impl Future<Output = Result<Vec<Page>, Self::Error>> + Send;
}
