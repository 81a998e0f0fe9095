use url::Url;

use manhwaweb_core::chapters::{reconcile, ChapterPolicy};
use manhwaweb_core::config::{AppConfig, QueryKeys, SourceConfig};
use manhwaweb_core::filters::FilterSelection;
use manhwaweb_core::merge::{merge_latest, merge_popular};
use manhwaweb_core::models::{CatalogEntry, Chapter, MangaDetails, Page};
use manhwaweb_core::pagination::PageResult;

use super::decode;
use super::error::{Endpoint, ManhwaWebError};
use super::query::build_search_query;
use crate::traits::CatalogSource;
use crate::transport::{HttpTransport, Transport};

/// Last non-empty path segment, e.g. `manhwa/solo-leveling/` → `solo-leveling`.
pub fn slug_from_path(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or_default()
}

/// ManhwaWeb JSON backend client.
pub struct ManhwaWebClient<T: Transport = HttpTransport> {
    transport: T,
    source: SourceConfig,
    keys: QueryKeys,
}

impl ManhwaWebClient<HttpTransport> {
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config, HttpTransport::new())
    }
}

impl<T: Transport> ManhwaWebClient<T> {
    pub fn new(config: &AppConfig, transport: T) -> Self {
        Self {
            transport,
            source: config.source.clone(),
            keys: config.query.clone(),
        }
    }

    fn api_url(&self, path: &str) -> Result<Url, ManhwaWebError> {
        let base = self.source.api_url.trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        let base = self.source.base_url.trim_end_matches('/');
        vec![("Referer", format!("{base}/"))]
    }

    async fn fetch(&self, endpoint: Endpoint, url: Url) -> Result<String, ManhwaWebError> {
        tracing::debug!(%endpoint, url = %url, "ManhwaWeb request");
        let body = self.transport.fetch(&url, &self.headers()).await?;
        tracing::debug!(%endpoint, bytes = body.len(), "ManhwaWeb response received");
        Ok(body)
    }

    /// Web page of a title on the public site.
    pub fn manga_url(&self, slug: &str) -> String {
        format!("{}/manhwa/{slug}", self.source.base_url.trim_end_matches('/'))
    }

    /// Web page of a chapter, given its host-relative URL.
    pub fn chapter_url(&self, chapter_path: &str) -> String {
        format!("{}{chapter_path}", self.source.base_url.trim_end_matches('/'))
    }

    /// Pages already carry their final image URL, so there is nothing to resolve.
    pub fn resolve_image_url(&self, _page: &Page) -> Result<String, ManhwaWebError> {
        Err(ManhwaWebError::Unsupported("image URL resolution"))
    }
}

impl<T: Transport> CatalogSource for ManhwaWebClient<T> {
    type Error = ManhwaWebError;

    async fn popular(&self, _page: u32) -> Result<PageResult<CatalogEntry>, ManhwaWebError> {
        let url = self.api_url("/manhwa/nuevos")?;
        let body = self.fetch(Endpoint::Popular, url).await?;
        let buckets = decode::decode_popular(body.as_bytes())?;
        Ok(PageResult::snapshot(merge_popular(buckets)))
    }

    async fn latest(&self, _page: u32) -> Result<PageResult<CatalogEntry>, ManhwaWebError> {
        let url = self.api_url("/latest/new-manhwa")?;
        let body = self.fetch(Endpoint::Latest, url).await?;
        let buckets = decode::decode_latest(body.as_bytes())?;
        Ok(PageResult::snapshot(merge_latest(buckets)))
    }

    async fn search(
        &self,
        query: &str,
        filters: &[FilterSelection],
        page: u32,
    ) -> Result<PageResult<CatalogEntry>, ManhwaWebError> {
        let mut url = self.api_url("/manhwa/library")?;
        build_search_query(&self.keys, query, filters, page).apply_to(&mut url);
        let body = self.fetch(Endpoint::Search, url).await?;
        Ok(decode::decode_search(body.as_bytes())?)
    }

    async fn details(&self, slug: &str) -> Result<MangaDetails, ManhwaWebError> {
        let url = self.api_url(&format!("/manhwa/see/{}", slug_from_path(slug)))?;
        let body = self.fetch(Endpoint::Details, url).await?;
        Ok(decode::decode_details(body.as_bytes())?)
    }

    async fn chapters(
        &self,
        slug: &str,
        policy: ChapterPolicy,
    ) -> Result<Vec<Chapter>, ManhwaWebError> {
        let url = self.api_url(&format!("/manhwa/see/{}", slug_from_path(slug)))?;
        let body = self.fetch(Endpoint::Chapters, url).await?;
        let tracks = decode::decode_chapters(body.as_bytes())?;
        Ok(reconcile(tracks.translated, tracks.raw, policy))
    }

    async fn pages(&self, chapter_url: &str) -> Result<Vec<Page>, ManhwaWebError> {
        let url = self.api_url(&format!("/chapters/see/{}", slug_from_path(chapter_url)))?;
        let body = self.fetch(Endpoint::Pages, url).await?;
        Ok(decode::decode_pages(body.as_bytes())?)
    }
}
