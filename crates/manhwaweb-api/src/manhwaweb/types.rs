use std::collections::BTreeMap;

use serde::Deserialize;

use manhwaweb_core::models::{
    CatalogEntry, Chapter, ChapterTrack, MangaDetails, Page, PublicationStatus, TrackedEntry,
};

// ── Listing nodes ────────────────────────────────────────────────

/// Title node shared by the popular and search endpoints.
#[derive(Debug, Deserialize)]
pub struct ComicNode {
    #[serde(rename = "_id")]
    pub slug: String,
    #[serde(rename = "the_real_name")]
    pub title: String,
    #[serde(rename = "_imagen")]
    pub cover: String,
    #[serde(rename = "_visitas", default)]
    pub views: Option<u64>,
}

/// Title node of the latest-updates endpoint.
#[derive(Debug, Deserialize)]
pub struct LatestNode {
    #[serde(rename = "id_manhwa")]
    pub slug: String,
    #[serde(rename = "name_manhwa")]
    pub title: String,
    pub img: String,
    /// Epoch milliseconds of the latest chapter.
    #[serde(rename = "create")]
    pub created_at: i64,
    /// Edition track the title is listed under.
    #[serde(rename = "type")]
    pub track: String,
}

// ── Payloads ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PopularPayload {
    pub top: PopularBuckets,
}

#[derive(Debug, Deserialize)]
pub struct PopularBuckets {
    #[serde(rename = "semanal")]
    pub weekly: Vec<ComicNode>,
    pub total: Vec<ComicNode>,
}

#[derive(Debug, Deserialize)]
pub struct LatestPayload {
    pub data: LatestBuckets,
}

#[derive(Debug, Deserialize)]
pub struct LatestBuckets {
    #[serde(rename = "_esp")]
    pub esp: Vec<LatestNode>,
    #[serde(rename = "_raw18")]
    pub raw18: Vec<LatestNode>,
    #[serde(rename = "_esp18")]
    pub esp18: Vec<LatestNode>,
}

#[derive(Debug, Deserialize)]
pub struct SearchPayload {
    pub data: Vec<ComicNode>,
    #[serde(rename = "next")]
    pub has_next_page: bool,
}

#[derive(Debug, Deserialize)]
pub struct DetailsPayload {
    #[serde(rename = "_id")]
    pub slug: String,
    #[serde(rename = "name_esp")]
    pub title: String,
    #[serde(rename = "_sinopsis", default)]
    pub description: Option<String>,
    #[serde(rename = "_imagen")]
    pub cover: String,
    #[serde(rename = "_status", default)]
    pub status: Option<String>,
    /// Each category is a one-entry object mapping genre id to its name.
    #[serde(rename = "_categoris", default)]
    pub categories: Vec<BTreeMap<String, String>>,
    #[serde(rename = "_extras", default)]
    pub extras: Option<Extras>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Extras {
    #[serde(rename = "autores", default)]
    pub authors: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChaptersPayload {
    #[serde(rename = "chapters")]
    pub translated: Vec<ChapterNode>,
    #[serde(rename = "chapters_raw", default)]
    pub raw: Vec<ChapterNode>,
}

#[derive(Debug, Deserialize)]
pub struct ChapterNode {
    #[serde(rename = "chapter")]
    pub number: f32,
    /// Epoch milliseconds; `null` on some older chapters.
    #[serde(rename = "create", default)]
    pub created_at: Option<i64>,
    #[serde(rename = "link")]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct PagesPayload {
    pub chapter: PageImages,
}

#[derive(Debug, Deserialize)]
pub struct PageImages {
    #[serde(rename = "img")]
    pub images: Vec<String>,
}

// ── Conversions ──────────────────────────────────────────────────

fn millis_to_secs(ms: i64) -> i64 {
    ms / 1000
}

/// Drop scheme and host, keeping path, query and fragment.
pub fn strip_domain(link: &str) -> String {
    match url::Url::parse(link) {
        Ok(url) => {
            let mut out = url.path().to_string();
            if let Some(query) = url.query() {
                out.push('?');
                out.push_str(query);
            }
            if let Some(fragment) = url.fragment() {
                out.push('#');
                out.push_str(fragment);
            }
            out
        }
        Err(_) => link.to_string(),
    }
}

impl ComicNode {
    pub fn into_entry(self) -> CatalogEntry {
        CatalogEntry {
            view_count: self.views,
            ..CatalogEntry::new(self.slug, self.title, self.cover)
        }
    }
}

impl LatestNode {
    pub fn into_tracked(self) -> TrackedEntry {
        TrackedEntry {
            entry: CatalogEntry {
                latest_update: Some(self.created_at),
                ..CatalogEntry::new(self.slug, self.title, self.img)
            },
            track: self.track,
        }
    }
}

impl DetailsPayload {
    pub fn into_details(self) -> MangaDetails {
        MangaDetails {
            slug: self.slug,
            title: self.title,
            description: self.description.filter(|d| !d.trim().is_empty()),
            cover_url: self.cover,
            status: self
                .status
                .as_deref()
                .map(PublicationStatus::from_upstream)
                .unwrap_or_default(),
            genres: self
                .categories
                .into_iter()
                .flat_map(|c| c.into_values())
                .collect(),
            authors: self.extras.unwrap_or_default().authors,
        }
    }
}

impl ChapterNode {
    pub fn into_chapter(self, track: ChapterTrack) -> Chapter {
        Chapter::new(
            self.number,
            strip_domain(&self.url),
            self.created_at.map(millis_to_secs).unwrap_or(0),
            track,
        )
    }
}

impl PagesPayload {
    pub fn into_pages(self) -> Vec<Page> {
        Page::from_image_urls(self.chapter.images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_domain() {
        assert_eq!(
            strip_domain("https://manhwaweb.com/leer/solo-leveling-200?x=1"),
            "/leer/solo-leveling-200?x=1"
        );
        assert_eq!(strip_domain("/leer/already-relative"), "/leer/already-relative");
    }

    #[test]
    fn test_comic_node_into_entry() {
        let json = r#"{
            "_id": "solo-leveling",
            "the_real_name": "Solo Leveling",
            "_imagen": "https://imageshack.example/solo.webp",
            "_visitas": 1532,
            "_tipo": "manhwa"
        }"#;
        let node: ComicNode = serde_json::from_str(json).unwrap();
        let entry = node.into_entry();
        assert_eq!(entry.slug, "solo-leveling");
        assert_eq!(entry.title, "Solo Leveling");
        assert_eq!(entry.view_count, Some(1532));
        assert_eq!(entry.latest_update, None);
    }

    #[test]
    fn test_latest_node_keeps_millis() {
        let json = r#"{
            "id_manhwa": "x",
            "name_manhwa": "X",
            "img": "https://img/x.jpg",
            "create": 1700000000123,
            "type": "manhwa18"
        }"#;
        let tracked = serde_json::from_str::<LatestNode>(json).unwrap().into_tracked();
        assert_eq!(tracked.track, "manhwa18");
        assert_eq!(tracked.entry.latest_update, Some(1_700_000_000_123));
    }

    #[test]
    fn test_details_conversion() {
        let json = r#"{
            "_id": "tower-of-god",
            "name_esp": "Tower of God",
            "_sinopsis": "  ",
            "_imagen": "https://img/tog.jpg",
            "_status": "publicandose",
            "_categoris": [{"3": "Acción"}, {"23": "Fantasía"}],
            "_extras": {"autores": ["SIU"]}
        }"#;
        let details = serde_json::from_str::<DetailsPayload>(json).unwrap().into_details();
        assert_eq!(details.title, "Tower of God");
        assert_eq!(details.description, None);
        assert_eq!(details.status, PublicationStatus::Ongoing);
        assert_eq!(details.genres, vec!["Acción", "Fantasía"]);
        assert_eq!(details.authors, vec!["SIU"]);
    }

    #[test]
    fn test_details_optional_fields() {
        let json = r#"{"_id": "a", "name_esp": "A", "_imagen": ""}"#;
        let details = serde_json::from_str::<DetailsPayload>(json).unwrap().into_details();
        assert_eq!(details.status, PublicationStatus::Unknown);
        assert!(details.genres.is_empty());
        assert!(details.authors.is_empty());
    }

    #[test]
    fn test_chapter_node_without_date() {
        let json = r#"{"chapter": 12.5, "create": null, "link": "https://manhwaweb.com/leer/x-12.5"}"#;
        let chapter = serde_json::from_str::<ChapterNode>(json)
            .unwrap()
            .into_chapter(ChapterTrack::Raw);
        assert_eq!(chapter.number, 12.5);
        assert_eq!(chapter.title, "Capítulo 12.5");
        assert_eq!(chapter.url, "/leer/x-12.5");
        assert_eq!(chapter.uploaded_at, 0);
        assert_eq!(chapter.track, ChapterTrack::Raw);
    }
}
