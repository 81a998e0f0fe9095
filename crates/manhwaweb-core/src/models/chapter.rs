use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which parallel chapter channel a chapter came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChapterTrack {
    Translated,
    Raw,
}

impl ChapterTrack {
    /// Label shown to the reader as the chapter's scanlator.
    pub fn label(self) -> &'static str {
        match self {
            Self::Translated => "Esp",
            Self::Raw => "Raw",
        }
    }
}

impl std::fmt::Display for ChapterTrack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub number: f32,
    pub title: String,
    /// Path and query of the chapter page, without scheme or host.
    pub url: String,
    /// Epoch seconds, `0` when the upstream did not report a date.
    pub uploaded_at: i64,
    pub track: ChapterTrack,
}

impl Chapter {
    pub fn new(number: f32, url: impl Into<String>, uploaded_at: i64, track: ChapterTrack) -> Self {
        Self {
            number,
            title: chapter_title(number),
            url: url.into(),
            uploaded_at,
            track,
        }
    }

    pub fn uploaded_at_utc(&self) -> Option<DateTime<Utc>> {
        if self.uploaded_at == 0 {
            return None;
        }
        DateTime::from_timestamp(self.uploaded_at, 0)
    }
}

/// `Capítulo 12`, `Capítulo 12.5`. Whole numbers carry no fractional part.
pub fn chapter_title(number: f32) -> String {
    format!("Capítulo {number}")
}

/// A single page image of a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub index: usize,
    pub image_url: String,
}

impl Page {
    /// Build pages from an image list, skipping blank URLs.
    ///
    /// Indices are assigned after filtering so they stay contiguous.
    pub fn from_image_urls<I, S>(urls: I) -> Vec<Page>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        urls.into_iter()
            .map(Into::<String>::into)
            .filter(|url: &String| !url.trim().is_empty())
            .enumerate()
            .map(|(index, image_url)| Page { index, image_url })
            .collect()
    }
}
