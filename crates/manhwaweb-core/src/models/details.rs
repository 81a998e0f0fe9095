use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationStatus {
    Ongoing,
    Completed,
    #[default]
    Unknown,
}

impl PublicationStatus {
    /// Map the upstream status string (`publicandose`, `finalizado`).
    pub fn from_upstream(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "publicandose" => Self::Ongoing,
            "finalizado" => Self::Completed,
            _ => Self::Unknown,
        }
    }
}

/// Full information about a single title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MangaDetails {
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub cover_url: String,
    pub status: PublicationStatus,
    pub genres: Vec<String>,
    pub authors: Vec<String>,
}
