pub mod catalog;
pub mod chapter;
pub mod details;

pub use catalog::{CatalogEntry, TrackedEntry};
pub use chapter::{Chapter, ChapterTrack, Page};
pub use details::{MangaDetails, PublicationStatus};
