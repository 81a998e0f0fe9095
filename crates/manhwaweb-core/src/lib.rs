pub mod chapters;
pub mod config;
pub mod error;
pub mod filters;
pub mod merge;
pub mod models;
pub mod pagination;
pub mod preferences;
