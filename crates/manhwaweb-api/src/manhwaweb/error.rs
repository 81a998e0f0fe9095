use thiserror::Error;

use crate::transport::TransportError;

/// Errors from the ManhwaWeb client.
#[derive(Debug, Error)]
pub enum ManhwaWebError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

/// The upstream endpoint a payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Popular,
    Latest,
    Search,
    Details,
    Chapters,
    Pages,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Popular => write!(f, "popular"),
            Self::Latest => write!(f, "latest"),
            Self::Search => write!(f, "search"),
            Self::Details => write!(f, "details"),
            Self::Chapters => write!(f, "chapters"),
            Self::Pages => write!(f, "pages"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// Not valid JSON at all (syntax error, truncated body).
    MalformedJson,
    /// Valid JSON that does not have the expected shape.
    MissingField,
}

impl std::fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedJson => write!(f, "malformed JSON"),
            Self::MissingField => write!(f, "missing field"),
        }
    }
}

#[derive(Debug, Error)]
#[error("{endpoint} response: {kind}: {message}")]
pub struct DecodeError {
    pub endpoint: Endpoint,
    pub kind: DecodeErrorKind,
    pub message: String,
}

impl DecodeError {
    pub fn from_json(endpoint: Endpoint, err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let kind = match err.classify() {
            Category::Data => DecodeErrorKind::MissingField,
            Category::Syntax | Category::Eof | Category::Io => DecodeErrorKind::MalformedJson,
        };
        Self {
            endpoint,
            kind,
            message: err.to_string(),
        }
    }
}
