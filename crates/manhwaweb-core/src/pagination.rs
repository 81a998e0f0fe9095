use serde::{Deserialize, Serialize};

/// One page of catalog results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub entries: Vec<T>,
    pub has_more: bool,
}

impl<T> PageResult<T> {
    /// Full-snapshot endpoints (popular, latest) never report another page.
    pub fn snapshot(entries: Vec<T>) -> Self {
        Self {
            entries,
            has_more: false,
        }
    }

    /// Paged endpoints report exactly what the upstream signalled.
    pub fn from_upstream(entries: Vec<T>, upstream_has_next: bool) -> Self {
        Self {
            entries,
            has_more: upstream_has_next,
        }
    }
}
