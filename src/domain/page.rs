use serde::{Deserialize, Serialize};

/// One batch of rows returned by a page source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Zero-based page offset this page was fetched with.
    pub offset: u32,
    pub rows: Vec<String>,
    /// Offset of the following page, `None` when the source is exhausted.
    pub next_offset: Option<u32>,
}

impl Page {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Row labels for page `offset` of size `limit`.
pub fn page_rows(limit: u32, offset: u32) -> Vec<String> {
    let start = offset * limit;
    (0..limit)
        .map(|i| format!("Async loaded row {}", start + i))
        .collect()
}
