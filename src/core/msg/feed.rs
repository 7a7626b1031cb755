use serde::{Deserialize, Serialize};

use crate::domain::page::Page;

/// Messages specific to the feed: paging, selection and focus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedMsg {
    // Paging
    LoadFirstPage,
    LoadNextPage,
    PageLoaded(Page),
    PageFailed { offset: u32, error: String },

    // Selection
    ToggleSelect(String),
    ToggleSelectFocused,
    Unselect,

    // Keyboard focus
    Focus(String),
    FocusNext,
    FocusPrev,
}
