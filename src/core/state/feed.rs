//! Feed state: the loaded pages, their rows in display order, and the
//! per-row layout used for virtualization.

use std::collections::HashMap;

use crate::{
    domain::{
        page::Page,
        row::{lines_for_height, RowVisual},
        virtualizer::Virtualizer,
    },
    infrastructure::config::FeedSettings,
};

#[derive(Debug, Clone, Default)]
pub struct FeedState {
    settings: FeedSettings,
    pages: Vec<Page>,
    /// Row keys top to bottom: newest page first, each page reversed
    items: Vec<String>,
    /// Height in lines of each item, same order as `items`
    heights: Vec<u32>,
    positions: HashMap<String, usize>,
    layout: Virtualizer,
    pending_offset: Option<u32>,
    pub is_fetching_next_page: bool,
    /// Set after a failed fetch; automatic loading waits for the user
    pub auto_load_paused: bool,
    pub is_success: bool,
    pub selected_key: Option<String>,
    pub focused_key: Option<String>,
}

impl FeedState {
    pub fn new(settings: FeedSettings) -> Self {
        let layout = Virtualizer::new([], settings.overscan);
        Self {
            settings,
            layout,
            ..Default::default()
        }
    }

    pub fn settings(&self) -> &FeedSettings {
        &self.settings
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn layout(&self) -> &Virtualizer {
        &self.layout
    }

    pub fn total_size(&self) -> u32 {
        self.layout.total_size()
    }

    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.positions.get(key).copied()
    }

    /// Number shown on a row: the bottom row is 1.
    pub fn label_for(&self, index: usize) -> usize {
        self.len().saturating_sub(index)
    }

    pub fn visual_for(&self, index: usize) -> Option<RowVisual> {
        self.key_at(index).map(RowVisual::for_key)
    }

    /// Offset of the page a fetch would request, `None` once exhausted.
    pub fn next_offset(&self) -> Option<u32> {
        match self.pages.last() {
            Some(page) => page.next_offset,
            None => Some(0),
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.next_offset().is_some()
    }

    /// Mark a fetch as in flight and return the offset to fetch.
    pub fn begin_fetch(&mut self) -> Option<u32> {
        if self.is_fetching_next_page {
            return None;
        }
        let offset = self.next_offset()?;
        self.is_fetching_next_page = true;
        self.pending_offset = Some(offset);
        Some(offset)
    }

    pub fn fail_fetch(&mut self, offset: u32) -> bool {
        if self.pending_offset != Some(offset) {
            return false;
        }
        self.is_fetching_next_page = false;
        self.pending_offset = None;
        true
    }

    /// Prepend a fetched page. Pages that were not requested are ignored.
    pub fn push_page(&mut self, page: Page) -> bool {
        if self.pending_offset != Some(page.offset) {
            log::warn!(
                "Ignoring page {} (expected {:?})",
                page.offset,
                self.pending_offset
            );
            return false;
        }
        self.pending_offset = None;
        self.is_fetching_next_page = false;
        self.is_success = true;

        let px_per_line = self.settings.px_per_line;
        let mut items: Vec<String> = page.rows.iter().rev().cloned().collect();
        let mut heights: Vec<u32> = items
            .iter()
            .map(|key| {
                u32::from(lines_for_height(
                    RowVisual::for_key(key).height_px,
                    px_per_line,
                ))
            })
            .collect();
        items.append(&mut self.items);
        heights.append(&mut self.heights);
        self.items = items;
        self.heights = heights;
        self.pages.push(page);
        self.rebuild_layout();
        true
    }

    fn estimate_lines(&self) -> u32 {
        u32::from(lines_for_height(
            self.settings.estimate_size_px,
            self.settings.px_per_line,
        ))
    }

    fn size_of(&self, index: usize) -> u32 {
        self.heights
            .get(index)
            .copied()
            .unwrap_or_else(|| self.estimate_lines())
    }

    fn rebuild_layout(&mut self) {
        self.positions = self
            .items
            .iter()
            .enumerate()
            .map(|(index, key)| (key.clone(), index))
            .collect();
        let sizes: Vec<u32> = (0..self.items.len()).map(|i| self.size_of(i)).collect();
        self.layout = Virtualizer::new(sizes, self.settings.overscan);
    }

    /// Select `key`, or clear the selection when it is already selected.
    pub fn toggle_select(&mut self, key: &str) {
        if self.index_of(key).is_none() {
            return;
        }
        if self.selected_key.as_deref() == Some(key) {
            self.selected_key = None;
        } else {
            self.selected_key = Some(key.to_string());
        }
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected_key.as_deref() == Some(key)
    }

    pub fn is_focused(&self, key: &str) -> bool {
        self.focused_key.as_deref() == Some(key)
    }

    pub fn focus(&mut self, key: &str) {
        if self.index_of(key).is_some() {
            self.focused_key = Some(key.to_string());
        }
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focused_key.as_deref().and_then(|key| self.index_of(key))
    }
}
