//! Scroll position of the feed viewport.
//!
//! Offsets are in terminal lines measured from the top of the whole list.
//! Rows are prepended when older pages arrive, so after every page load the
//! offset recorded when the page was requested is shifted by the growth of
//! the list to keep the same rows on screen.

use crate::core::msg::scroll::ScrollMsg;

/// Lines reserved below the feed for the status bar.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Snapshot taken when a page is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMeta {
    pub prev_scroll_height: u32,
    pub prev_scroll_top: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportState {
    pub scroll_top: u32,
    /// Visible lines available to the feed
    pub height: u16,
    /// Set until the first page has been shown scrolled to the bottom
    pub initial_load_pending: bool,
    pub scroll_meta: Option<ScrollMeta>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            scroll_top: 0,
            height: 0,
            initial_load_pending: true,
            scroll_meta: None,
        }
    }
}

impl ViewportState {
    pub fn update(&mut self, msg: ScrollMsg, total: u32) {
        match msg {
            ScrollMsg::ScrollBy(delta) => self.scroll_by(i64::from(delta), total),
            ScrollMsg::HalfPageUp => self.scroll_by(-i64::from(self.half_page()), total),
            ScrollMsg::HalfPageDown => self.scroll_by(i64::from(self.half_page()), total),
            ScrollMsg::ScrollToTop => self.scroll_to_top(),
            ScrollMsg::ScrollToBottom => self.scroll_to_bottom(total),
        }
    }

    pub fn max_scroll_top(&self, total: u32) -> u32 {
        total.saturating_sub(u32::from(self.height))
    }

    pub fn clamp(&mut self, total: u32) {
        self.scroll_top = self.scroll_top.min(self.max_scroll_top(total));
    }

    pub fn half_page(&self) -> u16 {
        (self.height / 2).max(1)
    }

    pub fn scroll_by(&mut self, delta: i64, total: u32) {
        let target = (i64::from(self.scroll_top) + delta).max(0);
        self.scroll_top = u32::try_from(target).unwrap_or(u32::MAX);
        self.clamp(total);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_top = 0;
    }

    pub fn scroll_to_bottom(&mut self, total: u32) {
        self.scroll_top = self.max_scroll_top(total);
    }

    pub fn set_height(&mut self, height: u16, total: u32) {
        self.height = height;
        self.clamp(total);
    }

    /// Scroll the least amount needed to show `[start, end)`. Rows taller
    /// than the viewport are aligned to their top edge.
    pub fn scroll_into_view(&mut self, start: u32, end: u32, total: u32) {
        let bottom = self.scroll_top + u32::from(self.height);
        if start < self.scroll_top {
            self.scroll_top = start;
        } else if end > bottom {
            self.scroll_top = end.saturating_sub(u32::from(self.height)).min(start);
        }
        self.clamp(total);
    }

    pub fn is_near_top(&self, threshold: u32) -> bool {
        self.scroll_top <= threshold
    }

    pub fn remember_for_prepend(&mut self, total: u32) {
        self.scroll_meta = Some(ScrollMeta {
            prev_scroll_height: total,
            prev_scroll_top: self.scroll_top,
        });
    }

    /// Re-anchor after the list changed. The first successful load jumps to
    /// the bottom; later loads keep the rows that were on screen in place.
    pub fn on_items_changed(&mut self, total: u32, item_count: usize, is_success: bool) {
        if self.initial_load_pending && is_success && item_count > 0 {
            self.scroll_to_bottom(total);
            self.initial_load_pending = false;
            self.scroll_meta = None;
            return;
        }

        if let Some(meta) = self.scroll_meta.take() {
            let grown = total.saturating_sub(meta.prev_scroll_height);
            log::debug!(
                "Restoring scroll: grew by {grown} lines from offset {}",
                meta.prev_scroll_top
            );
            self.scroll_top = meta.prev_scroll_top.saturating_add(grown);
        }
        self.clamp(total);
    }
}
