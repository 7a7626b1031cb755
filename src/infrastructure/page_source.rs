//! Paginated row sources.
//!
//! The feed only knows how to ask for "page N". [`SimulatedPageSource`]
//! answers after an artificial delay, standing in for a remote API.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use color_eyre::eyre::Result;

use crate::{
    domain::page::{page_rows, Page},
    infrastructure::config::FeedSettings,
};

pub type PageFuture<'a> = Pin<Box<dyn Future<Output = Result<Page>> + Send + 'a>>;

pub trait PageSource: Send + Sync {
    fn fetch(&self, offset: u32) -> PageFuture<'_>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedPageSource {
    limit: u32,
    delay: Duration,
    max_rows: Option<u32>,
}

impl SimulatedPageSource {
    pub fn new(limit: u32, delay: Duration) -> Self {
        Self {
            limit,
            delay,
            max_rows: None,
        }
    }

    pub fn from_settings(settings: &FeedSettings) -> Self {
        Self::new(
            settings.page_size,
            Duration::from_millis(settings.fetch_delay_ms),
        )
        .max_rows(settings.max_rows)
    }

    pub fn max_rows(mut self, max_rows: Option<u32>) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Build page `offset` without waiting.
    pub fn page(&self, offset: u32) -> Page {
        let mut rows = page_rows(self.limit, offset);
        let start = offset.saturating_mul(self.limit);
        let next_offset = match self.max_rows {
            Some(max) => {
                rows.truncate(max.saturating_sub(start) as usize);
                let end = start.saturating_add(self.limit);
                (end < max).then_some(offset + 1)
            }
            None => Some(offset + 1),
        };
        Page {
            offset,
            rows,
            next_offset,
        }
    }
}

impl PageSource for SimulatedPageSource {
    fn fetch(&self, offset: u32) -> PageFuture<'_> {
        Box::pin(async move {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            let page = self.page(offset);
            log::debug!(
                "Fetched page {offset} with {} rows (next: {:?})",
                page.rows.len(),
                page.next_offset
            );
            Ok(page)
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_unbounded_source_always_has_next() {
        let source = SimulatedPageSource::new(20, Duration::ZERO);
        let page = source.page(3);
        assert_eq!(page.offset, 3);
        assert_eq!(page.rows.len(), 20);
        assert_eq!(page.rows[0], "Async loaded row 60");
        assert_eq!(page.next_offset, Some(4));
    }

    #[test]
    fn test_bounded_source_truncates_last_page() {
        let source = SimulatedPageSource::new(20, Duration::ZERO).max_rows(Some(45));
        assert_eq!(source.page(1).next_offset, Some(2));

        let last = source.page(2);
        assert_eq!(last.rows.len(), 5);
        assert_eq!(last.rows[4], "Async loaded row 44");
        assert_eq!(last.next_offset, None);
    }

    #[test]
    fn test_bounded_source_exact_multiple() {
        let source = SimulatedPageSource::new(10, Duration::ZERO).max_rows(Some(20));
        assert_eq!(source.page(1).rows.len(), 10);
        assert_eq!(source.page(1).next_offset, None);
    }

    #[tokio::test]
    async fn test_fetch_resolves_page() {
        let source = SimulatedPageSource::new(5, Duration::from_millis(1));
        let page = source.fetch(0).await.expect("simulated fetch cannot fail");
        assert_eq!(page.rows.len(), 5);
        assert_eq!(page.next_offset, Some(1));
    }
}
