pub mod feed;
pub mod system;
pub mod viewport;

use crate::infrastructure::config::Config;

pub use feed::FeedState;
pub use system::SystemState;
pub use viewport::ViewportState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub feed: FeedState,
    pub viewport: ViewportState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    pub fn new_with_config(config: Config) -> Self {
        Self {
            feed: FeedState::new(config.feed.clone()),
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// Index of the row at the top edge of the viewport
    pub fn first_visible_index(&self) -> Option<usize> {
        self.feed.layout().index_at(self.viewport.scroll_top)
    }

    /// Key of the row covering the given viewport line
    pub fn key_at_line(&self, line: u16) -> Option<&str> {
        if line >= self.viewport.height {
            return None;
        }
        let offset = self.viewport.scroll_top + u32::from(line);
        self.feed
            .layout()
            .index_at(offset)
            .and_then(|index| self.feed.key_at(index))
    }
}
