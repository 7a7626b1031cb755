//! Component collection
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::core::state::{viewport::STATUS_BAR_HEIGHT, AppState};

pub mod feed_list;
pub mod status_bar;

pub use feed_list::FeedListComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
#[derive(Debug, Default)]
pub struct Components {
    pub feed: FeedListComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all components
    ///
    /// The feed takes every line but the last; the status bar sits below it.
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let [feed_area, status_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(frame.area());

        self.feed.view(state, frame, feed_area);
        self.status_bar.view(state, frame, status_area);
    }
}
