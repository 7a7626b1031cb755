//! Feed list component
//!
//! Draws the rows intersecting the viewport, clipped at both edges, plus the
//! paging banner on the top line.

use ratatui::{layout::Flex, prelude::*, widgets::*};

use crate::{core::state::AppState, presentation::widgets::row_card::RowCard};

/// Feed list component
///
/// Stateless: everything it draws comes from `AppState`.
#[derive(Debug, Clone, Default)]
pub struct FeedListComponent;

impl FeedListComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        frame.render_widget(Block::default().style(styles.style("background")), area);

        if state.feed.is_empty() {
            let text = if state.feed.is_fetching_next_page {
                "Loading..."
            } else {
                "No rows"
            };
            let [middle] = Layout::vertical([Constraint::Length(1)])
                .flex(Flex::Center)
                .areas(area);
            frame.render_widget(
                Paragraph::new(text)
                    .style(styles.style("loading"))
                    .alignment(Alignment::Center),
                middle,
            );
            return;
        }

        let scroll_top = state.viewport.scroll_top;
        let viewport_end = scroll_top + u32::from(area.height);
        let layout = state.feed.layout();

        for item in layout.virtual_items(scroll_top, u32::from(area.height)) {
            // Overscanned items fall outside the viewport
            let visible_start = item.start.max(scroll_top);
            let visible_end = item.end.min(viewport_end);
            if visible_start >= visible_end {
                continue;
            }
            let (Some(key), Some(visual)) =
                (state.feed.key_at(item.index), state.feed.visual_for(item.index))
            else {
                continue;
            };

            let row_area = Rect::new(
                area.x,
                area.y + (visible_start - scroll_top) as u16,
                area.width,
                (visible_end - visible_start) as u16,
            );
            let card = RowCard::new(state.feed.label_for(item.index), visual, item.size, styles)
                .skip_top(visible_start - item.start)
                .selected(state.feed.is_selected(key))
                .focused(state.feed.is_focused(key));
            frame.render_widget(card, row_area);
        }

        if let Some(banner) = self.banner(state) {
            let line = Rect::new(area.x, area.y, area.width, area.height.min(1));
            frame.render_widget(Clear, line);
            frame.render_widget(
                Paragraph::new(banner)
                    .style(styles.style("loading"))
                    .alignment(Alignment::Center),
                line,
            );
        }
    }

    /// Text shown on the top line, if any.
    pub fn banner(&self, state: &AppState) -> Option<&'static str> {
        if state.feed.is_fetching_next_page {
            Some("Loading...")
        } else if !state.feed.has_next_page() && state.viewport.scroll_top == 0 {
            Some("No more rows")
        } else {
            None
        }
    }
}
