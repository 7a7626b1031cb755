//! Status bar component
//!
//! One line at the bottom: feed counters on the left, then either the latest
//! status message or the selected row.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn summary(&self, state: &AppState) -> String {
        let feed = &state.feed;
        let mut summary = format!(
            " {} rows | {} pages | line {}/{}",
            feed.len(),
            feed.pages().len(),
            state.viewport.scroll_top,
            feed.total_size()
        );
        if feed.is_fetching_next_page {
            summary.push_str(" | fetching");
        }
        summary
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let mut spans = vec![Span::raw(self.summary(state))];

        if let Some(message) = &state.system.status_message {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(message.clone(), styles.style("status_message")));
        } else if let Some(key) = &state.feed.selected_key {
            spans.push(Span::raw(format!(" | selected: {key}")));
        }

        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(styles.style("status_bar")),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::infrastructure::config::Config;

    fn render(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).expect("terminal");
        terminal
            .draw(|f| StatusBarComponent::new().view(state, f, f.area()))
            .expect("draw");
        let buffer = terminal.backend().buffer();
        (0..60).map(|x| buffer[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_summary_of_empty_feed() {
        let state = AppState::new_with_config(Config::default());
        assert_eq!(
            StatusBarComponent::new().summary(&state),
            " 0 rows | 0 pages | line 0/0"
        );
    }

    #[test]
    fn test_status_message_wins_over_selection() {
        let mut state = AppState::new_with_config(Config::default());
        state.feed.selected_key = Some("Async loaded row 1".to_string());
        assert!(render(&state).contains("selected: Async loaded row 1"));

        state.system.status_message = Some("Error: boom".to_string());
        let line = render(&state);
        assert!(line.contains("Error: boom"));
        assert!(!line.contains("selected"));
    }

    #[test]
    fn test_fetching_indicator() {
        let mut state = AppState::new_with_config(Config::default());
        state.feed.begin_fetch();
        assert!(render(&state).contains("fetching"));
    }
}
