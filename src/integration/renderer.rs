use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use crate::{core::state::AppState, infrastructure::tui, presentation::components::Components};

#[derive(Debug, Default)]
pub struct Renderer {
    components: Components,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            components: Components::new(),
        }
    }

    pub async fn render(
        &self,
        tui: &Arc<Mutex<dyn tui::TuiLike + Send>>,
        state: &AppState,
    ) -> Result<()> {
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut ratatui::Frame<'_>| self.components.render(f, state);
        guard.draw(&mut draw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{config::Config, tui::test::TestTui};

    #[tokio::test]
    async fn renderer_renders_with_test_tui() {
        let test_tui = Arc::new(Mutex::new(
            TestTui::new(40, 6).expect("failed to create TestTui"),
        ));
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = test_tui.clone();
        let state = AppState::new_with_config(Config::default());

        Renderer::new()
            .render(&tui, &state)
            .await
            .expect("render should succeed");

        let guard = test_tui.lock().await;
        assert_eq!(guard.draw_count(), 1);
        let lines = guard.lines();
        assert_eq!(lines[2].trim(), "No rows");
        assert!(lines[5].starts_with(" 0 rows | 0 pages"));
    }
}
