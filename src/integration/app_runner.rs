use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::layout::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    infrastructure::{
        config::Config,
        page_source::{PageSource, SimulatedPageSource},
        tui::{self, event_source::EventSource},
    },
    integration::{renderer::Renderer, runtime::Runtime},
};

/// Owns the update loop: terminal events in, rendered frames out.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    event_source: EventSource,
    renderer: Renderer,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
}

impl AppRunner {
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Build a runner from explicit parts, used by tests to inject a
    /// `TestTui`, scripted events or a custom page source.
    pub fn new(
        config: Config,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        event_source: EventSource,
        page_source: Arc<dyn PageSource>,
    ) -> Self {
        let initial_state = AppState::new_with_config(config);
        let mut runtime = Runtime::new(initial_state, page_source);
        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        runtime.set_tui_sender(tui_tx);

        Self {
            runtime,
            tui,
            event_source,
            renderer: Renderer::new(),
            tui_rx,
        }
    }

    /// Runner reading events from `tui` and paging from the simulated source.
    pub fn new_with_config(config: Config, tui: Arc<Mutex<dyn tui::TuiLike + Send>>) -> Self {
        let page_source = Arc::new(SimulatedPageSource::from_settings(&config.feed));
        let event_source = EventSource::real(tui.clone());
        Self::new(config, tui, event_source, page_source)
    }

    /// Run the main loop until the state asks to quit.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.send_current_size().await?;
        self.runtime.send_raw_msg(RawMsg::Init);

        loop {
            match self.event_source.next().await {
                Some(event) => self.handle_event(event),
                // Scripted sources run dry; keep draining fetch results
                None => tokio::time::sleep(Duration::from_millis(1)).await,
            }

            if let Err(e) = self.runtime.run_update_cycle() {
                log::error!("Runtime error: {e}");
                self.runtime
                    .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
            }

            while let Ok(cmd) = self.tui_rx.try_recv() {
                match cmd {
                    TuiCommand::Resize { width, height } => {
                        self.tui
                            .lock()
                            .await
                            .resize(Rect::new(0, 0, width, height))?;
                    }
                }
            }

            self.render().await?;

            if self.runtime.state().system.should_suspend {
                self.suspend().await?;
            }

            if self.runtime.state().system.should_quit {
                break;
            }
        }

        self.tui.lock().await.exit()?;
        Ok(())
    }

    fn handle_event(&mut self, event: tui::Event) {
        let raw = match event {
            tui::Event::Quit | tui::Event::Closed => RawMsg::Quit,
            tui::Event::Tick => RawMsg::Tick,
            tui::Event::Resize(w, h) => RawMsg::Resize(w, h),
            tui::Event::Key(key) => RawMsg::Key(key),
            tui::Event::Mouse(mouse) => RawMsg::Mouse(mouse),
            tui::Event::Error => RawMsg::Error("terminal input error".to_string()),
            // Rendering happens once per loop below; Init is sent on startup
            tui::Event::Render
            | tui::Event::Init
            | tui::Event::FocusGained
            | tui::Event::FocusLost
            | tui::Event::Paste(_) => return,
        };
        self.runtime.send_raw_msg(raw);
    }

    async fn send_current_size(&mut self) -> Result<()> {
        let size = self.tui.lock().await.size()?;
        self.runtime
            .send_raw_msg(RawMsg::Resize(size.width, size.height));
        Ok(())
    }

    async fn suspend(&mut self) -> Result<()> {
        log::info!("Suspending");
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            // Execution continues here once the shell resumes the process
            tui.resume()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.send_current_size().await?;
        self.runtime.run_update_cycle().map_err(color_eyre::eyre::Error::msg)?;
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await
    }
}
