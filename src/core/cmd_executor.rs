use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        raw_msg::RawMsg,
    },
    infrastructure::page_source::PageSource,
};

/// Command executor that turns Elm commands into side effects.
/// Results of asynchronous work come back to the runtime as [`RawMsg`]s.
#[derive(Clone)]
pub struct CmdExecutor {
    raw_sender: mpsc::UnboundedSender<RawMsg>,
    page_source: Arc<dyn PageSource>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
}

impl CmdExecutor {
    pub fn new(
        raw_sender: mpsc::UnboundedSender<RawMsg>,
        page_source: Arc<dyn PageSource>,
    ) -> Self {
        Self {
            raw_sender,
            page_source,
            tui_sender: None,
        }
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        if cmd.is_async() {
            log::debug!("CmdExecutor: dispatching {}", cmd.name());
        }

        match cmd {
            Cmd::None => {}

            Cmd::FetchPage { offset } => self.spawn_fetch(*offset),

            Cmd::Tui(tui_cmd) => match tui_cmd {
                TuiCommand::Resize { width, height } => {
                    if let Some(tx) = &self.tui_sender {
                        tx.send(TuiCommand::Resize {
                            width: *width,
                            height: *height,
                        })?;
                    } else {
                        log::warn!(
                            "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                        );
                    }
                }
            },

            Cmd::LogError { message } => {
                log::error!("Elm command error: {message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("Elm command info: {message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    /// Get execution statistics
    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            is_raw_sender_closed: self.raw_sender.is_closed(),
            has_tui_sender: self.tui_sender.is_some(),
        }
    }

    fn spawn_fetch(&self, offset: u32) {
        let source = Arc::clone(&self.page_source);
        let sender = self.raw_sender.clone();
        tokio::spawn(async move {
            let msg = match source.fetch(offset).await {
                Ok(page) => RawMsg::PageLoaded(page),
                Err(e) => RawMsg::PageFailed {
                    offset,
                    error: e.to_string(),
                },
            };
            if sender.send(msg).is_err() {
                log::debug!("Page {offset} arrived after the runtime shut down");
            }
        });
    }
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub is_raw_sender_closed: bool,
    pub has_tui_sender: bool,
}

/// Extension trait for Cmd to get human-readable names
trait CmdName {
    fn name(&self) -> String;
}

impl CmdName for Cmd {
    fn name(&self) -> String {
        match self {
            Cmd::None => "None".to_string(),
            Cmd::FetchPage { offset } => format!("FetchPage({offset})"),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
            Cmd::Batch(cmds) => format!("Batch({})", cmds.len()),
            Cmd::Tui(tc) => match tc {
                TuiCommand::Resize { .. } => "Tui(Resize)".to_string(),
            },
        }
    }
}
