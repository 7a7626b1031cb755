use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemMsg {
    // Application control
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),

    // Multi-key bindings
    PushPendingKey(KeyEvent),
    ClearPendingKeys,

    // Status management
    UpdateStatusMessage(String),
    ClearStatusMessage,
    ShowError(String),
}
