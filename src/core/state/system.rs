use crossterm::event::KeyEvent;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
    /// Keys typed so far of a multi-key binding
    pub pending_keys: Vec<KeyEvent>,
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            // System control
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![]
            }

            SystemMsg::Resize(width, height) => {
                // Resize generates a TUI resize command
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::PushPendingKey(key) => {
                self.pending_keys.push(key);
                vec![]
            }

            SystemMsg::ClearPendingKeys => {
                self.pending_keys.clear();
                vec![]
            }

            // Status management
            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message);
                vec![]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![]
            }

            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {error}"));
                vec![Cmd::LogError { message: error }]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_system_state_quit_isolated() {
        let mut system = SystemState::default();
        assert!(!system.should_quit);

        let cmds = system.update(SystemMsg::Quit);
        assert!(system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_suspend_and_resume() {
        let mut system = SystemState::default();
        system.update(SystemMsg::Suspend);
        assert!(system.should_suspend);
        system.update(SystemMsg::Resume);
        assert!(!system.should_suspend);
    }

    #[test]
    fn test_resize_emits_tui_command() {
        let mut system = SystemState::default();
        let cmds = system.update(SystemMsg::Resize(80, 24));
        assert_eq!(
            cmds,
            vec![Cmd::Tui(TuiCommand::Resize {
                width: 80,
                height: 24
            })]
        );
    }

    #[test]
    fn test_pending_keys() {
        let mut system = SystemState::default();
        let z = KeyEvent::from(crossterm::event::KeyCode::Char('z'));
        system.update(SystemMsg::PushPendingKey(z));
        system.update(SystemMsg::PushPendingKey(z));
        assert_eq!(system.pending_keys, vec![z, z]);

        system.update(SystemMsg::ClearPendingKeys);
        assert!(system.pending_keys.is_empty());
    }

    #[test]
    fn test_status_messages() {
        let mut system = SystemState::default();
        system.update(SystemMsg::UpdateStatusMessage("hello".to_string()));
        assert_eq!(system.status_message.as_deref(), Some("hello"));

        system.update(SystemMsg::ClearStatusMessage);
        assert_eq!(system.status_message, None);

        let cmds = system.update(SystemMsg::ShowError("boom".to_string()));
        assert_eq!(system.status_message.as_deref(), Some("Error: boom"));
        assert_eq!(
            cmds,
            vec![Cmd::LogError {
                message: "boom".to_string()
            }]
        );
    }
}
