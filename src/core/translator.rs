use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::core::{
    msg::{feed::FeedMsg, scroll::ScrollMsg, system::SystemMsg, Msg},
    raw_msg::RawMsg,
    state::AppState,
};
use crate::presentation::config::keybindings::Action;

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // The first page is requested as soon as the app starts
        RawMsg::Init => vec![Msg::Feed(FeedMsg::LoadFirstPage)],

        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state),

        // Page source results
        RawMsg::PageLoaded(page) => vec![Msg::Feed(FeedMsg::PageLoaded(page))],
        RawMsg::PageFailed { offset, error } => {
            vec![Msg::Feed(FeedMsg::PageFailed { offset, error })]
        }

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // A tick ends any unfinished multi-key binding
        RawMsg::Tick if !state.system.pending_keys.is_empty() => {
            vec![Msg::System(SystemMsg::ClearPendingKeys)]
        }

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Ctrl+C always quits, whatever the user bound
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = key
    {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    // Bindings are stored without kind/state, so compare on code and modifiers only
    let normalized = KeyEvent::new(key.code, key.modifiers);
    let keybindings = &state.config.config.keybindings;
    let pending = &state.system.pending_keys;

    if let Some(action) = keybindings.get(&vec![normalized]) {
        let mut msgs = Vec::new();
        if !pending.is_empty() {
            msgs.push(Msg::System(SystemMsg::ClearPendingKeys));
        }
        msgs.extend(translate_action_to_msg(action));
        return msgs;
    }

    // Not a single key action, so consider it for multi-key combinations
    let mut sequence = pending.clone();
    sequence.push(normalized);
    if let Some(action) = keybindings.get(&sequence) {
        let mut msgs = vec![Msg::System(SystemMsg::ClearPendingKeys)];
        msgs.extend(translate_action_to_msg(action));
        msgs
    } else if keybindings.keys().any(|keys| keys.starts_with(&sequence)) {
        vec![Msg::System(SystemMsg::PushPendingKey(normalized))]
    } else if !pending.is_empty() {
        vec![Msg::System(SystemMsg::ClearPendingKeys)]
    } else {
        vec![] // No matching keybinding found
    }
}

fn translate_action_to_msg(action: &Action) -> Vec<Msg> {
    match action {
        Action::ScrollUp => vec![Msg::Scroll(ScrollMsg::ScrollBy(-1))],
        Action::ScrollDown => vec![Msg::Scroll(ScrollMsg::ScrollBy(1))],
        Action::HalfPageUp => vec![Msg::Scroll(ScrollMsg::HalfPageUp)],
        Action::HalfPageDown => vec![Msg::Scroll(ScrollMsg::HalfPageDown)],
        Action::ScrollToTop => vec![Msg::Scroll(ScrollMsg::ScrollToTop)],
        Action::ScrollToBottom => vec![Msg::Scroll(ScrollMsg::ScrollToBottom)],
        Action::FocusPrev => vec![Msg::Feed(FeedMsg::FocusPrev)],
        Action::FocusNext => vec![Msg::Feed(FeedMsg::FocusNext)],
        Action::ToggleSelect => vec![Msg::Feed(FeedMsg::ToggleSelectFocused)],
        Action::Unselect => vec![Msg::Feed(FeedMsg::Unselect)],
        Action::LoadMore => vec![Msg::Feed(FeedMsg::LoadNextPage)],
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
    }
}

fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    let lines = i32::try_from(state.feed.settings().mouse_scroll_lines).unwrap_or(i32::MAX);
    match mouse.kind {
        MouseEventKind::ScrollUp => vec![Msg::Scroll(ScrollMsg::ScrollBy(-lines))],
        MouseEventKind::ScrollDown => vec![Msg::Scroll(ScrollMsg::ScrollBy(lines))],
        MouseEventKind::Down(MouseButton::Left) => state
            .key_at_line(mouse.row)
            .map(|key| vec![Msg::Feed(FeedMsg::ToggleSelect(key.to_string()))])
            .unwrap_or_default(),
        _ => vec![],
    }
}
