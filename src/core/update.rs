use crate::core::{
    cmd::Cmd,
    msg::{feed::FeedMsg, system::SystemMsg, Msg},
    state::{viewport::STATUS_BAR_HEIGHT, AppState},
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    let mut commands = match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            if let SystemMsg::Resize(_, height) = system_msg {
                let total = state.feed.total_size();
                state
                    .viewport
                    .set_height(height.saturating_sub(STATUS_BAR_HEIGHT), total);
            }
            state.system.update(system_msg)
        }

        // Scroll messages (delegated to ViewportState)
        Msg::Scroll(scroll_msg) => {
            state.feed.auto_load_paused = false;
            let total = state.feed.total_size();
            state.viewport.update(scroll_msg, total);
            vec![]
        }

        Msg::Feed(feed_msg) => update_feed(feed_msg, &mut state),
    };

    commands.extend(load_more_if_near_top(&mut state));
    (state, commands)
}

fn update_feed(msg: FeedMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        FeedMsg::LoadFirstPage => {
            if !state.feed.pages().is_empty() {
                return vec![];
            }
            match state.feed.begin_fetch() {
                Some(offset) => vec![Cmd::FetchPage { offset }],
                None => vec![],
            }
        }

        FeedMsg::LoadNextPage => {
            state.feed.auto_load_paused = false;
            request_next_page(state)
        }

        FeedMsg::PageLoaded(page) => {
            let offset = page.offset;
            let rows = page.len();
            if !state.feed.push_page(page) {
                return vec![];
            }
            state.system.update(SystemMsg::ClearStatusMessage);
            state.viewport.on_items_changed(
                state.feed.total_size(),
                state.feed.len(),
                state.feed.is_success,
            );
            vec![Cmd::LogInfo {
                message: format!(
                    "Loaded page {offset} ({rows} rows, {} total)",
                    state.feed.len()
                ),
            }]
        }

        FeedMsg::PageFailed { offset, error } => {
            if !state.feed.fail_fetch(offset) {
                return vec![];
            }
            state.viewport.scroll_meta = None;
            state.feed.auto_load_paused = true;
            state
                .system
                .update(SystemMsg::ShowError(format!("page {offset}: {error}")))
        }

        FeedMsg::ToggleSelect(key) => {
            state.feed.toggle_select(&key);
            state.feed.focus(&key);
            vec![]
        }

        FeedMsg::ToggleSelectFocused => {
            if let Some(key) = state.feed.focused_key.clone() {
                state.feed.toggle_select(&key);
            }
            vec![]
        }

        FeedMsg::Unselect => {
            state.feed.selected_key = None;
            vec![]
        }

        FeedMsg::Focus(key) => {
            state.feed.focus(&key);
            reveal_focused(state);
            vec![]
        }

        FeedMsg::FocusNext => {
            let next = match state.feed.focused_index() {
                Some(index) => Some((index + 1).min(state.feed.len().saturating_sub(1))),
                None => state.first_visible_index(),
            };
            focus_index(state, next);
            vec![]
        }

        FeedMsg::FocusPrev => {
            let prev = match state.feed.focused_index() {
                Some(index) => Some(index.saturating_sub(1)),
                None => last_visible_index(state),
            };
            focus_index(state, prev);
            vec![]
        }
    }
}

fn focus_index(state: &mut AppState, index: Option<usize>) {
    let Some(key) = index.and_then(|i| state.feed.key_at(i)).map(str::to_string) else {
        return;
    };
    state.feed.focus(&key);
    reveal_focused(state);
}

fn reveal_focused(state: &mut AppState) {
    let Some(index) = state.feed.focused_index() else {
        return;
    };
    if let Some((start, end)) = state.feed.layout().item_range(index) {
        let total = state.feed.total_size();
        state.viewport.scroll_into_view(start, end, total);
    }
}

fn last_visible_index(state: &AppState) -> Option<usize> {
    let bottom = state.viewport.scroll_top + u32::from(state.viewport.height);
    let layout = state.feed.layout();
    layout
        .index_at(bottom.saturating_sub(1))
        .or_else(|| layout.len().checked_sub(1))
}

fn request_next_page(state: &mut AppState) -> Vec<Cmd> {
    if state.feed.is_fetching_next_page || !state.feed.has_next_page() {
        return vec![];
    }
    let total = state.feed.total_size();
    state.viewport.remember_for_prepend(total);
    match state.feed.begin_fetch() {
        Some(offset) => vec![Cmd::FetchPage { offset }],
        None => {
            state.viewport.scroll_meta = None;
            vec![]
        }
    }
}

/// Request the next page while the viewport sits at the top of the list.
/// Runs after every message so that scrolling, resizing and page loads that
/// leave the list shorter than the screen all keep it filled. Paused after a
/// failed fetch until the user scrolls or asks for more.
fn load_more_if_near_top(state: &mut AppState) -> Vec<Cmd> {
    let threshold = state.feed.settings().load_threshold;
    let ready = state.feed.is_success
        && !state.feed.auto_load_paused
        && !state.viewport.initial_load_pending
        && !state.system.should_quit
        && state.viewport.height > 0
        && state.viewport.is_near_top(threshold);
    if !ready {
        return vec![];
    }
    request_next_page(state)
}
