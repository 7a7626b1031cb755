use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use infiniscroll::{
    core::raw_msg::RawMsg,
    infrastructure::{
        config::Config,
        page_source::SimulatedPageSource,
        tui::{event_source::EventSource, test::TestTui, Event, TuiLike},
    },
    integration::app_runner::AppRunner,
};
use pretty_assertions::assert_eq;
use tokio::sync::Mutex;

fn create_runner(
    width: u16,
    height: u16,
    source: SimulatedPageSource,
) -> (AppRunner, Arc<Mutex<TestTui>>) {
    let test_tui = Arc::new(Mutex::new(
        TestTui::new(width, height).expect("failed to create TestTui"),
    ));
    let tui: Arc<Mutex<dyn TuiLike + Send>> = test_tui.clone();
    let config = Config::embedded().expect("embedded config");
    let runner = AppRunner::new(
        config,
        tui,
        EventSource::test(Vec::<Event>::new()),
        Arc::new(source),
    );
    (runner, test_tui)
}

/// Send each message after its delay, then quit.
fn schedule(runner: &AppRunner, script: Vec<(u64, RawMsg)>) {
    let sender = runner.runtime().raw_sender();
    tokio::spawn(async move {
        for (delay_ms, msg) in script {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            if sender.send(msg).is_err() {
                return;
            }
        }
    });
}

fn key(c: char) -> RawMsg {
    RawMsg::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

#[tokio::test]
async fn test_first_page_is_shown_scrolled_to_bottom() {
    let (mut runner, test_tui) =
        create_runner(40, 12, SimulatedPageSource::new(20, Duration::ZERO));
    schedule(&runner, vec![(100, RawMsg::Quit)]);

    tokio::time::timeout(Duration::from_secs(5), runner.run())
        .await
        .expect("runner should quit")
        .expect("run");

    let state = runner.runtime().state();
    assert_eq!(state.feed.len(), 20);
    assert_eq!(state.viewport.height, 11);
    assert_eq!(state.viewport.scroll_top, 349);

    let lines = test_tui.lock().await.lines();
    // Row 0 spans the last four feed lines, its pill on the second of them
    assert_eq!(lines[8].trim(), "1");
    assert_eq!(lines[10], "─".repeat(40));
    assert!(lines[11].starts_with(" 20 rows | 1 pages | line 349/360"));
}

#[tokio::test]
async fn test_scrolling_to_top_prepends_next_page() {
    let (mut runner, _tui) =
        create_runner(40, 12, SimulatedPageSource::new(20, Duration::ZERO));
    schedule(&runner, vec![(100, key('g')), (200, RawMsg::Quit)]);

    tokio::time::timeout(Duration::from_secs(5), runner.run())
        .await
        .expect("runner should quit")
        .expect("run");

    let state = runner.runtime().state();
    assert_eq!(state.feed.pages().len(), 2);
    assert_eq!(state.feed.len(), 40);
    assert!(!state.feed.is_fetching_next_page);
    // The newest row of the first page stays at the top edge of the viewport
    assert_eq!(
        state.first_visible_index().and_then(|i| state.feed.key_at(i)),
        Some("Async loaded row 19")
    );
    assert_eq!(state.feed.key_at(0), Some("Async loaded row 39"));
}

#[tokio::test]
async fn test_bounded_source_shows_end_banner() {
    let source = SimulatedPageSource::new(5, Duration::ZERO).max_rows(Some(10));
    let (mut runner, test_tui) = create_runner(30, 80, source);
    schedule(&runner, vec![(100, key('g')), (200, RawMsg::Quit)]);

    tokio::time::timeout(Duration::from_secs(5), runner.run())
        .await
        .expect("runner should quit")
        .expect("run");

    let state = runner.runtime().state();
    // The tall viewport keeps requesting pages until the source is exhausted,
    // then `g` brings the top of the list into view
    assert_eq!(state.feed.len(), 10);
    assert!(!state.feed.has_next_page());

    let lines = test_tui.lock().await.lines();
    assert_eq!(lines[0].trim(), "No more rows");
}

#[tokio::test]
async fn test_key_events_from_terminal_are_processed() {
    let test_tui = Arc::new(Mutex::new(TestTui::new(40, 12).expect("TestTui")));
    let tui: Arc<Mutex<dyn TuiLike + Send>> = test_tui.clone();
    let config = Config::embedded().expect("embedded config");
    let events = vec![
        Event::Resize(50, 20),
        Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
    ];
    let source = Arc::new(SimulatedPageSource::new(20, Duration::ZERO));
    let mut runner = AppRunner::new(config, tui, EventSource::test(events), source);

    runner.run().await.expect("run");

    let state = runner.runtime().state();
    assert!(state.system.should_quit);
    assert_eq!(state.viewport.height, 19);
    assert_eq!(test_tui.lock().await.lines().len(), 20);
}
