//! Shared test utilities.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tea_gathering::config::Config;
use tea_gathering::lesson::PageView;
use tea_gathering::ui::app::App;
use tea_gathering::ui::input::handle_key;
use tea_gathering::ui::runtime::render_and_commit;

pub type TestTerminal = Terminal<TestBackend>;

pub fn test_terminal() -> TestTerminal {
    Terminal::new(TestBackend::new(100, 32)).expect("test terminal")
}

pub fn app_with(configure: impl FnOnce(&mut Config)) -> App {
    let mut config = Config::default();
    configure(&mut config);
    App::new(&config)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

/// Mirrors one turn of the UI loop: handle the key, then render and commit
/// if the app asked for it.
pub fn send(
    terminal: &mut TestTerminal,
    app: &mut App,
    event: KeyEvent,
) -> Option<PageView> {
    handle_key(app, event);
    frame_if_requested(terminal, app)
}

pub fn frame_if_requested(terminal: &mut TestTerminal, app: &mut App) -> Option<PageView> {
    if app.take_render_request() {
        Some(render_and_commit(terminal, app).expect("render"))
    } else {
        None
    }
}

/// Screen contents, one string per row.
pub fn screen(terminal: &TestTerminal) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

pub fn screen_contains(terminal: &TestTerminal, needle: &str) -> bool {
    screen(terminal).iter().any(|row| row.contains(needle))
}
