use crate::config::Config;
use crate::lesson::PageView;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::io;

pub fn run(config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(config);
    let events = EventHandler::new();
    tracing::info!(
        drinkers = app.drinkers(),
        guests = app.guest_count(),
        strict = app.is_strict_mode(),
        "lesson started"
    );

    let mut page = None;
    loop {
        if app.take_render_request() {
            page = Some(render_and_commit(&mut terminal, &mut app)?);
        }
        // Effects may have written to the console; repaint without
        // re-running any component.
        if let Some(page) = &page {
            terminal
                .draw(|frame| draw(frame, &app, page))
                .map_err(io::Error::other)?;
        }
        if app.should_quit() {
            break;
        }

        match events.next() {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "terminal resized");
            }
            Err(_) => break,
        }
    }

    tracing::info!(
        render_passes = app.render_passes(),
        commits = app.commits(),
        "lesson finished"
    );
    drop(guard);
    Ok(())
}

/// One frame: render the tree, draw it (the commit point), then run the
/// post-render effects.
pub fn render_and_commit<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<PageView>
where
    B::Error: Send + Sync + 'static,
{
    let page = app.render();
    terminal
        .draw(|frame| draw(frame, app, &page))
        .map_err(io::Error::other)?;
    app.commit(&page);
    Ok(page)
}
