//! What actually lands on the terminal.

mod common;

use common::*;
use crossterm::event::KeyCode;

#[test]
fn mount_draws_every_section() {
    let mut terminal = test_terminal();
    let mut app = app_with(|_| {});
    frame_if_requested(&mut terminal, &mut app);

    assert!(screen_contains(&terminal, "Keeping Components Pure"));
    assert!(screen_contains(&terminal, "Drinkers: [ 2 ]"));
    assert!(screen_contains(&terminal, "1. Boil 2 cups of water."));
    assert!(screen_contains(&terminal, "Tea gathering"));
    assert!(screen_contains(&terminal, "[ Click me ]"));
}

#[test]
fn console_shows_effect_output_after_repaint() {
    let mut terminal = test_terminal();
    let mut app = app_with(|_| {});
    let page = frame_if_requested(&mut terminal, &mut app).expect("mount");
    // The commit ran after the draw; the loop repaints to show the console.
    terminal
        .draw(|frame| tea_gathering::ui::render::draw(frame, &app, &page))
        .expect("repaint");
    assert!(screen_contains(&terminal, "[render-logger] Drinkers changed to 2"));
}

#[test]
fn alert_popup_is_drawn() {
    let mut terminal = test_terminal();
    let mut app = app_with(|_| {});
    let page = frame_if_requested(&mut terminal, &mut app).expect("mount");
    send(&mut terminal, &mut app, key(KeyCode::Tab));
    send(&mut terminal, &mut app, key(KeyCode::Enter));
    terminal
        .draw(|frame| tea_gathering::ui::render::draw(frame, &app, &page))
        .expect("repaint");
    assert!(screen_contains(&terminal, "You clicked me!"));
    assert!(screen_contains(&terminal, "[ OK ]"));
}

#[test]
fn strict_mode_badge_in_header() {
    let mut terminal = test_terminal();
    let mut app = app_with(|config| config.lesson.strict_mode = true);
    frame_if_requested(&mut terminal, &mut app);
    assert!(screen_contains(&terminal, "strict mode"));
}
