//! Numeric input bound to the app's drinker count.
//!
//! Holds no state of its own: every key is applied to the current value's
//! text, coerced back to a number and handed to the change callback.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Parses raw input text. Anything that is not a plain non-negative
/// integer becomes `0`.
pub fn coerce_drinkers(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// Applies `key` to `value`. Calls `on_change` and returns `true` when the
/// key belongs to this input.
pub fn handle_key(value: u32, key: KeyEvent, on_change: impl FnOnce(u32)) -> bool {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return false;
    }

    let next = match key.code {
        KeyCode::Char(ch) => {
            let mut raw = value.to_string();
            raw.push(ch);
            coerce_drinkers(&raw)
        }
        KeyCode::Backspace => {
            let mut raw = value.to_string();
            raw.pop();
            coerce_drinkers(&raw)
        }
        KeyCode::Up => value.saturating_add(1),
        KeyCode::Down => value.saturating_sub(1),
        _ => return false,
    };

    tracing::debug!(from = value, to = next, "drinkers input");
    on_change(next);
    true
}

/// Text shown inside the input box.
pub fn render(value: u32) -> String {
    value.to_string()
}
