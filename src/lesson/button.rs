use crate::console::Console;

pub const SOURCE: &str = "button";
pub const ALERT_MESSAGE: &str = "You clicked me!";
pub const CLICKED_LOG: &str = "Button was clicked!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub clicked: bool,
}

pub fn render(clicked: bool) -> ButtonView {
    ButtonView {
        label: if clicked { "Clicked" } else { "Click me" },
        clicked,
    }
}

/// Post-render effect keyed on `clicked`. Logs only once the button has
/// been pressed.
pub fn effect(view: ButtonView, console: &mut Console) {
    if view.clicked {
        console.log(SOURCE, CLICKED_LOG);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effect_is_silent_before_click() {
        let mut console = Console::new(4);
        effect(render(false), &mut console);
        assert!(console.is_empty());
    }

    #[test]
    fn effect_logs_after_click() {
        let mut console = Console::new(4);
        effect(render(true), &mut console);
        assert_eq!(console.count(CLICKED_LOG), 1);
    }
}
