use crate::console::Console;

pub const SOURCE: &str = "render-logger";

/// What the logger contributes to the page: nothing visible, only the value
/// its effect depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderLoggerView {
    pub watched: u32,
}

pub fn render(value: u32) -> RenderLoggerView {
    RenderLoggerView { watched: value }
}

/// Post-render effect, run on commits where `watched` changed.
pub fn effect(view: RenderLoggerView, console: &mut Console) {
    console.log(SOURCE, format!("Drinkers changed to {}", view.watched));
}
