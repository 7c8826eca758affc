use crate::hooks::Memo;
use crate::lesson::button::{self, ButtonView};
use crate::lesson::cups::{self, GuestCounter, TeaSetView};
use crate::lesson::gathering::tea_gathering;
use crate::lesson::recipe;
use crate::lesson::render_logger::{self, RenderLoggerView};
use crate::lesson::drinkers;

/// Inputs to one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageProps {
    pub drinkers: u32,
    pub guest_count: u32,
    pub clicked: bool,
}

/// Storage the render pass may touch.
pub struct RenderContext<'a> {
    pub guests: &'a GuestCounter,
    pub recipe_memo: &'a mut Memo<u32, f64>,
}

/// Output of one render pass: everything the terminal draws, plus the
/// dependencies of the post-render effects.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub drinkers_input: String,
    pub recipe: Vec<String>,
    pub tea_set: TeaSetView,
    pub gathering: Vec<String>,
    pub button: ButtonView,
    pub render_logger: RenderLoggerView,
}

pub fn render_page(props: &PageProps, cx: &mut RenderContext<'_>) -> PageView {
    PageView {
        drinkers_input: drinkers::render(props.drinkers),
        recipe: recipe::render(props.drinkers, cx.recipe_memo),
        tea_set: cups::tea_set(cx.guests),
        gathering: tea_gathering(props.guest_count),
        button: button::render(props.clicked),
        render_logger: render_logger::render(props.drinkers),
    }
}
