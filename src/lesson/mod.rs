//! The lesson's components.
//!
//! Each component is a function from props to plain view data. Nothing here
//! draws to the terminal; [`crate::ui::render`] turns a [`PageView`] into
//! widgets. Post-render effects are exposed as separate functions that the
//! commit step calls.

pub mod button;
pub mod cups;
pub mod drinkers;
pub mod gathering;
pub mod page;
pub mod recipe;
pub mod render_logger;

pub use cups::GuestCounter;
pub use page::{render_page, PageProps, PageView, RenderContext};
