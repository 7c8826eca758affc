//! Terminal lesson on rendering purity: pure and impure components, local
//! mutation, and side effects in handlers and post-render effects.

pub mod cli;
pub mod config;
pub mod console;
pub mod hooks;
pub mod lesson;
pub mod logging;
pub mod ui;
