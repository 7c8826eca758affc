//! Per-component storage that survives between render passes.
//!
//! Components are plain functions and keep nothing between calls. State that
//! must outlive a single pass lives in these slots, owned by the
//! [`App`](crate::ui::app::App):
//!
//! - [`Memo`]: caches a derived value until its dependencies change
//! - [`EffectSlot`]: remembers the dependencies of a post-render effect so the
//!   effect only runs on commits where they changed

mod effect;
mod memo;

pub use effect::EffectSlot;
pub use memo::Memo;
