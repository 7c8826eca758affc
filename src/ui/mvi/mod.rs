//! Model-View-Intent (MVI) primitives for the app's own state.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render pass ──→ commit
//!    ↑                                              │
//!    └──────────────── key press ───────────────────┘
//! ```
//!
//! - **State**: value type describing one piece of UI state
//! - **Intent**: something the user did
//! - **Reducer**: pure function from (State, Intent) to the next State

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
