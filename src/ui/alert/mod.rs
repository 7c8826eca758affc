mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_alert;
pub use intent::AlertIntent;
pub use reducer::AlertReducer;
pub use state::AlertState;
