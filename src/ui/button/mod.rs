mod intent;
mod reducer;
mod state;

pub use intent::ButtonIntent;
pub use reducer::ButtonReducer;
pub use state::ButtonState;
