/// Marker trait for intents: key presses and dialog actions that a reducer
/// turns into a new state.
pub trait Intent: Send + 'static {}
