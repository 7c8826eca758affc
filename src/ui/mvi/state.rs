/// Marker trait for UI state.
///
/// `Default` is the initial state and lets the app move the state out with
/// `std::mem::take` while a reducer runs. `PartialEq` lets the app skip
/// re-rendering when a reducer returns the same state.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
