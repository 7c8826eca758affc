use super::intent::Intent;
use super::state::UiState;

/// The only place a state transition happens.
///
/// `reduce` must stay pure. Alerts, logging and re-render requests are done
/// by the caller around the dispatch.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
