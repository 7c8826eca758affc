use crate::ui::alert::intent::AlertIntent;
use crate::ui::alert::state::AlertState;
use crate::ui::mvi::Reducer;

pub struct AlertReducer;

impl Reducer for AlertReducer {
    type State = AlertState;
    type Intent = AlertIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AlertIntent::Show { message } => match state {
                // An alert blocks everything, including a second alert.
                visible @ AlertState::Visible { .. } => visible,
                AlertState::Hidden => AlertState::Visible { message },
            },
            AlertIntent::Dismiss => AlertState::Hidden,
        }
    }
}
