use crate::ui::button::intent::ButtonIntent;
use crate::ui::button::state::ButtonState;
use crate::ui::mvi::Reducer;

pub struct ButtonReducer;

impl Reducer for ButtonReducer {
    type State = ButtonState;
    type Intent = ButtonIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ButtonIntent::Press => ButtonState::Clicked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_clicks() {
        let state = ButtonReducer::reduce(ButtonState::Unclicked, ButtonIntent::Press);
        assert!(state.is_clicked());
    }

    #[test]
    fn clicked_stays_clicked() {
        let state = ButtonReducer::reduce(ButtonState::Clicked, ButtonIntent::Press);
        assert_eq!(state, ButtonState::Clicked);
    }
}
