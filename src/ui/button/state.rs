use crate::ui::mvi::UiState;

/// Local state of the button with an effect. `Clicked` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Unclicked,
    Clicked,
}

impl UiState for ButtonState {}

impl ButtonState {
    pub fn is_clicked(&self) -> bool {
        matches!(self, Self::Clicked)
    }
}
