use crate::ui::mvi::UiState;

/// Blocking notification. While visible, it is the only thing that takes
/// input.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AlertState {
    #[default]
    Hidden,
    Visible {
        message: String,
    },
}

impl UiState for AlertState {}

impl AlertState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Visible { message } => Some(message),
            Self::Hidden => None,
        }
    }
}
