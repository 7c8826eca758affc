mod loader;
mod types;

pub use loader::{ConfigError, MAX_GUESTS};
pub use types::{Config, LessonConfig, UiConfig};
