use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lesson: LessonConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Starting values for the lesson page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonConfig {
    /// Drinker count shown when the page opens (default: 2).
    #[serde(default = "default_initial_drinkers")]
    pub initial_drinkers: u32,
    /// Number of cups in the tea gathering (default: 3).
    #[serde(default = "default_guest_count")]
    pub guest_count: u32,
    /// Run every component twice per render pass (default: false).
    #[serde(default)]
    pub strict_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Lines kept in the console pane (default: 50).
    #[serde(default = "default_console_capacity")]
    pub console_capacity: usize,
}

fn default_initial_drinkers() -> u32 {
    2
}

fn default_guest_count() -> u32 {
    3
}

fn default_console_capacity() -> usize {
    50
}

impl Default for LessonConfig {
    fn default() -> Self {
        Self {
            initial_drinkers: default_initial_drinkers(),
            guest_count: default_guest_count(),
            strict_mode: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            console_capacity: default_console_capacity(),
        }
    }
}
