//! Application state definitions
//!
//! Contains the state the terminal viewer keeps besides the player itself:
//! the current mode, the status line and overlay visibility.

/// Main application state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Status message for user feedback
    pub status_message: String,
    /// Whether help overlay is visible
    pub help_visible: bool,
}

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Waiting for the user to advance one step or start playback
    Stepping,
    /// Animated playback running on the timer
    Playing,
    /// Every queued step has been played
    Finished,
}

impl AppMode {
    /// Short label for the status panel
    pub fn label(&self) -> &'static str {
        match self {
            Self::Stepping => "Manual",
            Self::Playing => "Playing",
            Self::Finished => "Finished",
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Stepping,
            status_message: "Press n to advance one step, p to play all".to_string(),
            help_visible: false,
        }
    }
}

impl AppState {
    /// Initial state for a queue of `remaining` steps.
    pub fn for_queue(remaining: usize) -> Self {
        if remaining == 0 {
            Self {
                mode: AppMode::Finished,
                status_message: "Nothing to play: the move queue is empty".to_string(),
                help_visible: false,
            }
        } else {
            Self::default()
        }
    }
}
