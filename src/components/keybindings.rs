//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current
//! application mode. Playback cannot be paused or cancelled, so `Playing`
//! offers no playback keys at all.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Advance one step
    Step,
    /// Play every remaining step on the timer
    PlayAll,
    Help,
    Quit,
}

/// One key, with optional modifiers, bound to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    /// Key as shown in the nav bar and help overlay
    pub display: &'static str,
    pub description: &'static str,
}

impl Keybinding {
    pub const fn plain(key: KeyCode, action: KeyAction, display: &'static str, description: &'static str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display,
            description,
        }
    }

    pub const fn ctrl(key: KeyCode, action: KeyAction, display: &'static str, description: &'static str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::CONTROL,
            action,
            display,
            description,
        }
    }

    fn matches(&self, event: &KeyEvent) -> bool {
        // Shift is implied by the character itself for Char keys.
        let modifiers = event.modifiers.difference(KeyModifiers::SHIFT);
        self.key == event.code && self.modifiers == modifiers
    }
}

const STEP_N: Keybinding = Keybinding::plain(KeyCode::Char('n'), KeyAction::Step, "N", "Advance one step");

const GLOBAL_KEYS: &[Keybinding] = &[
    Keybinding::plain(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
    Keybinding::plain(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
    Keybinding::plain(KeyCode::Esc, KeyAction::Quit, "Esc", "Quit"),
    Keybinding::ctrl(KeyCode::Char('c'), KeyAction::Quit, "Ctrl+C", "Quit"),
];

const STEPPING_KEYS: &[Keybinding] = &[
    STEP_N,
    Keybinding::plain(KeyCode::Char(' '), KeyAction::Step, "Space", "Advance one step"),
    Keybinding::plain(KeyCode::Right, KeyAction::Step, "Right", "Advance one step"),
    Keybinding::plain(KeyCode::Char('p'), KeyAction::PlayAll, "P", "Play all remaining"),
    Keybinding::plain(KeyCode::Enter, KeyAction::PlayAll, "Enter", "Play all remaining"),
];

// Stepping an exhausted queue still reports the end of the sequence.
const FINISHED_KEYS: &[Keybinding] = &[STEP_N];

/// Resolves keys per mode; mode keys take precedence over global ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeybindingContext;

impl KeybindingContext {
    pub fn new() -> Self {
        Self
    }

    /// Keys active in `mode`, mode-specific first.
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&'static Keybinding> {
        let mode_keys: &'static [Keybinding] = match mode {
            AppMode::Stepping => STEPPING_KEYS,
            AppMode::Playing => &[],
            AppMode::Finished => FINISHED_KEYS,
        };
        mode_keys.iter().chain(GLOBAL_KEYS).collect()
    }

    /// Resolve a key press to an action in the given mode
    pub fn action_for(&self, mode: &AppMode, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let priority_actions = match mode {
            AppMode::Stepping => vec![KeyAction::Step, KeyAction::PlayAll, KeyAction::Help, KeyAction::Quit],
            AppMode::Playing => vec![KeyAction::Help, KeyAction::Quit],
            AppMode::Finished => vec![KeyAction::Help, KeyAction::Quit],
        };

        let bindings = self.get_bindings(mode);
        priority_actions
            .into_iter()
            .filter_map(|action| bindings.iter().find(|b| b.action == action))
            .map(|binding| NavBarItem {
                key_display: binding.display.to_string(),
                action_label: binding.description.to_string(),
            })
            .collect()
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let mut sections = Vec::new();

        let playback: Vec<_> = self
            .get_bindings(mode)
            .into_iter()
            .filter(|b| matches!(b.action, KeyAction::Step | KeyAction::PlayAll))
            .map(|b| (b.display.to_string(), b.description.to_string()))
            .collect();

        if !playback.is_empty() {
            sections.push(HelpSection {
                title: "Playback".to_string(),
                items: playback,
            });
        }

        let general: Vec<_> = self
            .get_bindings(mode)
            .into_iter()
            .filter(|b| matches!(b.action, KeyAction::Help | KeyAction::Quit))
            .map(|b| (b.display.to_string(), b.description.to_string()))
            .collect();

        sections.push(HelpSection {
            title: "General".to_string(),
            items: general,
        });

        sections
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_stepping_keys() {
        let ctx = KeybindingContext::new();
        let mode = AppMode::Stepping;
        assert_eq!(ctx.action_for(&mode, &press(KeyCode::Char('n'))), Some(KeyAction::Step));
        assert_eq!(ctx.action_for(&mode, &press(KeyCode::Char(' '))), Some(KeyAction::Step));
        assert_eq!(ctx.action_for(&mode, &press(KeyCode::Char('p'))), Some(KeyAction::PlayAll));
        assert_eq!(ctx.action_for(&mode, &press(KeyCode::Char('q'))), Some(KeyAction::Quit));
    }

    #[test]
    fn test_playing_has_no_playback_keys() {
        let ctx = KeybindingContext::new();
        let mode = AppMode::Playing;
        assert_eq!(ctx.action_for(&mode, &press(KeyCode::Char('n'))), None);
        assert_eq!(ctx.action_for(&mode, &press(KeyCode::Char('p'))), None);
        assert_eq!(ctx.action_for(&mode, &press(KeyCode::Char('?'))), Some(KeyAction::Help));
    }

    #[test]
    fn test_ctrl_c_quits_but_plain_c_does_not() {
        let ctx = KeybindingContext::new();
        let mode = AppMode::Stepping;
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(ctx.action_for(&mode, &ctrl_c), Some(KeyAction::Quit));
        assert_eq!(ctx.action_for(&mode, &press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_shifted_question_mark_opens_help() {
        let ctx = KeybindingContext::new();
        let shifted = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(ctx.action_for(&AppMode::Stepping, &shifted), Some(KeyAction::Help));
    }

    #[test]
    fn test_nav_items_follow_mode() {
        let ctx = KeybindingContext::new();
        let stepping = ctx.get_nav_items(&AppMode::Stepping);
        assert_eq!(stepping.len(), 4);
        assert_eq!(stepping[0].key_display, "N");

        let playing = ctx.get_nav_items(&AppMode::Playing);
        assert!(playing.iter().all(|i| i.action_label != "Play all remaining"));
    }

    #[test]
    fn test_help_content_sections() {
        let ctx = KeybindingContext::new();
        let sections = ctx.get_help_content(&AppMode::Stepping);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Playback");

        let sections = ctx.get_help_content(&AppMode::Playing);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "General");
    }
}
