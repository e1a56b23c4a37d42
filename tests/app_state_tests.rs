//! Tests for Application State Management
//!
//! These tests verify:
//! - AppState default initialization
//! - AppMode labels
//! - Initial state derived from the queue length

use dockgrid::app::{AppMode, AppState};

// =============================================================================
// AppState Default Tests
// =============================================================================

#[test]
fn test_app_state_default_mode_is_stepping() {
    let state = AppState::default();
    assert_eq!(state.mode, AppMode::Stepping);
}

#[test]
fn test_app_state_default_explains_keys() {
    let state = AppState::default();
    assert!(state.status_message.contains("n"));
    assert!(state.status_message.contains("p"));
}

#[test]
fn test_app_state_default_help_not_visible() {
    let state = AppState::default();
    assert!(!state.help_visible);
}

// =============================================================================
// AppMode Tests
// =============================================================================

#[test]
fn test_app_mode_labels_are_distinct() {
    let labels = [
        AppMode::Stepping.label(),
        AppMode::Playing.label(),
        AppMode::Finished.label(),
    ];
    assert_eq!(labels, ["Manual", "Playing", "Finished"]);
}

#[test]
fn test_app_mode_is_copy_and_hashable() {
    use std::collections::HashSet;

    let mode = AppMode::Playing;
    let copy = mode;
    let set: HashSet<AppMode> = [mode, copy, AppMode::Finished].into_iter().collect();
    assert_eq!(set.len(), 2);
}

// =============================================================================
// Queue-derived State Tests
// =============================================================================

#[test]
fn test_for_queue_with_steps_is_default() {
    assert_eq!(AppState::for_queue(440), AppState::default());
}

#[test]
fn test_for_queue_empty_starts_finished() {
    let state = AppState::for_queue(0);
    assert_eq!(state.mode, AppMode::Finished);
    assert!(state.status_message.contains("empty"));
    assert!(!state.help_visible);
}

#[test]
fn test_state_fields_are_independent() {
    let mut state = AppState::default();
    state.help_visible = true;
    state.status_message = "custom".to_string();
    assert_eq!(state.mode, AppMode::Stepping);

    state.mode = AppMode::Playing;
    assert!(state.help_visible);
    assert_eq!(state.status_message, "custom");
}
