//! Application module
//!
//! Contains the terminal viewer: state management, key handling and the
//! event loop that drives animated playback.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppMode, AppState};

use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::error::Result;
use crate::player::{Playback, Player, Scene, StepOutcome};
use crate::registry::BoxRegistry;
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Longest the loop blocks waiting for input when no step is due
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Scene that asks the event loop for a redraw on the next iteration.
#[derive(Debug, Default)]
struct RedrawRequest {
    pending: bool,
}

impl Scene for RedrawRequest {
    fn redraw(&mut self, _registry: &BoxRegistry) -> Result<()> {
        self.pending = true;
        Ok(())
    }
}

/// Main application struct
pub struct App {
    state: AppState,
    player: Player,
    playback: Playback,
    ui_renderer: UiRenderer,
    keybinding_context: KeybindingContext,
    redraw: RedrawRequest,
}

impl App {
    /// Create a new application instance
    pub fn new(player: Player, step_interval: Duration) -> Self {
        info!(steps = player.queue().len(), "Creating new App instance");
        Self {
            state: AppState::for_queue(player.queue().len()),
            player,
            playback: Playback::new(step_interval),
            ui_renderer: UiRenderer::new("Dock Grid"),
            keybinding_context: KeybindingContext::new(),
            redraw: RedrawRequest { pending: true },
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_running()
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
        self.redraw.pending = true;
    }

    /// Advance one step on demand.
    pub fn step_once(&mut self) -> Result<StepOutcome> {
        let outcome = self.player.step(&mut self.redraw)?;
        self.after_step(outcome);
        Ok(outcome)
    }

    /// Start animated playback of every remaining step.
    pub fn play_all(&mut self, now: Instant) {
        if self.player.is_finished() {
            self.state.mode = AppMode::Finished;
            self.state.status_message = "End of sequence: no steps remaining".to_string();
        } else {
            info!(remaining = self.player.queue().len(), "animated playback requested");
            self.playback.start(now);
            self.state.mode = AppMode::Playing;
            self.state.status_message = format!(
                "Playing every {} ms",
                self.playback.interval().as_millis()
            );
        }
        self.redraw.pending = true;
    }

    /// Let the playback timer take a step if one is due.
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        if let Some(outcome) = self.playback.tick(now, &mut self.player, &mut self.redraw)? {
            self.after_step(outcome);
        }
        Ok(())
    }

    fn after_step(&mut self, outcome: StepOutcome) {
        match outcome {
            StepOutcome::Moved { .. } if self.player.is_finished() => {
                self.state.mode = AppMode::Finished;
                self.state.status_message = "All steps played".to_string();
            }
            StepOutcome::Moved { .. } => {}
            StepOutcome::Exhausted => {
                self.state.mode = AppMode::Finished;
                self.state.status_message = "End of sequence: no steps remaining".to_string();
                self.redraw.pending = true;
            }
        }
    }

    /// Handle keyboard input events. Returns `true` when the user asked to quit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent, now: Instant) -> Result<bool> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(false);
        }

        let action = self
            .keybinding_context
            .action_for(&self.state.mode, &key_event);
        debug!(?key_event, ?action, "key event");

        // Ctrl+C always quits; the overlay only consumes ordinary keys
        if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        // Help overlay swallows everything except closing it
        if self.state.help_visible {
            if matches!(action, Some(KeyAction::Help | KeyAction::Quit)) {
                self.toggle_help();
            }
            return Ok(false);
        }

        match action {
            Some(KeyAction::Step) => {
                self.step_once()?;
            }
            Some(KeyAction::PlayAll) => self.play_all(now),
            Some(KeyAction::Help) => self.toggle_help(),
            Some(KeyAction::Quit) => return Ok(true),
            None => {}
        }
        Ok(false)
    }

    /// Run the main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            if std::mem::take(&mut self.redraw.pending) {
                terminal.draw(|f| {
                    self.ui_renderer
                        .render(f, &self.state, &self.player, &self.keybinding_context)
                })?;
            }

            let timeout = self
                .playback
                .time_until_due(Instant::now())
                .map_or(IDLE_POLL, |t| t.min(IDLE_POLL));

            if crossterm::event::poll(timeout)? {
                match crossterm::event::read()? {
                    Event::Key(key_event) => {
                        if self.handle_key_event(key_event, Instant::now())? {
                            break;
                        }
                    }
                    Event::Resize(_, _) => self.redraw.pending = true,
                    _ => {}
                }
            }

            self.tick(Instant::now())?;
        }

        info!(played = self.player.queue().played(), "Leaving application loop");
        Ok(())
    }
}
