//! User interface rendering module
//!
//! - `grid` - the box grid and conveyor lane
//! - `header` - title, progress gauge, status line and key hints

pub mod grid;
pub mod header;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::AppState;
use crate::components::{HelpOverlay, KeybindingContext};
use crate::player::Player;
use crate::theme::UiConstants;

/// Draws a full frame from the application state and the player.
#[derive(Debug, Default)]
pub struct UiRenderer {
    title: String,
}

impl UiRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Clear and redraw the whole screen
    pub fn render(
        &self,
        f: &mut Frame,
        state: &AppState,
        player: &Player,
        keybinding_ctx: &KeybindingContext,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(UiConstants::TITLE_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(UiConstants::GAUGE_HEIGHT),
                Constraint::Length(UiConstants::STATUS_BAR_HEIGHT),
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
            ])
            .split(f.area());

        header::render_title(f, chunks[0], &self.title);

        let last_moved = player.last_move().map(|(step, _)| step.id);
        grid::render_grid(f, chunks[1], player.registry(), last_moved);

        header::render_progress(f, chunks[2], player);
        header::render_status(f, chunks[3], state, player);
        header::render_nav_bar(f, chunks[4], &keybinding_ctx.get_nav_items(&state.mode));

        if state.help_visible {
            HelpOverlay::new(&state.mode, keybinding_ctx).render(f, f.area());
        }
    }
}
