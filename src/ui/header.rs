//! Title, progress and status panels
//!
//! Everything drawn around the grid: the title bar, the playback gauge,
//! the status line describing the last move, and the key hint bar.

use crate::app::{AppMode, AppState};
use crate::components::keybindings::NavBarItem;
use crate::player::Player;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the title bar
pub fn render_title(f: &mut Frame, area: Rect, title: &str) {
    let title_widget = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .style(Styles::title());
    f.render_widget(title_widget, area);
}

/// Render playback progress
pub fn render_progress(f: &mut Frame, area: Rect, player: &Player) {
    let queue = player.queue();
    let ratio = if queue.total() == 0 {
        1.0
    } else {
        queue.played() as f64 / queue.total() as f64
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Progress ").borders(Borders::ALL))
        .gauge_style(Styles::progress())
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{}/{} steps", queue.played(), queue.total()));
    f.render_widget(gauge, area);
}

/// Describe the most recent move for the status panel.
pub fn last_move_text(player: &Player) -> String {
    match player.last_move() {
        Some((step, applied)) => {
            let label = player
                .registry()
                .get(step.id)
                .map(|b| b.label.as_str())
                .unwrap_or("?");
            let arrow = step.direction().map(|d| d.arrow()).unwrap_or('?');
            let dock = if applied.docked { "  [docked]" } else { "" };
            format!("{} {} {} {} -> {}{}", step.id, label, arrow, applied.from, applied.to, dock)
        }
        None => "No moves yet".to_string(),
    }
}

/// Render the status panel
pub fn render_status(f: &mut Frame, area: Rect, state: &AppState, player: &Player) {
    let mode_style = match state.mode {
        AppMode::Stepping => Styles::text(),
        AppMode::Playing => Styles::warning(),
        AppMode::Finished => Styles::success(),
    };

    let line = Line::from(vec![
        Span::styled(format!("[{}] ", state.mode.label()), mode_style),
        Span::styled(last_move_text(player), Styles::text()),
        Span::styled("  ", Style::default()),
        Span::styled(state.status_message.clone(), Style::default().fg(Colors::FG_MUTED)),
    ]);

    let status = Paragraph::new(line).block(Block::default().title(" Status ").borders(Borders::ALL));
    f.render_widget(status, area);
}

/// Render the key hint bar
pub fn render_nav_bar(f: &mut Frame, area: Rect, items: &[NavBarItem]) {
    let mut spans = Vec::new();
    for item in items {
        spans.push(Span::styled(format!(" {} ", item.key_display), Styles::nav_key()));
        spans.push(Span::styled(format!("{}  ", item.action_label), Styles::nav_hint()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
