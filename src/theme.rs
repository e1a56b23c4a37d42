//! Centralized theme and styling for the terminal viewer
//!
//! Single source of truth for the colors and styles used to draw the grid,
//! the conveyor lane and the status panels.
//!
//! # Usage
//! ```rust
//! use dockgrid::theme::{Colors, Styles, Theme};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! ```

use ratatui::style::{Color, Modifier, Style};

use crate::types::{BoxColor, GridBox};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Panel background; heat colors are blended onto it
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Gauge/progress bar background
    pub const BG_GAUGE: Color = Color::Rgb(40, 40, 50);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Primary accent color - borders, titles
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - emphasis
    pub const SECONDARY: Color = Color::Yellow;

    /// Success/positive feedback
    pub const SUCCESS: Color = Color::Green;

    /// Warning/caution feedback
    pub const WARNING: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Grid Colors
    // -------------------------------------------------------------------------

    /// Marked box
    pub const MARKED: Color = Color::Blue;

    /// Box that reached the dock
    pub const DOCKED: Color = Color::Green;

    /// Empty cell of the conveyor lane
    pub const LANE: Color = Color::Rgb(60, 60, 70);

    /// The dock cell itself
    pub const DOCK: Color = Color::Rgb(90, 90, 40);

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;

    /// Progress bar fill
    pub const PROGRESS: Color = Color::Green;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Active border style
    pub fn border_active() -> Style {
        Style::default().fg(Colors::PRIMARY)
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Colors::WARNING)
    }

    /// Progress bar style
    pub fn progress() -> Style {
        Style::default().fg(Colors::PROGRESS).bg(Colors::BG_GAUGE)
    }

    /// Navigation key hint
    pub fn nav_key() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Navigation description
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// SEMANTIC STYLING
// =============================================================================

pub struct Theme;

impl Theme {
    /// Terminal color for a box.
    ///
    /// Heat boxes are red at `age / 20` opacity, blended onto the panel
    /// background since terminals have no alpha channel.
    pub fn box_color(b: &GridBox) -> Color {
        match b.color {
            BoxColor::Heat => blend((255, 0, 0), (20, 20, 30), b.heat_alpha()),
            BoxColor::Marked => Colors::MARKED,
            BoxColor::Docked => Colors::DOCKED,
        }
    }

    /// Style for the cell of a box; the last moved box is emphasised.
    pub fn box_style(b: &GridBox, last_moved: bool) -> Style {
        let style = Style::default().fg(Self::box_color(b));
        if last_moved {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

fn blend(fg: (u8, u8, u8), bg: (u8, u8, u8), alpha: f32) -> Color {
    let mix = |f: u8, b: u8| -> u8 {
        (f32::from(f) * alpha + f32::from(b) * (1.0 - alpha)).round() as u8
    };
    Color::Rgb(mix(fg.0, bg.0), mix(fg.1, bg.1), mix(fg.2, bg.2))
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Terminal columns used per grid cell (glyph pair plus gap)
    pub const CELL_WIDTH: u16 = 3;

    /// Nav bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Title bar height
    pub const TITLE_HEIGHT: u16 = 3;

    /// Status bar height
    pub const STATUS_BAR_HEIGHT: u16 = 3;

    /// Progress gauge height
    pub const GAUGE_HEIGHT: u16 = 3;
}
