//! Grid rendering
//!
//! Draws the registry as a block of colored cells: row 0 and column 0 are
//! the conveyor lane, `(0, 0)` is the dock. When several boxes share a
//! cell the most recently moved one is shown, otherwise the highest id.

use std::collections::HashMap;

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::registry::BoxRegistry;
use crate::theme::{Colors, Styles, Theme, UiConstants};
use crate::types::{BoxId, GridBox, Position};

const BOX_GLYPH: &str = "██";
const DOCK_GLYPH: &str = "▒▒";
const LANE_GLYPH: &str = "··";
const EMPTY_GLYPH: &str = "  ";

/// Build one line per grid row, lane included.
pub fn grid_lines(registry: &BoxRegistry, last_moved: Option<BoxId>) -> Vec<Line<'static>> {
    let mut top: HashMap<Position, &GridBox> = HashMap::new();
    for b in registry.iter() {
        top.insert(b.position(), b);
    }
    // The box that just moved is drawn above anything it overlaps.
    if let Some(b) = last_moved.and_then(|id| registry.get(id)) {
        top.insert(b.position(), b);
    }

    let n = i32::from(registry.grid_size());
    (0..=n)
        .map(|row| {
            let spans: Vec<Span<'static>> = (0..=n)
                .flat_map(|column| {
                    let pos = Position::new(row, column);
                    let cell = match top.get(&pos) {
                        Some(b) => Span::styled(
                            BOX_GLYPH,
                            Theme::box_style(b, Some(b.id) == last_moved),
                        ),
                        None if pos.is_dock() => {
                            Span::styled(DOCK_GLYPH, Style::default().fg(Colors::DOCK))
                        }
                        None if row == 0 || column == 0 => {
                            Span::styled(LANE_GLYPH, Style::default().fg(Colors::LANE))
                        }
                        None => Span::raw(EMPTY_GLYPH),
                    };
                    [cell, Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Render the grid panel
pub fn render_grid(f: &mut Frame, area: Rect, registry: &BoxRegistry, last_moved: Option<BoxId>) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let block = Block::default()
        .title(" Grid ")
        .borders(Borders::ALL)
        .border_style(Styles::border_active());

    let needed = (registry.grid_size() + 1).saturating_mul(UiConstants::CELL_WIDTH) + 2;
    if area.width < needed {
        let hint = Paragraph::new(format!("Widen the terminal to {} columns", needed))
            .style(Styles::text_muted())
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(hint, area);
        return;
    }

    let grid = Paragraph::new(grid_lines(registry, last_moved))
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(grid, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::types::{Direction, MoveStep};

    fn registry() -> BoxRegistry {
        BoxRegistry::populate(&SimulationConfig::default())
    }

    #[test]
    fn test_one_line_per_row_including_lane() {
        let lines = grid_lines(&registry(), None);
        assert_eq!(lines.len(), 11);
        // 11 cells, each glyph followed by a gap.
        assert_eq!(lines[0].spans.len(), 22);
    }

    #[test]
    fn test_lane_and_dock_glyphs() {
        let lines = grid_lines(&registry(), None);
        assert_eq!(lines[0].spans[0].content, DOCK_GLYPH);
        assert_eq!(lines[0].spans[2].content, LANE_GLYPH);
        assert_eq!(lines[3].spans[0].content, LANE_GLYPH);
        assert_eq!(lines[3].spans[2].content, BOX_GLYPH);
    }

    #[test]
    fn test_moved_box_leaves_empty_cell() {
        let mut reg = registry();
        let id = reg.find_by_label("Data-a-a").expect("box").id; // test: populated grid
        reg.apply(&MoveStep::new(id, Direction::Left)).expect("in bounds"); // test: known-good move

        let lines = grid_lines(&reg, Some(id));
        assert_eq!(lines[1].spans[0].content, BOX_GLYPH);
        assert_eq!(lines[1].spans[2].content, EMPTY_GLYPH);
    }
}
