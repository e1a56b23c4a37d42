//! Box registry: every box on the grid, keyed by id.
//!
//! The registry is the only mutable simulation state. It is populated once
//! and then only changed by the player, one unit step at a time.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::config::SimulationConfig;
use crate::error::{DockGridError, Result};
use crate::types::{BoxColor, BoxId, GridBox, MoveStep, Position};

/// Letters used to build box labels; row and column `n` map to the `n`-th letter.
const LABEL_LETTERS: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// What applying one step did to its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    pub from: Position,
    pub to: Position,
    /// The box arrived at the dock on this step and was recolored
    pub docked: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxRegistry {
    boxes: BTreeMap<BoxId, GridBox>,
    grid_size: u16,
}

impl BoxRegistry {
    /// An empty registry for a `grid_size` x `grid_size` grid.
    pub fn new(grid_size: u16) -> Self {
        Self {
            boxes: BTreeMap::new(),
            grid_size,
        }
    }

    /// Populate the grid the way the page does on load: one box per cell,
    /// age `2 * column`, heat color, and the configured label marked.
    pub fn populate(config: &SimulationConfig) -> Self {
        let n = config.grid_size;
        let mut registry = Self::new(n);

        for row in 1..=n {
            for column in 1..=n {
                let id = BoxId(u32::from(row - 1) * u32::from(n) + u32::from(column - 1));
                let label = format!("Data-{}-{}", letter(row), letter(column));
                let color = if config.marked_label.as_deref() == Some(label.as_str()) {
                    BoxColor::Marked
                } else {
                    BoxColor::Heat
                };
                registry.insert(GridBox {
                    id,
                    label,
                    row: i32::from(row),
                    column: i32::from(column),
                    age: 2 * u32::from(column),
                    color,
                });
            }
        }

        if let Some(label) = &config.marked_label {
            if registry.find_by_label(label).is_none() {
                warn!("Marked label {} is not on a {}x{} grid; no box is marked", label, n, n);
            }
        }

        debug!(boxes = registry.len(), grid_size = n, "registry populated");
        registry
    }

    pub fn insert(&mut self, b: GridBox) {
        self.boxes.insert(b.id, b);
    }

    pub fn grid_size(&self) -> u16 {
        self.grid_size
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn get(&self, id: BoxId) -> Option<&GridBox> {
        self.boxes.get(&id)
    }

    /// Boxes in id order.
    pub fn iter(&self) -> impl Iterator<Item = &GridBox> {
        self.boxes.values()
    }

    /// The first box whose label matches.
    pub fn find_by_label(&self, label: &str) -> Option<&GridBox> {
        self.boxes.values().find(|b| b.label == label)
    }

    /// Boxes currently sitting at `pos`. Several boxes can share a cell
    /// while they travel along the conveyor lane.
    pub fn at(&self, pos: Position) -> impl Iterator<Item = &GridBox> {
        self.boxes.values().filter(move |b| b.position() == pos)
    }

    /// Ids of the boxes in `row`, ordered by column.
    pub fn row_members(&self, row: i32) -> Vec<(i32, BoxId)> {
        let mut members: Vec<(i32, BoxId)> = self
            .boxes
            .values()
            .filter(|b| b.row == row)
            .map(|b| (b.column, b.id))
            .collect();
        members.sort();
        members
    }

    /// Move one box by one step.
    ///
    /// The box is recolored when it lands exactly on the dock; a box that is
    /// already docked keeps its color, so arrival is reported once.
    pub fn apply(&mut self, step: &MoveStep) -> Result<Applied> {
        let grid_size = self.grid_size;
        let b = self
            .boxes
            .get_mut(&step.id)
            .ok_or_else(|| DockGridError::unknown_box(format!("{} is not in the registry", step.id)))?;

        let from = b.position();
        let to = from.offset(step.delta);
        if !to.within(grid_size) {
            return Err(DockGridError::out_of_bounds(format!(
                "{} ({}) would move from {} to {}",
                step.id, b.label, from, to
            )));
        }

        b.row = to.row;
        b.column = to.column;

        let docked = to.is_dock() && b.color != BoxColor::Docked;
        if docked {
            b.color = BoxColor::Docked;
        }

        Ok(Applied { from, to, docked })
    }
}

fn letter(n: u16) -> char {
    LABEL_LETTERS
        .get(usize::from(n.saturating_sub(1)))
        .map(|&c| c as char)
        .unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, DOCK};

    fn registry() -> BoxRegistry {
        BoxRegistry::populate(&SimulationConfig::default())
    }

    #[test]
    fn test_populate_fills_every_cell() {
        let reg = registry();
        assert_eq!(reg.len(), 100);
        for row in 1..=10 {
            for column in 1..=10 {
                assert_eq!(reg.at(Position::new(row, column)).count(), 1);
            }
        }
    }

    #[test]
    fn test_populate_labels_and_ages() {
        let reg = registry();
        let first = reg.find_by_label("Data-a-a").expect("first box"); // test: populated grid
        assert_eq!(first.position(), Position::new(1, 1));
        assert_eq!(first.age, 2);

        let last = reg.find_by_label("Data-j-j").expect("last box"); // test: populated grid
        assert_eq!(last.position(), Position::new(10, 10));
        assert_eq!(last.age, 20);
    }

    #[test]
    fn test_populate_marks_configured_label() {
        let reg = registry();
        let marked: Vec<_> = reg.iter().filter(|b| b.color == BoxColor::Marked).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].label, "Data-f-e");
        assert_eq!(marked[0].position(), Position::new(6, 5));
    }

    #[test]
    fn test_populate_without_marker() {
        let config = SimulationConfig {
            marked_label: None,
            ..SimulationConfig::default()
        };
        let reg = BoxRegistry::populate(&config);
        assert!(reg.iter().all(|b| b.color == BoxColor::Heat));
    }

    #[test]
    fn test_populate_large_grid_ids_do_not_overflow() {
        let config = SimulationConfig {
            grid_size: 300,
            swaps: Vec::new(),
            marked_label: None,
            ..SimulationConfig::default()
        };
        let reg = BoxRegistry::populate(&config);
        // Ids are keys, so a collision would shrink the registry.
        assert_eq!(reg.len(), 300 * 300);
        let last = reg.at(Position::new(300, 300)).next().expect("corner box"); // test: populated grid
        assert_eq!(last.id, BoxId(300 * 300 - 1));
    }

    #[test]
    fn test_row_members_sorted_by_column() {
        let reg = registry();
        let members = reg.row_members(3);
        assert_eq!(members.len(), 10);
        assert!(members.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_apply_moves_box() {
        let mut reg = registry();
        let id = reg.find_by_label("Data-b-c").expect("box").id; // test: populated grid
        let applied = reg
            .apply(&MoveStep::new(id, Direction::Left))
            .expect("in bounds"); // test: known-good move
        assert_eq!(applied.from, Position::new(2, 3));
        assert_eq!(applied.to, Position::new(2, 2));
        assert!(!applied.docked);
    }

    #[test]
    fn test_apply_recolors_on_dock_arrival_only_once() {
        let mut reg = registry();
        let id = reg.find_by_label("Data-a-a").expect("box").id; // test: populated grid

        let left = reg.apply(&MoveStep::new(id, Direction::Left)).expect("in bounds"); // test: known-good move
        assert!(!left.docked);
        assert_eq!(reg.get(id).map(|b| b.color), Some(BoxColor::Heat));

        let up = reg.apply(&MoveStep::new(id, Direction::Up)).expect("in bounds"); // test: known-good move
        assert!(up.docked);
        assert_eq!(up.to, DOCK);
        assert_eq!(reg.get(id).map(|b| b.color), Some(BoxColor::Docked));

        reg.apply(&MoveStep::new(id, Direction::Down)).expect("in bounds"); // test: known-good move
        let again = reg.apply(&MoveStep::new(id, Direction::Up)).expect("in bounds"); // test: known-good move
        assert!(!again.docked);
    }

    #[test]
    fn test_apply_rejects_unknown_box() {
        let mut reg = registry();
        let err = reg.apply(&MoveStep::new(BoxId(999), Direction::Up));
        assert!(matches!(err, Err(DockGridError::UnknownBox(_))));
    }

    #[test]
    fn test_apply_rejects_leaving_grid() {
        let mut reg = registry();
        let id = reg.find_by_label("Data-j-j").expect("box").id; // test: populated grid
        let err = reg.apply(&MoveStep::new(id, Direction::Right));
        assert!(matches!(err, Err(DockGridError::OutOfBounds(_))));
        assert_eq!(reg.get(id).map(|b| b.position()), Some(Position::new(10, 10)));
    }
}
