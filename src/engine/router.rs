//! Dock-transit router
//!
//! Turns row moves and row swaps into an ordered queue of unit steps. Every
//! box travels the same shape of path:
//!
//! | Leg | Direction | Steps |
//! |-----|-----------|-------|
//! | 1   | left      | `column` (to the conveyor lane) |
//! | 2   | up        | `row` (to the dock at `(0, 0)`) |
//! | 3   | down      | `target row` |
//! | 4   | right     | `target column` |
//!
//! A row move places the box from column `i` at column `n + 1 - i` of the
//! target row, so each moved row arrives mirrored.
//!
//! # Design
//!
//! - **Pure logic**: planning never touches the live registry; it works on
//!   a snapshot of positions and updates the snapshot as boxes are routed
//! - **Whole paths**: a box's full path is queued before the next box's
//! - **Validated**: rows outside `1..=n` are rejected before any step is queued

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, info};

use crate::config::RowSwap;
use crate::engine::queue::MoveQueue;
use crate::error::{DockGridError, Result};
use crate::registry::BoxRegistry;
use crate::types::{BoxId, Direction, MoveStep, Position};

// ============================================================================
// Single-box routing
// ============================================================================

/// Unit steps taking a box from `from` to `to` through the dock.
///
/// Emits `from.column` left steps, `from.row` up steps, `to.row` down steps
/// and `to.column` right steps, in that order.
pub fn route_box(id: BoxId, from: Position, to: Position) -> Vec<MoveStep> {
    let legs = [
        (Direction::Left, from.column),
        (Direction::Up, from.row),
        (Direction::Down, to.row),
        (Direction::Right, to.column),
    ];

    legs.iter()
        .flat_map(|&(dir, count)| {
            std::iter::repeat_n(MoveStep::new(id, dir), usize::try_from(count).unwrap_or(0))
        })
        .collect()
}

// ============================================================================
// Plan
// ============================================================================

/// A fully computed move plan, ready for the player.
#[derive(Debug, Clone)]
pub struct MovePlan {
    /// Ordered unit steps for every relocated box
    pub queue: MoveQueue,
    /// The swaps that generated the queue
    pub swaps: Vec<RowSwap>,
    pub grid_size: u16,
    /// Unit steps queued per box
    pub steps_per_box: BTreeMap<BoxId, usize>,
    /// Where each box ends up once the queue has been played
    pub final_positions: BTreeMap<BoxId, Position>,
}

impl MovePlan {
    pub fn total_steps(&self) -> usize {
        self.queue.len()
    }

    /// Distinct boxes that move at least once.
    pub fn boxes_moved(&self) -> usize {
        self.steps_per_box.len()
    }

    /// Returns a summary of the plan for logging/display.
    pub fn summary(&self, registry: &BoxRegistry) -> String {
        let mut lines = vec![
            format!("Move Plan: {}x{} grid", self.grid_size, self.grid_size),
            format!(
                "  Swaps: {}",
                self.swaps
                    .iter()
                    .map(|s| format!("{}<->{}", s.a, s.b))
                    .collect::<Vec<_>>()
                    .join(" ")
            ),
            format!("  Boxes moved: {}", self.boxes_moved()),
            format!("  Unit steps: {}", self.total_steps()),
        ];
        for (id, count) in &self.steps_per_box {
            let label = registry.get(*id).map(|b| b.label.as_str()).unwrap_or("?");
            let dest = self
                .final_positions
                .get(id)
                .map(ToString::to_string)
                .unwrap_or_default();
            lines.push(format!("    {} {:<10} {:>3} steps -> {}", id, label, count, dest));
        }
        lines.join("\n")
    }
}

impl fmt::Display for MovePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} steps for {} boxes over {} swaps",
            self.total_steps(),
            self.boxes_moved(),
            self.swaps.len()
        )
    }
}

// ============================================================================
// Router
// ============================================================================

/// Plans row moves against a snapshot of box positions.
#[derive(Debug, Clone)]
pub struct Router {
    positions: BTreeMap<BoxId, Position>,
    grid_size: u16,
    queue: MoveQueue,
    steps_per_box: BTreeMap<BoxId, usize>,
    swaps: Vec<RowSwap>,
}

impl Router {
    /// Snapshot the registry's current positions.
    pub fn new(registry: &BoxRegistry) -> Self {
        Self {
            positions: registry.iter().map(|b| (b.id, b.position())).collect(),
            grid_size: registry.grid_size(),
            queue: MoveQueue::new(),
            steps_per_box: BTreeMap::new(),
            swaps: Vec::new(),
        }
    }

    /// Where the snapshot currently places `id`.
    pub fn position(&self, id: BoxId) -> Option<Position> {
        self.positions.get(&id).copied()
    }

    /// Move every box of `source` into `target`, mirrored. Returns the number
    /// of steps queued.
    pub fn plan_row_move(&mut self, source: u16, target: u16) -> Result<usize> {
        self.check_row(source)?;
        self.check_row(target)?;

        let members = self.row_members(source);
        let queued = self.route_members(&members, target);
        debug!(source, target, boxes = members.len(), steps = queued, "row move planned");
        Ok(queued)
    }

    /// Exchange the boxes of rows `a` and `b`, each arriving mirrored.
    ///
    /// Row membership is read before either row moves. Swapping a row with
    /// itself mirrors it in place.
    pub fn plan_row_swap(&mut self, a: u16, b: u16) -> Result<usize> {
        self.check_row(a)?;
        self.check_row(b)?;

        let queued = if a == b {
            self.plan_row_move(a, a)?
        } else {
            let row_a = self.row_members(a);
            let row_b = self.row_members(b);
            self.route_members(&row_a, b) + self.route_members(&row_b, a)
        };

        self.swaps.push(RowSwap::new(a, b));
        debug!(a, b, steps = queued, "row swap planned");
        Ok(queued)
    }

    /// Finish planning and hand over the queue.
    pub fn finish(self) -> MovePlan {
        MovePlan {
            queue: self.queue,
            swaps: self.swaps,
            grid_size: self.grid_size,
            final_positions: self
                .positions
                .into_iter()
                .filter(|(id, _)| self.steps_per_box.contains_key(id))
                .collect(),
            steps_per_box: self.steps_per_box,
        }
    }

    fn check_row(&self, row: u16) -> Result<()> {
        if row == 0 || row > self.grid_size {
            return Err(DockGridError::route(format!(
                "row {} is outside 1..={}",
                row, self.grid_size
            )));
        }
        Ok(())
    }

    /// Boxes of `row` in the snapshot, ordered by column.
    fn row_members(&self, row: u16) -> Vec<(i32, BoxId)> {
        let row = i32::from(row);
        let mut members: Vec<(i32, BoxId)> = self
            .positions
            .iter()
            .filter(|(_, pos)| pos.row == row)
            .map(|(id, pos)| (pos.column, *id))
            .collect();
        members.sort();
        members
    }

    fn route_members(&mut self, members: &[(i32, BoxId)], target: u16) -> usize {
        let mirror = i32::from(self.grid_size) + 1;
        let mut queued = 0;

        for &(column, id) in members {
            let Some(from) = self.position(id) else {
                continue;
            };
            let to = Position::new(i32::from(target), mirror - column);
            let steps = route_box(id, from, to);

            queued += steps.len();
            *self.steps_per_box.entry(id).or_default() += steps.len();
            self.queue.extend(steps);
            self.positions.insert(id, to);
        }

        queued
    }
}

/// Plan the configured row swaps, in order, against the registry's positions.
pub fn plan_scramble(registry: &BoxRegistry, swaps: &[RowSwap]) -> Result<MovePlan> {
    let mut router = Router::new(registry);
    for swap in swaps {
        router.plan_row_swap(swap.a, swap.b)?;
    }

    let plan = router.finish();
    info!("Move plan ready: {}", plan);
    Ok(plan)
}

// ============================================================================
// Tests
// ============================================================================
