//! Core value types shared by the router, the player and the renderers.
//!
//! Coordinates are signed so a `Delta` can be added directly; the grid
//! occupies rows and columns `1..=n`, and row 0 / column 0 form the
//! conveyor lane that leads to the dock at `(0, 0)`.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

/// The dock cell every relocated box passes through.
pub const DOCK: Position = Position { row: 0, column: 0 };

/// Age divisor used to turn a box's age into the opacity of its heat color.
pub const HEAT_SCALE: f32 = 20.0;

/// Identifier of a box, unique within a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BoxId(pub u32);

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Apply a displacement, returning the new cell.
    pub fn offset(self, delta: Delta) -> Self {
        Self {
            row: self.row + delta.y,
            column: self.column + delta.x,
        }
    }

    /// Whether this cell lies on the grid or its conveyor lane (`0..=size` on both axes).
    pub fn within(self, size: u16) -> bool {
        let size = i32::from(size);
        (0..=size).contains(&self.row) && (0..=size).contains(&self.column)
    }

    pub fn is_dock(self) -> bool {
        self == DOCK
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// A displacement: `x` moves across columns, `y` moves across rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Delta {
    pub x: i32,
    pub y: i32,
}

impl Delta {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The four unit moves a box can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Left,
    Up,
    Down,
    Right,
}

impl Direction {
    /// Unit displacement for this direction.
    pub const fn delta(self) -> Delta {
        match self {
            Self::Left => Delta::new(-1, 0),
            Self::Up => Delta::new(0, -1),
            Self::Down => Delta::new(0, 1),
            Self::Right => Delta::new(1, 0),
        }
    }

    /// Arrow glyph used in the terminal status line.
    pub const fn arrow(self) -> char {
        match self {
            Self::Left => '←',
            Self::Up => '↑',
            Self::Down => '↓',
            Self::Right => '→',
        }
    }

    /// Recover the direction of a unit delta.
    pub fn from_delta(delta: Delta) -> Option<Self> {
        match (delta.x, delta.y) {
            (-1, 0) => Some(Self::Left),
            (0, -1) => Some(Self::Up),
            (0, 1) => Some(Self::Down),
            (1, 0) => Some(Self::Right),
            _ => None,
        }
    }
}

/// One atomic unit move of one box. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveStep {
    pub id: BoxId,
    pub delta: Delta,
}

impl MoveStep {
    pub fn new(id: BoxId, direction: Direction) -> Self {
        Self {
            id,
            delta: direction.delta(),
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        Direction::from_delta(self.delta)
    }
}

impl fmt::Display for MoveStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction() {
            Some(dir) => write!(f, "{} {}", self.id, dir),
            None => write!(f, "{} by ({}, {})", self.id, self.delta.x, self.delta.y),
        }
    }
}

/// Fill of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoxColor {
    /// Red, with an opacity derived from the box's age
    #[default]
    Heat,
    /// The single highlighted box
    Marked,
    /// Box has reached the dock
    Docked,
}

/// A box on the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridBox {
    pub id: BoxId,
    pub label: String,
    pub row: i32,
    pub column: i32,
    pub age: u32,
    pub color: BoxColor,
}

impl GridBox {
    pub fn position(&self) -> Position {
        Position::new(self.row, self.column)
    }

    /// Opacity of the heat color, `age / 20`, clamped to `0.0..=1.0`.
    pub fn heat_alpha(&self) -> f32 {
        (self.age as f32 / HEAT_SCALE).clamp(0.0, 1.0)
    }
}
