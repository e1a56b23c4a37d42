//! Dock Grid Library
//!
//! Plans dock-transit moves for a grid of boxes and replays them one unit
//! step at a time, in a terminal viewer or as SVG frames.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod player;
pub mod registry;
pub mod render;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use config::{RowSwap, SimulationConfig, SvgLayout};
pub use engine::{plan_scramble, route_box, MovePlan, MoveQueue, Router};
pub use error::{DockGridError, Result};
pub use player::{NoRedraw, Playback, Player, Scene, StepOutcome};
pub use registry::{Applied, BoxRegistry};
pub use types::{BoxColor, BoxId, Delta, Direction, GridBox, MoveStep, Position, DOCK};
