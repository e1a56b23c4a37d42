//! Engine modules: the planning side of the simulation.
//!
//! The router turns row swaps into unit steps ahead of time; the queue holds
//! them until the player replays them.

pub mod queue;
pub mod router;

pub use queue::MoveQueue;
pub use router::{plan_scramble, route_box, MovePlan, Router};
