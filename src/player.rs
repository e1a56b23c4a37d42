//! Player: replays a move queue against the registry.
//!
//! Each step pops the front of the queue, moves one box by one cell, and
//! asks the scene for a full redraw. An empty queue is the normal end of a
//! replay and is reported as `StepOutcome::Exhausted`, never as an error.

use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::engine::{MovePlan, MoveQueue};
use crate::error::Result;
use crate::registry::{Applied, BoxRegistry};
use crate::types::MoveStep;

/// Something that can draw the whole registry from scratch.
pub trait Scene {
    /// Clear and redraw everything.
    fn redraw(&mut self, registry: &BoxRegistry) -> Result<()>;
}

/// A scene that draws nothing; for callers that render on their own schedule.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRedraw;

impl Scene for NoRedraw {
    fn redraw(&mut self, _registry: &BoxRegistry) -> Result<()> {
        Ok(())
    }
}

/// Result of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// One box moved one cell
    Moved { step: MoveStep, applied: Applied },
    /// The queue was empty; nothing changed
    Exhausted,
}

impl StepOutcome {
    /// Whether a step was taken.
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Owns the registry and the queue being replayed into it.
#[derive(Debug, Clone)]
pub struct Player {
    registry: BoxRegistry,
    queue: MoveQueue,
    last: Option<(MoveStep, Applied)>,
}

impl Player {
    pub fn new(registry: BoxRegistry, queue: MoveQueue) -> Self {
        Self {
            registry,
            queue,
            last: None,
        }
    }

    pub fn from_plan(registry: BoxRegistry, plan: MovePlan) -> Self {
        Self::new(registry, plan.queue)
    }

    pub fn registry(&self) -> &BoxRegistry {
        &self.registry
    }

    pub fn queue(&self) -> &MoveQueue {
        &self.queue
    }

    /// The most recently applied step, if any.
    pub fn last_move(&self) -> Option<&(MoveStep, Applied)> {
        self.last.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.queue.is_empty()
    }

    /// Pop and apply one step, then redraw.
    ///
    /// On an empty queue nothing is mutated and nothing is redrawn. A step
    /// the registry rejects is consumed and its error returned.
    pub fn step(&mut self, scene: &mut impl Scene) -> Result<StepOutcome> {
        let Some(step) = self.queue.pop() else {
            debug!("move queue exhausted");
            return Ok(StepOutcome::Exhausted);
        };

        let applied = self.registry.apply(&step)?;
        debug!(%step, from = %applied.from, to = %applied.to, "step applied");
        if applied.docked {
            if let Some(b) = self.registry.get(step.id) {
                info!("{} ({}) reached the dock", b.id, b.label);
            }
        }

        self.last = Some((step, applied));
        scene.redraw(&self.registry)?;
        Ok(StepOutcome::Moved { step, applied })
    }

    /// Step on a fixed interval until the queue runs out. Returns the number
    /// of steps played.
    pub fn play_all(&mut self, interval: Duration, scene: &mut impl Scene) -> Result<usize> {
        info!(
            remaining = self.queue.len(),
            interval_ms = interval.as_millis() as u64,
            "playback started"
        );

        let mut played = 0;
        while self.step(scene)?.is_moved() {
            played += 1;
            if !self.queue.is_empty() && !interval.is_zero() {
                thread::sleep(interval);
            }
        }

        info!(played, "playback finished");
        Ok(played)
    }
}

/// Timer state for animated playback driven by an external event loop.
///
/// Once started it fires a step whenever the interval has elapsed, and
/// stops by itself when the queue is exhausted.
#[derive(Debug, Clone)]
pub struct Playback {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Playback {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Begin playback; the first step is due immediately.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now);
        }
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Time left before the next step, zero if one is due. `None` when idle.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    /// Take a step if one is due. Returns the outcome when a step was attempted.
    pub fn tick(
        &mut self,
        now: Instant,
        player: &mut Player,
        scene: &mut impl Scene,
    ) -> Result<Option<StepOutcome>> {
        match self.next_due {
            Some(due) if now >= due => {}
            _ => return Ok(None),
        }

        let outcome = match player.step(scene) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.next_due = None;
                return Err(e);
            }
        };
        if outcome.is_moved() && !player.is_finished() {
            self.next_due = Some(now + self.interval);
        } else {
            self.next_due = None;
            info!("animated playback finished");
        }
        Ok(Some(outcome))
    }
}
