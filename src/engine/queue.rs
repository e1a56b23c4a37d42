//! The move queue: a flat, ordered list of unit moves consumed front to back.

use std::collections::VecDeque;

use crate::types::MoveStep;

/// Ordered sequence of `MoveStep`s. Popping is destructive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveQueue {
    steps: VecDeque<MoveStep>,
    /// Steps ever pushed, so progress survives popping
    total: usize,
}

impl MoveQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: MoveStep) {
        self.steps.push_back(step);
        self.total += 1;
    }

    /// Remove and return the front step, or `None` once exhausted.
    pub fn pop(&mut self) -> Option<MoveStep> {
        self.steps.pop_front()
    }

    pub fn peek(&self) -> Option<&MoveStep> {
        self.steps.front()
    }

    /// Steps still waiting to be played.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps ever queued, played or not.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn played(&self) -> usize {
        self.total - self.steps.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveStep> {
        self.steps.iter()
    }
}

impl Extend<MoveStep> for MoveQueue {
    fn extend<I: IntoIterator<Item = MoveStep>>(&mut self, iter: I) {
        for step in iter {
            self.push(step);
        }
    }
}

impl FromIterator<MoveStep> for MoveQueue {
    fn from_iter<I: IntoIterator<Item = MoveStep>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoxId, Direction};

    #[test]
    fn test_fifo_order() {
        let mut queue = MoveQueue::new();
        queue.push(MoveStep::new(BoxId(1), Direction::Left));
        queue.push(MoveStep::new(BoxId(2), Direction::Up));

        assert_eq!(queue.pop().map(|s| s.id), Some(BoxId(1)));
        assert_eq!(queue.pop().map(|s| s.id), Some(BoxId(2)));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_progress_counters() {
        let mut queue: MoveQueue = (0..4)
            .map(|i| MoveStep::new(BoxId(i), Direction::Down))
            .collect();
        assert_eq!(queue.total(), 4);
        assert_eq!(queue.played(), 0);

        queue.pop();
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.played(), 1);
        assert_eq!(queue.total(), 4);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut queue = MoveQueue::new();
        queue.push(MoveStep::new(BoxId(9), Direction::Right));
        assert_eq!(queue.peek().map(|s| s.id), Some(BoxId(9)));
        assert_eq!(queue.len(), 1);
    }
}
