use std::collections::{HashSet, VecDeque};

use crate::puzzle::Variable;

/// An arc scheduled for revision: `(x, y)` means "revise `x` against `y`".
pub type Arc = (Variable, Variable);

/// FIFO worklist of arcs with set semantics: an arc is queued at most once
/// at a time, but may be re-enqueued after it has been popped.
///
/// The fixed point of AC-3 does not depend on the removal order, so FIFO is
/// chosen purely for reproducible runs.
#[derive(Debug, Default)]
pub struct WorkList {
    queue: VecDeque<Arc>,
    queue_members: HashSet<Arc>,
}

impl WorkList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_back(&mut self, x: Variable, y: Variable) {
        if self.queue_members.insert((x, y)) {
            self.queue.push_back((x, y));
        }
    }

    pub fn pop_front(&mut self) -> Option<Arc> {
        let arc = self.queue.pop_front()?;
        self.queue_members.remove(&arc);
        Some(arc)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
