use std::collections::VecDeque;

use crate::containers::KeyedVec;
use crate::engine::ConstraintId;

/// A first-in first-out worklist of constraints.
///
/// By default a constraint can be in the queue several times. With deduplication enabled, a
/// constraint which is already waiting is not enqueued again.
#[derive(Debug, Clone, Default)]
pub(crate) struct ConstraintQueue {
    queue: VecDeque<ConstraintId>,
    deduplicate: bool,
    is_enqueued: KeyedVec<ConstraintId, bool>,
}

impl ConstraintQueue {
    pub(crate) fn new(deduplicate: bool) -> ConstraintQueue {
        ConstraintQueue {
            queue: VecDeque::new(),
            deduplicate,
            is_enqueued: KeyedVec::default(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }

    pub(crate) fn enqueue(&mut self, constraint: ConstraintId) {
        if self.deduplicate {
            if self.is_constraint_enqueued(constraint) {
                return;
            }

            self.is_enqueued.accomodate(constraint, false);
            self.is_enqueued[constraint] = true;
        }

        self.queue.push_back(constraint);
    }

    pub(crate) fn pop(&mut self) -> Option<ConstraintId> {
        let constraint = self.queue.pop_front()?;

        if self.deduplicate {
            self.is_enqueued[constraint] = false;
        }

        Some(constraint)
    }

    fn is_constraint_enqueued(&self, constraint: ConstraintId) -> bool {
        self.is_enqueued
            .get(constraint)
            .copied()
            .unwrap_or_default()
    }
}
