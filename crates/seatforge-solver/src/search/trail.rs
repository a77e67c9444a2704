//! Partial assignment with an undo trail.

use seatforge_model::VarId;

/// Variable values plus the order they were fixed in.
///
/// Variables fixed after a [`mark`](Trail::mark) are released by
/// [`undo_to`](Trail::undo_to). The suffix past `head` is the propagation
/// queue.
#[derive(Debug, Clone)]
pub(crate) struct Trail {
    values: Vec<Option<bool>>,
    assigned: Vec<VarId>,
    head: usize,
}

impl Trail {
    pub(crate) fn new(var_count: usize) -> Self {
        Self {
            values: vec![None; var_count],
            assigned: Vec::with_capacity(var_count),
            head: 0,
        }
    }

    #[inline]
    pub(crate) fn value(&self, var: VarId) -> Option<bool> {
        self.values[var.index()]
    }

    pub(crate) fn assign(&mut self, var: VarId, value: bool) {
        debug_assert!(self.values[var.index()].is_none(), "{var} assigned twice");
        self.values[var.index()] = Some(value);
        self.assigned.push(var);
    }

    pub(crate) fn mark(&self) -> usize {
        self.assigned.len()
    }

    pub(crate) fn undo_to(&mut self, mark: usize) {
        while self.assigned.len() > mark {
            if let Some(var) = self.assigned.pop() {
                self.values[var.index()] = None;
            }
        }
        self.head = self.head.min(mark);
    }

    /// Next assigned variable not yet propagated.
    pub(crate) fn next_pending(&mut self) -> Option<VarId> {
        let var = self.assigned.get(self.head).copied()?;
        self.head += 1;
        Some(var)
    }

    /// Drops the propagation queue after a conflict.
    pub(crate) fn clear_pending(&mut self) {
        self.head = self.assigned.len();
    }

    /// The assignment with unassigned variables read as false.
    pub(crate) fn to_total(&self) -> Vec<bool> {
        self.values.iter().map(|v| v.unwrap_or(false)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatforge_model::VariableSpace;

    #[test]
    fn test_undo_restores_values() {
        let space = VariableSpace::new(1, 3);
        let mut trail = Trail::new(space.len());
        trail.assign(space.var(0, 0), false);
        let mark = trail.mark();
        trail.assign(space.var(0, 1), true);
        trail.assign(space.var(0, 2), false);

        trail.undo_to(mark);
        assert_eq!(trail.value(space.var(0, 0)), Some(false));
        assert_eq!(trail.value(space.var(0, 1)), None);
        assert_eq!(trail.value(space.var(0, 2)), None);
        assert_eq!(trail.to_total(), vec![false, false, false]);
    }

    #[test]
    fn test_pending_queue_follows_assignments() {
        let space = VariableSpace::new(1, 2);
        let mut trail = Trail::new(space.len());
        trail.assign(space.var(0, 1), true);
        assert_eq!(trail.next_pending(), Some(space.var(0, 1)));
        assert_eq!(trail.next_pending(), None);

        trail.undo_to(0);
        trail.assign(space.var(0, 0), true);
        assert_eq!(trail.next_pending(), Some(space.var(0, 0)));
    }
}
