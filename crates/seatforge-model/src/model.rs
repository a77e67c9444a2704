//! The constraint-satisfaction problem instance.

use std::collections::BTreeMap;
use std::fmt;

use seatforge_core::{Passenger, PassengerId, Seat, SeatId};
use thiserror::Error;

use crate::constraint::{Constraint, ConstraintKind};
use crate::variable::{VarId, VariableSpace};

/// A constraint that does not hold under a total assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("constraint #{index} violated: {constraint}")]
pub struct Violation {
    /// Position of the constraint in [`Model::constraints`].
    pub index: usize,
    pub constraint: Constraint,
}

impl Violation {
    pub fn kind(&self) -> ConstraintKind {
        self.constraint.kind
    }
}

/// Constraint counts per rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSummary {
    pub variable_count: usize,
    pub counts: BTreeMap<ConstraintKind, usize>,
}

impl ModelSummary {
    pub fn constraint_count(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn count(&self, kind: ConstraintKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} variables, {} constraints",
            self.variable_count,
            self.constraint_count()
        )?;
        let mut first = true;
        for (kind, count) in &self.counts {
            write!(f, "{}{}: {}", if first { " (" } else { ", " }, kind, count)?;
            first = false;
        }
        if !first {
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// A built seating model: variables, constraints and the occurrence index
/// the search propagates through.
///
/// Created once per solve by [`ModelBuilder`](crate::ModelBuilder) and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Model {
    space: VariableSpace,
    constraints: Vec<Constraint>,
    watches: Vec<Vec<usize>>,
    passenger_ids: Vec<PassengerId>,
    passenger_names: Vec<String>,
    seat_ids: Vec<SeatId>,
}

impl Model {
    pub(crate) fn new(
        space: VariableSpace,
        constraints: Vec<Constraint>,
        roster: &[Passenger],
        layout: &[Seat],
    ) -> Self {
        let mut watches = vec![Vec::new(); space.len()];
        for (index, constraint) in constraints.iter().enumerate() {
            for var in constraint.vars() {
                let list = &mut watches[var.index()];
                // Cardinality sets never repeat a variable; guard the others.
                if list.last() != Some(&index) {
                    list.push(index);
                }
            }
        }
        Self {
            space,
            constraints,
            watches,
            passenger_ids: roster.iter().map(|p| p.id).collect(),
            passenger_names: roster.iter().map(|p| p.name.clone()).collect(),
            seat_ids: layout.iter().map(|s| s.id.clone()).collect(),
        }
    }

    #[inline]
    pub fn space(&self) -> &VariableSpace {
        &self.space
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Indices of the constraints mentioning `var`.
    #[inline]
    pub fn watches(&self, var: VarId) -> &[usize] {
        &self.watches[var.index()]
    }

    #[inline]
    pub fn passenger_count(&self) -> usize {
        self.space.passenger_count()
    }

    #[inline]
    pub fn seat_count(&self) -> usize {
        self.space.seat_count()
    }

    pub fn passenger_id(&self, passenger: usize) -> PassengerId {
        self.passenger_ids[passenger]
    }

    pub fn passenger_name(&self, passenger: usize) -> &str {
        &self.passenger_names[passenger]
    }

    pub fn seat_id(&self, seat: usize) -> &SeatId {
        &self.seat_ids[seat]
    }

    /// Checks a total assignment (indexed by [`VarId::index`]) against every
    /// constraint and returns the first violation.
    ///
    /// Variables beyond the end of `values` read as false.
    pub fn check(&self, values: &[bool]) -> Result<(), Violation> {
        let value = |v: VarId| Some(values.get(v.index()).copied().unwrap_or(false));
        for (index, constraint) in self.constraints.iter().enumerate() {
            if constraint.evaluate(value) != crate::Status::Satisfied {
                return Err(Violation {
                    index,
                    constraint: constraint.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn summary(&self) -> ModelSummary {
        let mut counts = BTreeMap::new();
        for constraint in &self.constraints {
            *counts.entry(constraint.kind).or_insert(0) += 1;
        }
        ModelSummary {
            variable_count: self.space.len(),
            counts,
        }
    }
}
