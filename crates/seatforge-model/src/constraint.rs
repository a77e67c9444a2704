//! Typed constraints over assignment variables.
//!
//! Every rule of the seating domain compiles down to one of three logical
//! forms, consumed uniformly by the search:
//! - cardinality (exactly one / at most one of a set is true)
//! - pairwise exclusion (two variables are not both true)
//! - reified inclusion (a trigger implies at least one of a set is true)

use std::fmt;

use crate::variable::VarId;

/// Which domain rule a constraint was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConstraintKind {
    /// Every passenger sits on exactly one seat.
    Coverage,
    /// Every seat holds at most one passenger.
    Capacity,
    /// A talkative passenger needs a talkative neighbor.
    TalkativeInclusion,
    /// A passenger wanting a child nearby needs a child neighbor.
    ChildInclusion,
    /// Alone, child-averse or rival pairs keep radius 1 free.
    NeighborExclusion,
    /// Smell and noise conflicts keep radius 2 free.
    NuisanceExclusion,
    /// Grouped pairs may not sit further apart than radius 1.
    GroupingExclusion,
    /// The passenger must sit on a window seat.
    WindowPreference,
    /// The passenger must sit on a forward-facing seat.
    ForwardPreference,
}

impl ConstraintKind {
    /// Every kind, in emission order.
    pub const ALL: [ConstraintKind; 9] = [
        ConstraintKind::Coverage,
        ConstraintKind::Capacity,
        ConstraintKind::TalkativeInclusion,
        ConstraintKind::ChildInclusion,
        ConstraintKind::NeighborExclusion,
        ConstraintKind::NuisanceExclusion,
        ConstraintKind::GroupingExclusion,
        ConstraintKind::WindowPreference,
        ConstraintKind::ForwardPreference,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ConstraintKind::Coverage => "coverage",
            ConstraintKind::Capacity => "capacity",
            ConstraintKind::TalkativeInclusion => "talkative inclusion",
            ConstraintKind::ChildInclusion => "child inclusion",
            ConstraintKind::NeighborExclusion => "neighbor exclusion",
            ConstraintKind::NuisanceExclusion => "nuisance exclusion",
            ConstraintKind::GroupingExclusion => "grouping exclusion",
            ConstraintKind::WindowPreference => "window preference",
            ConstraintKind::ForwardPreference => "forward preference",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bound of a cardinality constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    ExactlyOne,
    AtMostOne,
}

/// The logical content of a constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConstraintForm {
    /// Sum of `vars` is exactly / at most one.
    Cardinality { bound: Cardinality, vars: Vec<VarId> },
    /// `a + b <= 1`.
    Exclusion { a: VarId, b: VarId },
    /// `trigger => OR(support)`. An empty support forces `trigger` false.
    Inclusion { trigger: VarId, support: Vec<VarId> },
}

/// Truth of a constraint under a (possibly partial) assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Holds for every completion of the assignment.
    Satisfied,
    /// Fails for every completion of the assignment.
    Violated,
    /// Depends on unassigned variables.
    Open,
}

/// A constraint of the model, tagged with the rule that produced it.
///
/// # Example
///
/// ```
/// use seatforge_model::{Constraint, ConstraintKind, Status, VariableSpace};
///
/// let space = VariableSpace::new(2, 2);
/// let c = Constraint::exclusion(ConstraintKind::NeighborExclusion, space.var(0, 0), space.var(1, 1));
///
/// let values = [Some(true), Some(false), Some(false), Some(true)];
/// assert_eq!(c.evaluate(|v| values[v.index()]), Status::Violated);
///
/// let values = [Some(true), None, None, None];
/// assert_eq!(c.evaluate(|v| values[v.index()]), Status::Open);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constraint {
    pub kind: ConstraintKind,
    pub form: ConstraintForm,
}

impl Constraint {
    pub fn exactly_one(kind: ConstraintKind, vars: Vec<VarId>) -> Self {
        Self {
            kind,
            form: ConstraintForm::Cardinality {
                bound: Cardinality::ExactlyOne,
                vars,
            },
        }
    }

    pub fn at_most_one(kind: ConstraintKind, vars: Vec<VarId>) -> Self {
        Self {
            kind,
            form: ConstraintForm::Cardinality {
                bound: Cardinality::AtMostOne,
                vars,
            },
        }
    }

    pub fn exclusion(kind: ConstraintKind, a: VarId, b: VarId) -> Self {
        Self {
            kind,
            form: ConstraintForm::Exclusion { a, b },
        }
    }

    pub fn inclusion(kind: ConstraintKind, trigger: VarId, support: Vec<VarId>) -> Self {
        Self {
            kind,
            form: ConstraintForm::Inclusion { trigger, support },
        }
    }

    /// Every variable the constraint mentions (trigger first for inclusions).
    pub fn vars(&self) -> Box<dyn Iterator<Item = VarId> + '_> {
        match &self.form {
            ConstraintForm::Cardinality { vars, .. } => Box::new(vars.iter().copied()),
            ConstraintForm::Exclusion { a, b } => Box::new([*a, *b].into_iter()),
            ConstraintForm::Inclusion { trigger, support } => {
                Box::new(std::iter::once(*trigger).chain(support.iter().copied()))
            }
        }
    }

    /// Evaluates the constraint; `value` returns `None` for unassigned variables.
    pub fn evaluate(&self, value: impl Fn(VarId) -> Option<bool>) -> Status {
        match &self.form {
            ConstraintForm::Cardinality { bound, vars } => {
                let mut trues = 0usize;
                let mut open = 0usize;
                for &v in vars {
                    match value(v) {
                        Some(true) => trues += 1,
                        None => open += 1,
                        Some(false) => {}
                    }
                }
                if trues > 1 {
                    return Status::Violated;
                }
                match bound {
                    Cardinality::AtMostOne if trues + open <= 1 => Status::Satisfied,
                    Cardinality::ExactlyOne if trues + open == 0 => Status::Violated,
                    Cardinality::ExactlyOne if trues == 1 && open == 0 => Status::Satisfied,
                    _ => Status::Open,
                }
            }
            ConstraintForm::Exclusion { a, b } => match (value(*a), value(*b)) {
                (Some(true), Some(true)) => Status::Violated,
                (Some(false), _) | (_, Some(false)) => Status::Satisfied,
                _ => Status::Open,
            },
            ConstraintForm::Inclusion { trigger, support } => {
                if value(*trigger) == Some(false) {
                    return Status::Satisfied;
                }
                let mut open = false;
                for &v in support {
                    match value(v) {
                        Some(true) => return Status::Satisfied,
                        None => open = true,
                        Some(false) => {}
                    }
                }
                if value(*trigger) == Some(true) && !open {
                    Status::Violated
                } else {
                    Status::Open
                }
            }
        }
    }

    /// Evaluates the constraint under a total assignment.
    pub fn is_satisfied(&self, values: &[bool]) -> bool {
        self.evaluate(|v| Some(values[v.index()])) == Status::Satisfied
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.form {
            ConstraintForm::Cardinality { bound, vars } => {
                let op = match bound {
                    Cardinality::ExactlyOne => "==",
                    Cardinality::AtMostOne => "<=",
                };
                write!(f, "[{}] sum{{{} vars}} {} 1", self.kind, vars.len(), op)
            }
            ConstraintForm::Exclusion { a, b } => {
                write!(f, "[{}] {} + {} <= 1", self.kind, a, b)
            }
            ConstraintForm::Inclusion { trigger, support } => {
                write!(
                    f,
                    "[{}] {} => any of {} vars",
                    self.kind,
                    trigger,
                    support.len()
                )
            }
        }
    }
}
