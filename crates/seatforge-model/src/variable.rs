//! Assignment variables.
//!
//! One boolean variable per (passenger, seat) pair. Ids are derived from
//! roster and layout positions, so identical input yields identical ids.

use std::fmt;

/// Identifier of an assignment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(usize);

impl VarId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// The dense `passengers x seats` variable grid.
///
/// # Example
///
/// ```
/// use seatforge_model::VariableSpace;
///
/// let space = VariableSpace::new(3, 4);
/// let v = space.var(2, 1);
/// assert_eq!(space.len(), 12);
/// assert_eq!(space.passenger_of(v), 2);
/// assert_eq!(space.seat_of(v), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableSpace {
    passenger_count: usize,
    seat_count: usize,
}

impl VariableSpace {
    pub fn new(passenger_count: usize, seat_count: usize) -> Self {
        Self {
            passenger_count,
            seat_count,
        }
    }

    #[inline]
    pub fn passenger_count(&self) -> usize {
        self.passenger_count
    }

    #[inline]
    pub fn seat_count(&self) -> usize {
        self.seat_count
    }

    /// Total number of variables.
    #[inline]
    pub fn len(&self) -> usize {
        self.passenger_count * self.seat_count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The variable "passenger `p` sits on seat `s`" (roster/layout indices).
    #[inline]
    pub fn var(&self, passenger: usize, seat: usize) -> VarId {
        debug_assert!(passenger < self.passenger_count && seat < self.seat_count);
        VarId(passenger * self.seat_count + seat)
    }

    #[inline]
    pub fn passenger_of(&self, var: VarId) -> usize {
        var.0 / self.seat_count
    }

    #[inline]
    pub fn seat_of(&self, var: VarId) -> usize {
        var.0 % self.seat_count
    }

    /// All variables of one passenger, in layout order.
    pub fn passenger_vars(&self, passenger: usize) -> impl Iterator<Item = VarId> + '_ {
        (0..self.seat_count).map(move |s| self.var(passenger, s))
    }

    /// All variables of one seat, in roster order.
    pub fn seat_vars(&self, seat: usize) -> impl Iterator<Item = VarId> + '_ {
        (0..self.passenger_count).map(move |p| self.var(p, seat))
    }

    /// Every variable, in id order.
    pub fn iter(&self) -> impl Iterator<Item = VarId> {
        (0..self.len()).map(VarId)
    }
}
