//! Symmetric relation index.
//!
//! `hates` and `must_be_near` are stored per passenger and may be listed
//! on one side only. They are normalized here, once, into sets of
//! unordered roster-index pairs.

use std::collections::{HashMap, HashSet};

use seatforge_core::{Passenger, PassengerId, Relation, Result, SeatForgeError};

/// Unordered roster-index pairs for each relation.
#[derive(Debug, Clone, Default)]
pub struct RelationIndex {
    rivals: HashSet<(usize, usize)>,
    groups: HashSet<(usize, usize)>,
}

#[inline]
fn key(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl RelationIndex {
    /// Indexes the roster relations.
    ///
    /// `positions` maps passenger ids to roster indices.
    ///
    /// # Errors
    ///
    /// [`SeatForgeError::UnknownRelation`] if a list names an id missing
    /// from the roster.
    pub fn new(roster: &[Passenger], positions: &HashMap<PassengerId, usize>) -> Result<Self> {
        let mut index = Self::default();
        for (i, passenger) in roster.iter().enumerate() {
            for relation in [Relation::Hates, Relation::MustBeNear] {
                for target in passenger.related(relation) {
                    let j = *positions
                        .get(target)
                        .ok_or(SeatForgeError::UnknownRelation {
                            passenger: passenger.id,
                            target: *target,
                            relation,
                        })?;
                    // A self-reference carries no pairwise meaning.
                    if i == j {
                        continue;
                    }
                    let set = match relation {
                        Relation::Hates => &mut index.rivals,
                        Relation::MustBeNear => &mut index.groups,
                    };
                    set.insert(key(i, j));
                }
            }
        }
        Ok(index)
    }

    /// Either passenger lists the other in `hates`.
    #[inline]
    pub fn are_rivals(&self, a: usize, b: usize) -> bool {
        self.rivals.contains(&key(a, b))
    }

    /// Either passenger lists the other in `must_be_near`.
    #[inline]
    pub fn are_grouped(&self, a: usize, b: usize) -> bool {
        self.groups.contains(&key(a, b))
    }

    pub fn rival_pair_count(&self) -> usize {
        self.rivals.len()
    }

    pub fn group_pair_count(&self) -> usize {
        self.groups.len()
    }
}
