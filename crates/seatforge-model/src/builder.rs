//! Compiles a layout and a roster into a [`Model`].
//!
//! Rules are emitted in a fixed order (coverage, capacity, inclusions,
//! pairwise exclusions, preferences), so the same input always produces
//! the same constraint list.

use std::collections::{HashMap, HashSet};

use seatforge_config::{MissingCategoryPolicy, ModelConfig};
use seatforge_core::{
    distance, Passenger, PassengerId, Result, Seat, SeatForgeError, SeatPreference,
    NEIGHBOR_RADIUS, NUISANCE_RADIUS,
};
use smallvec::SmallVec;
use tracing::{debug, info, trace, warn};

use crate::constraint::{Constraint, ConstraintKind};
use crate::model::Model;
use crate::relations::RelationIndex;
use crate::rules;
use crate::variable::{VarId, VariableSpace};

/// Builder for seating models.
///
/// # Example
///
/// ```
/// use seatforge_core::scenario::taxi_layout;
/// use seatforge_core::Passenger;
/// use seatforge_model::{ConstraintKind, ModelBuilder};
///
/// let layout = taxi_layout();
/// let roster = vec![Passenger::new(1, "Ana"), Passenger::new(2, "Ben")];
///
/// let model = ModelBuilder::new(&layout, &roster).build().unwrap();
/// let summary = model.summary();
/// assert_eq!(summary.count(ConstraintKind::Coverage), 2);
/// assert_eq!(summary.count(ConstraintKind::Capacity), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ModelBuilder<'a> {
    layout: &'a [Seat],
    roster: &'a [Passenger],
    missing_category: MissingCategoryPolicy,
}

impl<'a> ModelBuilder<'a> {
    pub fn new(layout: &'a [Seat], roster: &'a [Passenger]) -> Self {
        Self {
            layout,
            roster,
            missing_category: MissingCategoryPolicy::default(),
        }
    }

    /// Applies the model section of a solver configuration.
    pub fn with_config(mut self, config: &ModelConfig) -> Self {
        self.missing_category = config.missing_category;
        self
    }

    pub fn with_missing_category(mut self, policy: MissingCategoryPolicy) -> Self {
        self.missing_category = policy;
        self
    }

    /// Validates the input and emits every constraint.
    ///
    /// # Errors
    ///
    /// - [`SeatForgeError::DuplicateSeat`] / [`SeatForgeError::DuplicateCoordinates`]
    ///   for a malformed layout
    /// - [`SeatForgeError::DuplicatePassenger`] for a malformed roster
    /// - [`SeatForgeError::UnknownRelation`] for a dangling relation id
    /// - [`SeatForgeError::MissingSeatCategory`] when a preference has no
    ///   matching seat and the policy is [`MissingCategoryPolicy::Reject`]
    pub fn build(&self) -> Result<Model> {
        validate_layout(self.layout)?;
        let positions = validate_roster(self.roster)?;
        let relations = RelationIndex::new(self.roster, &positions)?;
        if self.missing_category == MissingCategoryPolicy::Reject {
            check_preferences(self.layout, self.roster)?;
        }

        let space = VariableSpace::new(self.roster.len(), self.layout.len());
        let geometry = SeatGeometry::new(self.layout);
        let mut out = Emitter::default();

        self.emit_coverage(&space, &mut out);
        self.emit_capacity(&space, &mut out);
        self.emit_inclusion(
            &space,
            &geometry,
            &mut out,
            ConstraintKind::TalkativeInclusion,
            |p| p.traits.talkative,
            |q| q.traits.talkative,
        );
        self.emit_inclusion(
            &space,
            &geometry,
            &mut out,
            ConstraintKind::ChildInclusion,
            |p| p.traits.wants_to_be_near_child,
            |q| q.traits.is_child,
        );
        self.emit_pairwise(&space, &geometry, &relations, &mut out);
        self.emit_preference(&space, &mut out, SeatPreference::Window);
        self.emit_preference(&space, &mut out, SeatPreference::Forward);

        let model = Model::new(space, out.constraints, self.roster, self.layout);
        info!(
            event = "model_built",
            passengers = self.roster.len(),
            seats = self.layout.len(),
            variables = model.space().len(),
            constraints = model.constraints().len(),
            rival_pairs = relations.rival_pair_count(),
            group_pairs = relations.group_pair_count(),
        );
        Ok(model)
    }

    fn emit_coverage(&self, space: &VariableSpace, out: &mut Emitter) {
        for p in 0..space.passenger_count() {
            out.push(Constraint::exactly_one(
                ConstraintKind::Coverage,
                space.passenger_vars(p).collect(),
            ));
        }
    }

    fn emit_capacity(&self, space: &VariableSpace, out: &mut Emitter) {
        for s in 0..space.seat_count() {
            out.push(Constraint::at_most_one(
                ConstraintKind::Capacity,
                space.seat_vars(s).collect(),
            ));
        }
    }

    /// For every passenger matching `wants` and every seat: sitting there
    /// requires some other passenger matching `provides` on a neighbor seat.
    fn emit_inclusion(
        &self,
        space: &VariableSpace,
        geometry: &SeatGeometry,
        out: &mut Emitter,
        kind: ConstraintKind,
        wants: impl Fn(&Passenger) -> bool,
        provides: impl Fn(&Passenger) -> bool,
    ) {
        for (i, passenger) in self.roster.iter().enumerate() {
            if !wants(passenger) {
                continue;
            }
            let partners: Vec<usize> = self
                .roster
                .iter()
                .enumerate()
                .filter(|(j, q)| *j != i && provides(q))
                .map(|(j, _)| j)
                .collect();
            if partners.is_empty() {
                debug!(
                    event = "inclusion_unsupported",
                    kind = kind.name(),
                    passenger = %passenger.id,
                    name = %passenger.name,
                );
            }
            for s in 0..space.seat_count() {
                let support = partners
                    .iter()
                    .flat_map(|&j| geometry.neighbors(s).iter().map(move |&n| space.var(j, n)))
                    .collect();
                out.push(Constraint::inclusion(kind, space.var(i, s), support));
            }
        }
    }

    fn emit_pairwise(
        &self,
        space: &VariableSpace,
        geometry: &SeatGeometry,
        relations: &RelationIndex,
        out: &mut Emitter,
    ) {
        let n = self.roster.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (&self.roster[i], &self.roster[j]);
                let grouped = relations.are_grouped(i, j);
                let near_conflict = rules::neighbor_conflict(a, b, relations.are_rivals(i, j));
                // Grouping overrides nuisance.
                let nuisance = if grouped { None } else { rules::nuisance(a, b) };
                if !grouped && !near_conflict && nuisance.is_none() {
                    continue;
                }
                trace!(
                    event = "pair_rules",
                    first = %a.id,
                    second = %b.id,
                    grouped,
                    near_conflict,
                    nuisance = ?nuisance,
                );
                for s1 in 0..space.seat_count() {
                    for s2 in 0..space.seat_count() {
                        if s1 == s2 {
                            continue;
                        }
                        let d = geometry.distance(s1, s2);
                        let (x, y) = (space.var(i, s1), space.var(j, s2));
                        if near_conflict && d <= NEIGHBOR_RADIUS {
                            out.exclude(ConstraintKind::NeighborExclusion, x, y);
                        }
                        if nuisance.is_some() && d <= NUISANCE_RADIUS {
                            out.exclude(ConstraintKind::NuisanceExclusion, x, y);
                        }
                        if grouped && d > NEIGHBOR_RADIUS {
                            out.exclude(ConstraintKind::GroupingExclusion, x, y);
                        }
                    }
                }
            }
        }
    }

    fn emit_preference(&self, space: &VariableSpace, out: &mut Emitter, preference: SeatPreference) {
        let kind = match preference {
            SeatPreference::Window => ConstraintKind::WindowPreference,
            SeatPreference::Forward => ConstraintKind::ForwardPreference,
        };
        for (i, passenger) in self.roster.iter().enumerate() {
            if !prefers(passenger, preference) {
                continue;
            }
            let vars: Vec<VarId> = self
                .layout
                .iter()
                .enumerate()
                .filter(|(_, seat)| preference.accepts(seat))
                .map(|(s, _)| space.var(i, s))
                .collect();
            if vars.is_empty() {
                warn!(
                    event = "preference_unsatisfiable",
                    passenger = %passenger.id,
                    name = %passenger.name,
                    preference = %preference,
                );
            }
            out.push(Constraint::exactly_one(kind, vars));
        }
    }
}

fn prefers(passenger: &Passenger, preference: SeatPreference) -> bool {
    match preference {
        SeatPreference::Window => passenger.traits.prefers_window,
        SeatPreference::Forward => passenger.traits.prefers_forward,
    }
}

/// Accumulates constraints, dropping duplicate exclusions.
#[derive(Default)]
struct Emitter {
    constraints: Vec<Constraint>,
    excluded: HashSet<(VarId, VarId)>,
}

impl Emitter {
    fn push(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    fn exclude(&mut self, kind: ConstraintKind, a: VarId, b: VarId) {
        let key = if a <= b { (a, b) } else { (b, a) };
        if self.excluded.insert(key) {
            self.constraints.push(Constraint::exclusion(kind, a, b));
        }
    }
}

/// Pairwise seat distances and radius-1 neighbor lists.
struct SeatGeometry {
    seat_count: usize,
    distances: Vec<u64>,
    neighbors: Vec<SmallVec<[usize; 4]>>,
}

impl SeatGeometry {
    fn new(layout: &[Seat]) -> Self {
        let seat_count = layout.len();
        let mut distances = Vec::with_capacity(seat_count * seat_count);
        let mut neighbors = vec![SmallVec::new(); seat_count];
        for (s1, a) in layout.iter().enumerate() {
            for (s2, b) in layout.iter().enumerate() {
                let d = distance(a.coord(), b.coord());
                distances.push(d);
                if d == NEIGHBOR_RADIUS {
                    neighbors[s1].push(s2);
                }
            }
        }
        Self {
            seat_count,
            distances,
            neighbors,
        }
    }

    #[inline]
    fn distance(&self, s1: usize, s2: usize) -> u64 {
        self.distances[s1 * self.seat_count + s2]
    }

    #[inline]
    fn neighbors(&self, seat: usize) -> &[usize] {
        &self.neighbors[seat]
    }
}

fn validate_layout(layout: &[Seat]) -> Result<()> {
    let mut ids = HashSet::with_capacity(layout.len());
    let mut cells: HashMap<(i32, i32), &Seat> = HashMap::with_capacity(layout.len());
    for seat in layout {
        if !ids.insert(&seat.id) {
            return Err(SeatForgeError::DuplicateSeat(seat.id.clone()));
        }
        if let Some(first) = cells.insert((seat.x, seat.y), seat) {
            return Err(SeatForgeError::DuplicateCoordinates {
                first: first.id.clone(),
                second: seat.id.clone(),
                x: seat.x,
                y: seat.y,
            });
        }
    }
    Ok(())
}

/// Returns the roster index of every passenger id.
fn validate_roster(roster: &[Passenger]) -> Result<HashMap<PassengerId, usize>> {
    let mut positions = HashMap::with_capacity(roster.len());
    for (i, passenger) in roster.iter().enumerate() {
        if positions.insert(passenger.id, i).is_some() {
            return Err(SeatForgeError::DuplicatePassenger(passenger.id));
        }
    }
    Ok(positions)
}

fn check_preferences(layout: &[Seat], roster: &[Passenger]) -> Result<()> {
    for passenger in roster {
        for preference in [SeatPreference::Window, SeatPreference::Forward] {
            if prefers(passenger, preference) && !layout.iter().any(|s| preference.accepts(s)) {
                return Err(SeatForgeError::MissingSeatCategory {
                    passenger: passenger.id,
                    name: passenger.name.clone(),
                    preference,
                });
            }
        }
    }
    Ok(())
}
