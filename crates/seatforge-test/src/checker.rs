//! Plan checker.
//!
//! Re-derives every seating rule from the layout and roster alone, so a
//! plan produced by the solver can be verified without trusting the
//! model builder.

use std::collections::HashMap;

use seatforge_core::{
    distance, Passenger, PassengerId, Relation, Seat, SeatId, SeatPreference,
    NEIGHBOR_RADIUS, NUISANCE_RADIUS,
};
use thiserror::Error;

/// A rule a seating plan breaks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanViolation {
    #[error("passenger {0} is not on the roster")]
    UnknownPassenger(PassengerId),

    #[error("seat `{0}` is not in the layout")]
    UnknownSeat(SeatId),

    #[error("passenger {0} has no seat")]
    Unseated(PassengerId),

    #[error("passenger {0} is seated twice")]
    SeatedTwice(PassengerId),

    #[error("seat `{0}` holds more than one passenger")]
    Overbooked(SeatId),

    #[error("{first} and {second} sit {distance} apart, breaking {rule}")]
    TooClose {
        first: PassengerId,
        second: PassengerId,
        distance: u64,
        rule: &'static str,
    },

    #[error("{first} and {second} must be near but sit {distance} apart")]
    TooFar {
        first: PassengerId,
        second: PassengerId,
        distance: u64,
    },

    #[error("passenger {passenger} has no {partner} next to them")]
    MissingPartner {
        passenger: PassengerId,
        partner: &'static str,
    },

    #[error("passenger {passenger} is not on a {preference} seat")]
    Preference {
        passenger: PassengerId,
        preference: SeatPreference,
    },
}

fn hates_output(listener: &Passenger, source: &Passenger) -> bool {
    let (l, s) = (&listener.traits, &source.traits);
    (l.hates_bad_smells && s.smells_bad)
        || (l.hates_cologne && s.smells_cologne)
        || (l.hates_talkative && s.talkative)
        || (l.hates_music && s.plays_music)
        || (l.needs_quiet && (s.talkative || s.plays_music))
}

fn related(a: &Passenger, b: &Passenger, relation: Relation) -> bool {
    a.related(relation).contains(&b.id) || b.related(relation).contains(&a.id)
}

/// Checks `assignments` against every seating rule and returns all
/// violations found (empty when the plan is valid).
///
/// # Example
///
/// ```
/// use seatforge_test::{check_plan, scenario_a};
///
/// let s = scenario_a();
/// let window = &s.layout[0].id;
/// assert!(check_plan(&s.layout, &s.passengers, [(s.passengers[0].id, window)]).is_empty());
///
/// let aisle = &s.layout[1].id;
/// assert_eq!(check_plan(&s.layout, &s.passengers, [(s.passengers[0].id, aisle)]).len(), 1);
/// ```
pub fn check_plan<'a>(
    layout: &[Seat],
    roster: &[Passenger],
    assignments: impl IntoIterator<Item = (PassengerId, &'a SeatId)>,
) -> Vec<PlanViolation> {
    let mut violations = Vec::new();
    let seats: HashMap<&SeatId, &Seat> = layout.iter().map(|s| (&s.id, s)).collect();
    let known: HashMap<PassengerId, &Passenger> = roster.iter().map(|p| (p.id, p)).collect();

    let mut seat_of: HashMap<PassengerId, &Seat> = HashMap::new();
    let mut occupied: HashMap<&SeatId, PassengerId> = HashMap::new();
    for (passenger, seat_id) in assignments {
        if !known.contains_key(&passenger) {
            violations.push(PlanViolation::UnknownPassenger(passenger));
            continue;
        }
        let Some(&seat) = seats.get(seat_id) else {
            violations.push(PlanViolation::UnknownSeat(seat_id.clone()));
            continue;
        };
        if seat_of.insert(passenger, seat).is_some() {
            violations.push(PlanViolation::SeatedTwice(passenger));
        }
        if occupied.insert(&seat.id, passenger).is_some() {
            violations.push(PlanViolation::Overbooked(seat.id.clone()));
        }
    }
    for p in roster {
        if !seat_of.contains_key(&p.id) {
            violations.push(PlanViolation::Unseated(p.id));
        }
    }
    if !violations.is_empty() {
        return violations;
    }

    let d = |a: &Passenger, b: &Passenger| distance(seat_of[&a.id].coord(), seat_of[&b.id].coord());

    for (i, a) in roster.iter().enumerate() {
        for b in &roster[i + 1..] {
            let dist = d(a, b);
            let (ta, tb) = (&a.traits, &b.traits);
            let grouped = related(a, b, Relation::MustBeNear);
            let close_rule = if ta.wants_to_be_alone || tb.wants_to_be_alone {
                Some("wants_to_be_alone")
            } else if (ta.dislikes_children && tb.is_child) || (tb.dislikes_children && ta.is_child) {
                Some("dislikes_children")
            } else if related(a, b, Relation::Hates) {
                Some("hates")
            } else {
                None
            };
            if let Some(rule) = close_rule {
                if dist <= NEIGHBOR_RADIUS {
                    violations.push(PlanViolation::TooClose {
                        first: a.id,
                        second: b.id,
                        distance: dist,
                        rule,
                    });
                }
            }
            if !grouped && dist <= NUISANCE_RADIUS && (hates_output(a, b) || hates_output(b, a)) {
                violations.push(PlanViolation::TooClose {
                    first: a.id,
                    second: b.id,
                    distance: dist,
                    rule: "nuisance",
                });
            }
            if grouped && dist > NEIGHBOR_RADIUS {
                violations.push(PlanViolation::TooFar {
                    first: a.id,
                    second: b.id,
                    distance: dist,
                });
            }
        }
    }

    for p in roster {
        let has_partner = |wanted: fn(&Passenger) -> bool| {
            roster
                .iter()
                .any(|q| q.id != p.id && wanted(q) && d(p, q) == NEIGHBOR_RADIUS)
        };
        if p.traits.talkative && !has_partner(|q| q.traits.talkative) {
            violations.push(PlanViolation::MissingPartner {
                passenger: p.id,
                partner: "talkative passenger",
            });
        }
        if p.traits.wants_to_be_near_child && !has_partner(|q| q.traits.is_child) {
            violations.push(PlanViolation::MissingPartner {
                passenger: p.id,
                partner: "child",
            });
        }
        let seat = seat_of[&p.id];
        for (wanted, preference) in [
            (p.traits.prefers_window, SeatPreference::Window),
            (p.traits.prefers_forward, SeatPreference::Forward),
        ] {
            if wanted && !preference.accepts(seat) {
                violations.push(PlanViolation::Preference {
                    passenger: p.id,
                    preference,
                });
            }
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{line_layout, passenger, scenario_b};
    use seatforge_core::Trait;

    #[test]
    fn test_detects_overbooking_and_unseated() {
        let layout = line_layout(2);
        let roster = vec![passenger(1, &[]), passenger(2, &[])];
        let v = check_plan(
            &layout,
            &roster,
            [(PassengerId(1), &layout[0].id), (PassengerId(2), &layout[0].id)],
        );
        assert_eq!(v, vec![PlanViolation::Overbooked(layout[0].id.clone())]);

        let v = check_plan(&layout, &roster, [(PassengerId(1), &layout[0].id)]);
        assert_eq!(v, vec![PlanViolation::Unseated(PassengerId(2))]);
    }

    #[test]
    fn test_detects_rivals_side_by_side() {
        let layout = line_layout(3);
        let roster = vec![passenger(1, &[]).hating([2]), passenger(2, &[])];
        let v = check_plan(
            &layout,
            &roster,
            [(PassengerId(1), &layout[0].id), (PassengerId(2), &layout[1].id)],
        );
        assert!(matches!(v[..], [PlanViolation::TooClose { rule: "hates", .. }]));

        let v = check_plan(
            &layout,
            &roster,
            [(PassengerId(1), &layout[0].id), (PassengerId(2), &layout[2].id)],
        );
        assert!(v.is_empty());
    }

    #[test]
    fn test_grouping_suppresses_nuisance() {
        let layout = line_layout(2);
        let roster = vec![
            passenger(1, &[Trait::SmellsBad]).near([2]),
            passenger(2, &[Trait::HatesBadSmells]),
        ];
        let v = check_plan(
            &layout,
            &roster,
            [(PassengerId(1), &layout[0].id), (PassengerId(2), &layout[1].id)],
        );
        assert!(v.is_empty());
    }

    #[test]
    fn test_talkative_needs_talkative_neighbor() {
        let s = scenario_b();
        let far = check_plan(
            &s.layout,
            &s.passengers,
            [(PassengerId(1), &s.layout[0].id), (PassengerId(2), &s.layout[2].id)],
        );
        assert_eq!(far.len(), 2);

        let near = check_plan(
            &s.layout,
            &s.passengers,
            [(PassengerId(1), &s.layout[1].id), (PassengerId(2), &s.layout[0].id)],
        );
        assert!(near.is_empty());
    }
}
