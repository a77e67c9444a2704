//! Passenger and seat ordering.

use rand::seq::SliceRandom;
use seatforge_config::{PassengerOrder, ValueOrder};
use seatforge_model::Model;
use smallvec::SmallVec;

use super::trail::Trail;
use crate::scope::SolverScope;

pub(crate) type Candidates = SmallVec<[usize; 16]>;

fn is_seated(model: &Model, trail: &Trail, passenger: usize) -> bool {
    model
        .space()
        .passenger_vars(passenger)
        .any(|v| trail.value(v) == Some(true))
}

fn open_seats(model: &Model, trail: &Trail, passenger: usize) -> usize {
    model
        .space()
        .passenger_vars(passenger)
        .filter(|&v| trail.value(v).is_none())
        .count()
}

/// The next passenger to seat, or `None` once everyone is seated.
///
/// Ties under [`PassengerOrder::FewestCandidates`] go to the earlier
/// roster position.
pub(crate) fn select_passenger(
    model: &Model,
    trail: &Trail,
    order: PassengerOrder,
) -> Option<usize> {
    let mut unseated = (0..model.passenger_count()).filter(|&p| !is_seated(model, trail, p));
    match order {
        PassengerOrder::Roster => unseated.next(),
        PassengerOrder::FewestCandidates => unseated.min_by_key(|&p| open_seats(model, trail, p)),
    }
}

/// Seats still open to `passenger`, in the configured order.
pub(crate) fn candidate_seats(
    model: &Model,
    trail: &Trail,
    passenger: usize,
    order: ValueOrder,
    scope: &mut SolverScope,
) -> Candidates {
    let space = model.space();
    let mut seats: Candidates = (0..space.seat_count())
        .filter(|&s| trail.value(space.var(passenger, s)).is_none())
        .collect();
    if order == ValueOrder::Shuffled {
        seats.shuffle(scope.rng());
    }
    seats
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatforge_model::build_model;
    use seatforge_test::{line_layout, passenger};

    #[test]
    fn test_roster_order_skips_seated() {
        let roster = vec![passenger(1, &[]), passenger(2, &[])];
        let model = build_model(&line_layout(3), &roster).unwrap();
        let mut trail = Trail::new(model.space().len());

        assert_eq!(select_passenger(&model, &trail, PassengerOrder::Roster), Some(0));
        trail.assign(model.space().var(0, 1), true);
        assert_eq!(select_passenger(&model, &trail, PassengerOrder::Roster), Some(1));
        trail.assign(model.space().var(1, 0), true);
        assert_eq!(select_passenger(&model, &trail, PassengerOrder::Roster), None);
    }

    #[test]
    fn test_fewest_candidates_prefers_constrained() {
        let roster = vec![passenger(1, &[]), passenger(2, &[])];
        let model = build_model(&line_layout(3), &roster).unwrap();
        let space = *model.space();
        let mut trail = Trail::new(space.len());
        trail.assign(space.var(1, 0), false);

        assert_eq!(
            select_passenger(&model, &trail, PassengerOrder::FewestCandidates),
            Some(1)
        );
        let mut scope = SolverScope::with_seed(0);
        let seats = candidate_seats(&model, &trail, 1, ValueOrder::Layout, &mut scope);
        assert_eq!(seats.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let model = build_model(&line_layout(8), &[passenger(1, &[])]).unwrap();
        let trail = Trail::new(model.space().len());
        let mut a = SolverScope::with_seed(42);
        let mut b = SolverScope::with_seed(42);

        let first = candidate_seats(&model, &trail, 0, ValueOrder::Shuffled, &mut a);
        let second = candidate_seats(&model, &trail, 0, ValueOrder::Shuffled, &mut b);
        assert_eq!(first, second);
        let mut sorted = first.clone();
        sorted.sort_unstable();
        assert_eq!(sorted.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7]);
    }
}
