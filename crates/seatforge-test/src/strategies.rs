//! `proptest` strategies for random small scenarios.
//!
//! Seats are drawn from a 4x3 grid so layouts contain both neighbors and
//! distant seats. Traits are sparse to keep most scenarios feasible.

use proptest::bool::weighted;
use proptest::collection::vec;
use proptest::prelude::*;
use proptest::sample::subsequence;
use seatforge_core::{Orientation, Passenger, PassengerId, Position, Scenario, Seat, Trait};

const GRID_WIDTH: usize = 4;
const GRID_HEIGHT: usize = 3;
const CELLS: usize = GRID_WIDTH * GRID_HEIGHT;

fn position(code: u8) -> Position {
    match code {
        0 => Position::Window,
        1 => Position::Aisle,
        _ => Position::Middle,
    }
}

/// Between 1 and `max_seats` seats on distinct grid cells.
pub fn arb_layout(max_seats: usize) -> impl Strategy<Value = Vec<Seat>> {
    let cells: Vec<usize> = (0..CELLS).collect();
    (
        subsequence(cells, 1..=max_seats.clamp(1, CELLS)),
        vec((0u8..3, any::<bool>()), CELLS),
    )
        .prop_map(|(cells, attributes)| {
            cells
                .into_iter()
                .map(|cell| {
                    let (code, forward) = attributes[cell];
                    Seat::new(
                        format!("S{cell}"),
                        (cell % GRID_WIDTH) as i32,
                        (cell / GRID_WIDTH) as i32,
                        position(code),
                        if forward {
                            Orientation::Forward
                        } else {
                            Orientation::Backward
                        },
                    )
                })
                .collect()
        })
}

/// Up to `max_passengers` passengers with ids `1..=n`, sparse traits and a
/// few relations between them.
pub fn arb_roster(max_passengers: usize) -> impl Strategy<Value = Vec<Passenger>> {
    let max = max_passengers.max(1);
    (
        vec(vec(weighted(0.1), Trait::ALL.len()), 0..=max),
        vec((0..max, 0..max, any::<bool>()), 0..=2),
    )
        .prop_map(|(flags, relations)| {
            let mut roster: Vec<Passenger> = flags
                .iter()
                .enumerate()
                .map(|(i, flags)| {
                    let id = i as u32 + 1;
                    let mut p = Passenger::new(id, format!("P{id}"));
                    for (&t, &on) in Trait::ALL.iter().zip(flags) {
                        p.traits.set(t, on);
                    }
                    p
                })
                .collect();
            let n = roster.len();
            if n > 0 {
                for (from, to, hates) in relations {
                    let target = PassengerId((to % n) as u32 + 1);
                    let from = &mut roster[from % n];
                    if hates {
                        from.hates.push(target);
                    } else {
                        from.must_be_near.push(target);
                    }
                }
            }
            roster
        })
}

/// A small generated scenario.
pub fn arb_scenario() -> impl Strategy<Value = Scenario> {
    (arb_layout(6), arb_roster(4))
        .prop_map(|(layout, passengers)| Scenario::new("generated", layout, passengers))
}
