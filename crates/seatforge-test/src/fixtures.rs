//! Hand-built layouts and reference scenarios.

use seatforge_core::{Orientation, Passenger, Position, Scenario, Seat, Trait};

/// Creates passenger `id` named `P<id>` with the given traits.
pub fn passenger(id: u32, traits: &[Trait]) -> Passenger {
    traits
        .iter()
        .fold(Passenger::new(id, format!("P{id}")), |p, &t| p.with(t))
}

/// `n` middle, forward-facing seats `S1..Sn` on the row `y = 0`.
pub fn line_layout(n: usize) -> Vec<Seat> {
    (0..n)
        .map(|i| {
            Seat::new(
                format!("S{}", i + 1),
                i as i32,
                0,
                Position::Middle,
                Orientation::Forward,
            )
        })
        .collect()
}

/// Two adjacent seats (window, aisle) and one passenger preferring the window.
pub fn scenario_a() -> Scenario {
    Scenario::new(
        "A",
        vec![
            Seat::new("W", 0, 0, Position::Window, Orientation::Forward),
            Seat::new("A", 1, 0, Position::Aisle, Orientation::Forward),
        ],
        vec![passenger(1, &[Trait::PrefersWindow])],
    )
}

/// `S1`-`S2` adjacent, `S3` far away, two talkative passengers.
pub fn scenario_b() -> Scenario {
    Scenario::new(
        "B",
        vec![
            Seat::new("S1", 0, 0, Position::Middle, Orientation::Forward),
            Seat::new("S2", 1, 0, Position::Middle, Orientation::Forward),
            Seat::new("S3", 5, 5, Position::Middle, Orientation::Forward),
        ],
        vec![
            passenger(1, &[Trait::Talkative]),
            passenger(2, &[Trait::Talkative]),
        ],
    )
}

/// Two mutually adjacent seats, one passenger wanting to be alone.
pub fn scenario_c() -> Scenario {
    Scenario::new(
        "C",
        line_layout(2),
        vec![passenger(1, &[Trait::WantsToBeAlone]), passenger(2, &[])],
    )
}

/// A window preference on a layout without window seats.
pub fn scenario_d() -> Scenario {
    Scenario::new(
        "D",
        line_layout(3),
        vec![passenger(1, &[Trait::PrefersWindow])],
    )
}
