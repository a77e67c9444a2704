//! London Example
//!
//! Plays the London levels on the limousine layout. Every passenger has
//! demands about where they sit and who sits next to them; the solver
//! either seats the whole roster or proves that nobody can be made happy.
//!
//! ```text
//! cargo run -p london            # all three levels
//! cargo run -p london -- 2       # London 1-2 only
//! cargo run -p london -- my.toml # a scenario file
//! ```

use std::process::ExitCode;

use seatforge::prelude::*;
use seatforge::{load_scenario, SeatForgeError};
use tracing::info;

/// Prints the seating of one scenario, or the reason there is none.
fn play(scenario: &Scenario) -> Result<(), SeatForgeError> {
    println!("\n--- {} ---", scenario.name.to_uppercase());
    println!(
        "Goal: place {} passengers on {} seats with conflicting needs.\n",
        scenario.passengers.len(),
        scenario.layout.len()
    );

    let result = solve_seating(&scenario.layout, &scenario.passengers)?;
    match &result.verdict {
        Verdict::Feasible(plan) => {
            for passenger in &scenario.passengers {
                let Some(seat) = plan
                    .seat_of(passenger.id)
                    .and_then(|id| scenario.layout.iter().find(|s| &s.id == id))
                else {
                    continue;
                };
                info!(
                    event = "assigned",
                    passenger = %passenger.id,
                    seat = %seat.id,
                );
                println!(
                    "[ASSIGNED] {:<12} -> Seat {:<10} (x={}, y={}){}",
                    passenger.name,
                    seat.id,
                    seat.x,
                    seat.y,
                    markers(passenger)
                );
            }
            println!("\n========== {} PLAN ==========", scenario.name.to_uppercase());
            print!("{}", render_grid(&scenario.layout, Some(plan)));
            println!("\nSuccessful! ({} decisions)", result.stats.decisions);
        }
        Verdict::Infeasible => println!("Impossible to satisfy everyone!"),
        Verdict::Terminated(reason) => println!("Gave up: {reason}"),
    }
    Ok(())
}

/// Short tags for the traits that explain most placements.
fn markers(passenger: &Passenger) -> String {
    let mut out = String::new();
    for (t, tag) in [
        (Trait::SmellsBad, " [!] Smelly"),
        (Trait::SmellsCologne, " [!] Cologne"),
        (Trait::IsChild, " [c] Child"),
        (Trait::Talkative, " [t] Talkative"),
        (Trait::WantsToBeAlone, " [a] Alone"),
    ] {
        if passenger.traits.has(t) {
            out.push_str(tag);
        }
    }
    out
}

fn scenarios(arg: Option<String>) -> Result<Vec<Scenario>, String> {
    let Some(arg) = arg else {
        return Ok((1..=3).filter_map(Scenario::london).collect());
    };
    if let Ok(level) = arg.parse::<u32>() {
        return Scenario::london(level)
            .map(|s| vec![s])
            .ok_or_else(|| format!("no London level 1-{level} (choose 1, 2 or 3)"));
    }
    load_scenario(&arg)
        .map(|s| vec![s])
        .map_err(|e| format!("{arg}: {e}"))
}

fn main() -> ExitCode {
    seatforge::console::init();

    let scenarios = match scenarios(std::env::args().nth(1)) {
        Ok(scenarios) => scenarios,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    for scenario in &scenarios {
        if let Err(err) = play(scenario) {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
