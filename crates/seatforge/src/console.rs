//! Colorful console output for solver events.
//!
//! Provides a `tracing` layer that renders the structured events of the
//! model builder and the solver as short colored lines.
//!
//! ## Log Levels
//!
//! - **INFO**: Model built, solving started and ended
//! - **WARN**: Preferences no seat can satisfy
//! - **DEBUG**: Backtracks, conflicts at the root, early termination

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

const DEFAULT_FILTER: &str = "seatforge=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. Honors
/// `RUST_LOG` and falls back to `seatforge=info`.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SeatingConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(
        stdout,
        "{} {}",
        "SeatForge".bright_cyan().bold(),
        format!("v{} - seating constraint solver", env!("CARGO_PKG_VERSION")).bright_white()
    );
    let _ = stdout.flush();
}

fn elapsed_secs() -> f64 {
    EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

/// A tracing layer that formats seating events with colors.
pub struct SeatingConsoleLayer;

impl<S: Subscriber> Layer<S> for SeatingConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("seatforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{} {}", format_elapsed(), output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    verdict: Option<String>,
    reason: Option<String>,
    passenger: Option<String>,
    name: Option<String>,
    preference: Option<String>,
    kind: Option<String>,
    passengers: Option<u64>,
    seats: Option<u64>,
    constraints: Option<u64>,
    passenger_count: Option<u64>,
    seat_count: Option<u64>,
    constraint_count: Option<u64>,
    decisions: Option<u64>,
    backtracks: Option<u64>,
    conflicts: Option<u64>,
    depth: Option<u64>,
    elapsed_ms: Option<u64>,
}

impl EventVisitor {
    fn text(&mut self, field: &Field, value: String) {
        let slot = match field.name() {
            "event" => &mut self.event,
            "verdict" => &mut self.verdict,
            "reason" => &mut self.reason,
            "passenger" => &mut self.passenger,
            "name" => &mut self.name,
            "preference" => &mut self.preference,
            "kind" => &mut self.kind,
            _ => return,
        };
        *slot = Some(value);
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.text(field, s.trim_matches('"').to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.text(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        let slot = match field.name() {
            "passengers" => &mut self.passengers,
            "seats" => &mut self.seats,
            "constraints" => &mut self.constraints,
            "passenger_count" => &mut self.passenger_count,
            "seat_count" => &mut self.seat_count,
            "constraint_count" => &mut self.constraint_count,
            "decisions" => &mut self.decisions,
            "backtracks" => &mut self.backtracks,
            "conflicts" => &mut self.conflicts,
            "depth" => &mut self.depth,
            "elapsed_ms" => &mut self.elapsed_ms,
            _ => return,
        };
        *slot = Some(value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "model_built" => format_model_built(v),
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "preference_unsatisfiable" => format_preference(v),
        "search_terminated" => format_terminated(v),
        "backtrack" if level == Level::DEBUG => format_backtrack(v),
        "root_conflict" => format_root_conflict(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_model_built(v: &EventVisitor) -> String {
    format!(
        "{} Model built │ {} passengers │ {} seats │ {} constraints",
        "◆".bright_blue(),
        v.passengers.unwrap_or(0).bright_yellow(),
        v.seats.unwrap_or(0).bright_yellow(),
        v.constraints.unwrap_or(0).bright_yellow(),
    )
}

fn format_solve_start(v: &EventVisitor) -> String {
    format!(
        "{} Solving started │ {} passengers │ {} seats │ {} constraints",
        "▶".bright_green().bold(),
        v.passenger_count.unwrap_or(0).bright_yellow(),
        v.seat_count.unwrap_or(0).bright_yellow(),
        v.constraint_count.unwrap_or(0).bright_yellow(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let verdict = v.verdict.as_deref().unwrap_or("unknown");
    let status = if verdict.starts_with("feasible") {
        verdict.bright_green().bold().to_string()
    } else if verdict.starts_with("infeasible") {
        verdict.bright_red().bold().to_string()
    } else {
        verdict.yellow().bold().to_string()
    };

    format!(
        "{} Solving ended │ {} │ {} decisions │ {} backtracks │ {} conflicts │ {}ms",
        "■".bright_cyan().bold(),
        status,
        v.decisions.unwrap_or(0).white(),
        v.backtracks.unwrap_or(0).white(),
        v.conflicts.unwrap_or(0).white(),
        v.elapsed_ms.unwrap_or(0).yellow(),
    )
}

fn format_preference(v: &EventVisitor) -> String {
    format!(
        "{} {} (passenger {}) wants a {} seat but the layout has none",
        "⚠".bright_yellow().bold(),
        v.name.as_deref().unwrap_or("?").white().bold(),
        v.passenger.as_deref().unwrap_or("?"),
        v.preference.as_deref().unwrap_or("?"),
    )
}

fn format_terminated(v: &EventVisitor) -> String {
    format!(
        "{} Search stopped │ {}",
        "✖".bright_red(),
        v.reason.as_deref().unwrap_or("unknown").yellow(),
    )
}

fn format_root_conflict(v: &EventVisitor) -> String {
    format!(
        "{} Refuted before search │ {} rule",
        "✖".bright_red(),
        v.kind.as_deref().unwrap_or("unknown").yellow(),
    )
}

fn format_backtrack(v: &EventVisitor) -> String {
    format!(
        "{} backtrack │ passenger {} │ depth {}",
        "↩".bright_black(),
        v.passenger.as_deref().unwrap_or("?"),
        v.depth.unwrap_or(0),
    )
}
