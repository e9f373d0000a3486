//! Colorful console output for the tour search.
//!
//! Provides a custom `tracing` layer that formats search events with colors.
//! Everything is written to stderr; stdout belongs to the caller.
//!
//! ## Log Levels
//!
//! - **ERROR**: A search that could not run
//! - **INFO**: Search start and end with counters
//! - **DEBUG**: Each improvement of the best tour

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn,tourforge_solver=info";

/// Initializes console logging.
///
/// Safe to call multiple times - only the first call has effect.
/// Honors `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SearchConsoleLayer)
            .try_init();
    });
}

fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

/// A tracing layer that formats search events with colors.
pub struct SearchConsoleLayer;

impl<S: Subscriber> Layer<S> for SearchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("tourforge_") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    fork_policy: Option<String>,
    error: Option<String>,
    city_count: Option<u64>,
    thread_count: Option<u64>,
    initial_cost: Option<u64>,
    cost: Option<u64>,
    nodes: Option<u64>,
    pruned: Option<u64>,
    leaves: Option<u64>,
    improvements: Option<u64>,
    tasks_forked: Option<u64>,
    duration_ms: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "fork_policy" => self.fork_policy = Some(s.trim_matches('"').to_string()),
            "error" => self.error = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "city_count" => self.city_count = Some(value),
            "thread_count" => self.thread_count = Some(value),
            "initial_cost" => self.initial_cost = Some(value),
            "cost" => self.cost = Some(value),
            "nodes" => self.nodes = Some(value),
            "pruned" => self.pruned = Some(value),
            "leaves" => self.leaves = Some(value),
            "improvements" => self.improvements = Some(value),
            "tasks_forked" => self.tasks_forked = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "fork_policy" => self.fork_policy = Some(value.to_string()),
            "error" => self.error = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "new_best" => format_new_best(v),
        "solve_end" => format_solve_end(v),
        "solve_failed" => format_solve_failed(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_count(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let cities = v.city_count.unwrap_or(0);
    let threads = v.thread_count.unwrap_or(0);
    let policy = v.fork_policy.as_deref().unwrap_or("Unknown");
    let initial = v.initial_cost.unwrap_or(0);

    format!(
        "{} {} Searching │ {} cities │ {} threads │ {} │ initial cost {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        format_count(cities).bright_yellow(),
        format_count(threads).bright_yellow(),
        policy.white().bold(),
        format_count(initial).bright_magenta()
    )
}

fn format_new_best(v: &EventVisitor) -> String {
    let cost = v.cost.unwrap_or(0);

    format!(
        "{} {} New best │ cost {}",
        format_elapsed(),
        "★".bright_yellow(),
        format_count(cost).bright_green().bold()
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let cost = v.cost.unwrap_or(0);
    let nodes = v.nodes.unwrap_or(0);
    let pruned = v.pruned.unwrap_or(0);
    let leaves = v.leaves.unwrap_or(0);
    let improvements = v.improvements.unwrap_or(0);
    let forked = v.tasks_forked.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    format!(
        "{} {} Search complete │ cost {} │ {} │ {} nodes │ {} pruned │ {} leaves │ {} improvements │ {} tasks",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_count(cost).bright_green().bold(),
        format_duration_ms(duration).yellow(),
        format_count(nodes).white(),
        format_count(pruned).white(),
        format_count(leaves).white(),
        format_count(improvements).bright_magenta(),
        format_count(forked).white()
    )
}

fn format_solve_failed(v: &EventVisitor) -> String {
    let error = v.error.as_deref().unwrap_or("unknown error");

    format!(
        "{} {} Search failed │ {}",
        format_elapsed(),
        "✗".bright_red().bold(),
        error.bright_red()
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
