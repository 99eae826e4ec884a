//! Console output for seeding runs.
//!
//! Provides a `tracing` layer that prints one line per pipeline event.
//! Enabled with the `console` feature.

use std::io::{self, Write};
use std::sync::OnceLock;

use seedforge_config::{SeedConfig, DEFAULT_LOG_FILTER};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes console output with the default filter.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with(&SeedConfig::default());
}

/// Initializes console output using the config's log filter.
///
/// Only the first call across `init` and `init_with` has effect. If another
/// global subscriber is already installed, this is a no-op.
pub fn init_with(config: &SeedConfig) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_new(config.log_filter())
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SeedConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats seeding events.
pub struct SeedConsoleLayer;

impl<S: Subscriber> Layer<S> for SeedConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        if !metadata.target().starts_with("seedforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_seed_event(*metadata.level(), &visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    shape: Option<String>,
    id: Option<String>,
    error: Option<String>,
    field: Option<String>,
    record_count: Option<u64>,
    row_count: Option<u64>,
    index: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "record_count" => self.record_count = Some(value),
            "row_count" => self.row_count = Some(value),
            "index" => self.index = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "shape" => self.shape = Some(value.to_string()),
            "id" => self.id = Some(value.to_string()),
            "error" => self.error = Some(value.to_string()),
            "field" => self.field = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_seed_event(level: Level, v: &EventVisitor) -> String {
    let shape = v.shape.as_deref().unwrap_or("?");
    let body = match v.event.as_deref() {
        Some("seed_start") => format!(
            "seeding {} record(s) into {}",
            v.record_count.unwrap_or(0),
            shape
        ),
        Some("seed_end") => format!("seeded {} row(s) into {}", v.row_count.unwrap_or(0), shape),
        Some("seed_skip") => format!(
            "skipped record {} for {}: {}",
            v.index.unwrap_or(0),
            shape,
            v.error.as_deref().unwrap_or("unknown error")
        ),
        Some("seed_row") => format!("{} -> {}", shape, v.id.as_deref().unwrap_or("?")),
        Some("unmatched_field") => format!(
            "{} has no field `{}`, ignored",
            shape,
            v.field.as_deref().unwrap_or("?")
        ),
        _ => return String::new(),
    };

    format!("{} {:>5} [SeedForge] {}", timestamp(), level, body)
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(event: &str) -> EventVisitor {
        EventVisitor {
            event: Some(event.to_string()),
            shape: Some("app::Foo".to_string()),
            ..EventVisitor::default()
        }
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init_with(&SeedConfig::default().with_log_filter("seedforge=debug"));
        assert!(INIT.get().is_some());
    }

    #[test]
    fn test_format_start_and_end() {
        let mut v = visitor("seed_start");
        v.record_count = Some(3);
        assert!(format_seed_event(Level::INFO, &v).ends_with("seeding 3 record(s) into app::Foo"));

        let mut v = visitor("seed_end");
        v.row_count = Some(2);
        assert!(format_seed_event(Level::INFO, &v).ends_with("seeded 2 row(s) into app::Foo"));
    }

    #[test]
    fn test_format_skip() {
        let mut v = visitor("seed_skip");
        v.index = Some(1);
        v.error = Some("boom".to_string());
        let line = format_seed_event(Level::WARN, &v);
        assert!(line.contains("WARN"));
        assert!(line.ends_with("skipped record 1 for app::Foo: boom"));
    }

    #[test]
    fn test_unknown_event_is_silent() {
        assert!(format_seed_event(Level::INFO, &visitor("other")).is_empty());
        assert!(format_seed_event(Level::INFO, &EventVisitor::default()).is_empty());
    }
}
