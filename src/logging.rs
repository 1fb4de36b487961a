//! Browser Console Logging
//!
//! A tracing layer that formats each event as one line and hands it to the
//! browser console at the matching severity.

use std::fmt::Write as _;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

type Sink = Arc<dyn Fn(Level, &str) + Send + Sync>;

pub struct ConsoleLayer {
    sink: Sink,
}

impl ConsoleLayer {
    /// Layer writing to `console.error` / `warn` / `info` / `log` / `debug`
    pub fn console() -> Self {
        Self::with_sink(write_console)
    }

    pub fn with_sink(sink: impl Fn(Level, &str) + Send + Sync + 'static) -> Self {
        Self { sink: Arc::new(sink) }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let line = format!("[{} {}] {}{}", meta.level(), meta.target(), visitor.message, visitor.fields);
        (self.sink)(*meta.level(), &line);
    }
}

/// Collects `message` separately from the structured `key=value` fields
#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

fn write_console(level: Level, line: &str) {
    let line = line.into();
    match level {
        Level::ERROR => web_sys::console::error_1(&line),
        Level::WARN => web_sys::console::warn_1(&line),
        Level::INFO => web_sys::console::info_1(&line),
        Level::DEBUG => web_sys::console::log_1(&line),
        Level::TRACE => web_sys::console::debug_1(&line),
    }
}

/// Install the console layer as the global subscriber. Safe to call twice;
/// the second call is ignored.
pub fn init(level: Level) {
    let result = tracing_subscriber::registry()
        .with(LevelFilter::from_level(level))
        .with(ConsoleLayer::console())
        .try_init();
    if result.is_err() {
        tracing::debug!("logging already initialised");
    }
}
