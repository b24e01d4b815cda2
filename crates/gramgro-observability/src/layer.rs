//! Forward `tracing` events into a [`SessionLogger`].
//!
//! The commerce crate reports ignored actions with `tracing` events. This
//! layer turns each event into a session log entry so it lands in the same
//! stream as dispatch records.

use std::collections::BTreeMap;
use std::fmt;

use tracing::field::{Field, Visit};
use tracing::subscriber::Interest;
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::Layer;

use crate::logging::{LogLevel, SessionLogger};

/// Layer writing every enabled event through a session logger.
#[derive(Debug, Clone)]
pub struct SessionLayer {
    logger: SessionLogger,
}

impl SessionLayer {
    pub fn new(logger: SessionLogger) -> Self {
        Self { logger }
    }
}

impl<S: Subscriber> Layer<S> for SessionLayer {
    // Decided per event by `enabled`.
    fn register_callsite(&self, _metadata: &'static Metadata<'static>) -> Interest {
        Interest::sometimes()
    }

    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        self.logger.enabled(level_of(metadata.level()))
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        visitor
            .fields
            .insert("target".to_string(), serde_json::json!(metadata.target()));
        self.logger
            .log(level_of(metadata.level()), &visitor.message, visitor.fields);
    }
}

/// Install a global subscriber that sends `tracing` events to `logger`.
///
/// Fails if a global subscriber is already set.
pub fn install_tracing(logger: SessionLogger) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(SessionLayer::new(logger))
        .try_init()
}

fn level_of(level: &Level) -> LogLevel {
    match *level {
        Level::TRACE => LogLevel::Trace,
        Level::DEBUG => LogLevel::Debug,
        Level::INFO => LogLevel::Info,
        Level::WARN => LogLevel::Warn,
        Level::ERROR => LogLevel::Error,
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields
                .insert(field.name().to_string(), serde_json::json!(value));
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let text = format!("{:?}", value);
        if field.name() == "message" {
            self.message = text;
        } else {
            self.fields
                .insert(field.name().to_string(), serde_json::json!(text));
        }
    }
}
