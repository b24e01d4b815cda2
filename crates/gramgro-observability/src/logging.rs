//! Structured logging with session context.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use gramgro_commerce::config::LoggingConfig;
use gramgro_commerce::state::{Action, View};
use gramgro_commerce::SessionId;
use serde::Serialize;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Log level.
    pub level: LogLevel,
    /// Log message.
    pub message: String,
    /// Session ID for correlation.
    pub session_id: String,
    /// Active view when the entry was written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
    /// Position of this entry within the session.
    pub seq: u64,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}] #{} {}", self.level, self.seq, self.message);

        if let Some(view) = &self.view {
            s.push_str(&format!(" (view={})", view));
        }

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            s.push_str(&fields.join(" "));
        }

        s
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

impl LogFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "human" | "text" => Some(Self::Human),
            _ => None,
        }
    }
}

/// Destination for formatted log lines.
#[derive(Clone)]
pub struct LogWriter(Arc<dyn Fn(LogLevel, &str) + Send + Sync>);

impl LogWriter {
    pub fn new(write: impl Fn(LogLevel, &str) + Send + Sync + 'static) -> Self {
        Self(Arc::new(write))
    }

    /// Write every line to stderr.
    pub fn stderr() -> Self {
        Self::new(|_, line| eprintln!("{}", line))
    }

    /// Collect lines in memory.
    pub fn capture() -> (Self, CapturedLines) {
        let lines = CapturedLines::default();
        let sink = lines.clone();
        let writer = Self::new(move |_, line| sink.push(line.to_string()));
        (writer, lines)
    }

    fn write(&self, level: LogLevel, line: &str) {
        (self.0)(level, line)
    }
}

impl Default for LogWriter {
    fn default() -> Self {
        Self::stderr()
    }
}

impl fmt::Debug for LogWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LogWriter")
    }
}

/// Lines gathered by [`LogWriter::capture`].
#[derive(Debug, Clone, Default)]
pub struct CapturedLines(Arc<Mutex<Vec<String>>>);

impl CapturedLines {
    fn push(&self, line: String) {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).push(line);
    }

    /// Snapshot of the lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

/// Structured logger with session context.
///
/// Clones share the entry sequence counter, so entries from every clone
/// of one session are totally ordered.
#[derive(Debug, Clone)]
pub struct SessionLogger {
    session_id: SessionId,
    view: Option<View>,
    min_level: LogLevel,
    format: LogFormat,
    writer: LogWriter,
    seq: Arc<AtomicU64>,
}

impl SessionLogger {
    /// Create a new logger for a session.
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            view: None,
            min_level: LogLevel::Info,
            format: LogFormat::Json,
            writer: LogWriter::default(),
            seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Create a logger configured from the `[logging]` section.
    ///
    /// Unrecognised values fall back to the defaults.
    pub fn from_config(session_id: SessionId, config: &LoggingConfig) -> Self {
        let mut logger = Self::new(session_id);
        if let Some(level) = LogLevel::parse(&config.min_level) {
            logger = logger.with_min_level(level);
        }
        if let Some(format) = LogFormat::parse(&config.format) {
            logger = logger.with_format(format);
        }
        logger
    }

    /// Set the active view.
    pub fn with_view(mut self, view: View) -> Self {
        self.view = Some(view);
        self
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set where lines are written.
    pub fn with_writer(mut self, writer: LogWriter) -> Self {
        self.writer = writer;
        self
    }

    /// Log at debug level.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, BTreeMap::new());
    }

    /// Log at info level.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, BTreeMap::new());
    }

    /// Log at error level with fields.
    pub fn error_with(&self, message: &str, fields: &[(&str, &dyn fmt::Display)]) {
        let fields = fields
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::json!(v.to_string())))
            .collect();
        self.log(LogLevel::Error, message, fields);
    }

    /// Record a dispatched action and whether it changed state.
    ///
    /// Actions that change nothing are logged at debug level.
    pub fn action(&self, action: &Action, changed: bool) {
        let level = if changed { LogLevel::Info } else { LogLevel::Debug };
        let mut builder = LogBuilder::new(self, level, "dispatch")
            .field("action", action.name())
            .field_bool("changed", changed);
        if let Some(id) = action.product_id() {
            builder = builder.field("product_id", id.as_str());
        }
        builder.emit();
    }

    /// Whether entries at `level` are written.
    pub(crate) fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    pub(crate) fn log(
        &self,
        level: LogLevel,
        message: &str,
        fields: BTreeMap<String, serde_json::Value>,
    ) {
        if !self.enabled(level) {
            return;
        }

        let entry = LogEntry {
            level,
            message: message.to_string(),
            session_id: self.session_id.to_string(),
            view: self.view.map(|v| v.to_string()),
            seq: self.seq.fetch_add(1, Ordering::Relaxed),
            fields,
        };

        let output = match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        };

        self.writer.write(level, &output);
    }

}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a SessionLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    /// Create a new log builder.
    pub fn new(logger: &'a SessionLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an unsigned integer field.
    pub fn field_u64(mut self, key: &str, value: u64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a boolean field.
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

impl SessionLogger {
    /// Start building an info log entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start building a warn log entry.
    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }
}
