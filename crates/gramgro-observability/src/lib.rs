//! Structured session logging for the GramGro storefront.
//!
//! This crate provides:
//! - `SessionLogger` - Structured logging with session and view context
//! - `LogBuilder` - Fluent construction of entries with typed fields
//! - `LogWriter` - Where formatted lines go (stderr, browser console, tests)
//! - `SessionLayer` - Routes `tracing` events into the session log

mod layer;
mod logging;

pub use layer::{install_tracing, SessionLayer};
pub use logging::*;

// Re-export SessionId from the commerce crate for convenience
pub use gramgro_commerce::SessionId;
