//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes keeps a product key from being passed where a session
//! key is expected, and vice versa.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the ID is the empty string.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(SessionId);

impl SessionId {
    /// Allocate the next session ID for this process.
    ///
    /// Counter based so it works on `wasm32-unknown-unknown`, where the
    /// system clock is unavailable.
    pub fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};

        static COUNTER: AtomicU64 = AtomicU64::new(1);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(format!("session-{n}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("p-101");
        assert_eq!(id.as_str(), "p-101");
        assert!(!id.is_empty());
    }

    #[test]
    fn test_id_from_string() {
        let id: ProductId = "p-202".into();
        assert_eq!(id.as_str(), "p-202");
    }

    #[test]
    fn test_id_display() {
        let id = ProductId::new("p-303");
        assert_eq!(format!("{}", id), "p-303");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("p-404");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"p-404\"");
    }

    #[test]
    fn test_session_ids_are_distinct() {
        let a = SessionId::next();
        let b = SessionId::next();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("session-"));
    }
}
