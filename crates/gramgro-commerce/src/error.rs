//! Commerce error types.

use thiserror::Error;

/// Errors raised where data enters the storefront.
///
/// Cart, filter and routing operations are total and never fail; only
/// catalog loading and configuration parsing can.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Catalog JSON could not be parsed.
    #[error("Catalog parse error: {0}")]
    CatalogParse(String),

    /// Two catalog records share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    /// A catalog record failed validation.
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: String, reason: String },

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading a catalog or config file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// A serialized cart broke a cart invariant.
    #[error("Invalid cart: {0}")]
    InvalidCart(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::CatalogParse(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::Config(e.to_string())
    }
}

impl From<std::io::Error> for CommerceError {
    fn from(e: std::io::Error) -> Self {
        CommerceError::Io(e.to_string())
    }
}
