//! The immutable product catalog.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;

const BUILTIN_CATALOG: &str = include_str!("../../data/products.json");

/// Ordered, read-only product list.
///
/// Cloning is cheap: clones share the same backing list. There is no way to
/// mutate a catalog after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate or blank ids and blank titles.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        validate(&products)?;
        Ok(Self {
            products: Arc::new(products),
        })
    }

    /// Parse a catalog from a JSON array of product records.
    pub fn from_json_str(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Read and parse a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| CommerceError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    /// The catalog bundled with the crate.
    pub fn builtin() -> Result<Self, CommerceError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn validate(products: &[Product]) -> Result<(), CommerceError> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if product.id.is_empty() {
            return Err(CommerceError::InvalidProduct {
                id: String::new(),
                reason: "empty id".to_string(),
            });
        }
        if product.title.trim().is_empty() {
            return Err(CommerceError::InvalidProduct {
                id: product.id.to_string(),
                reason: "empty title".to_string(),
            });
        }
        if !seen.insert(&product.id) {
            return Err(CommerceError::DuplicateProduct(product.id.to_string()));
        }
    }
    Ok(())
}
