use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::products::{Product, SpecList, Stock};

/// A category or brand descriptor from the catalog taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Taxon {
    /// Key referenced by `Product::category` / `Product::brand`, e.g. `"anestesia"`.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// The full in-memory catalog: products plus the category and brand
/// taxonomies. Loaded once at startup and treated as immutable for the
/// session; filtered views are derived, never mutated element-wise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<Taxon>,
    #[serde(default)]
    pub brands: Vec<Taxon>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog validation failed: {0}")]
    Validation(String),
}

impl Catalog {
    /// Parses a catalog from its JSON document form.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the document is not valid JSON or
    /// does not match the catalog shape.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a catalog from a file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read and
    /// [`CatalogError::Parse`] if its contents are not a valid catalog.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// The fixed single-record catalog substituted when loading the real
    /// catalog fails, so the page stays navigable in degraded mode.
    #[must_use]
    pub fn fallback() -> Self {
        Catalog {
            products: vec![Product {
                id: 1,
                code: "VAL-001".to_string(),
                name: "Válvula de Alivio de Presión".to_string(),
                short_description: "Válvula de seguridad para máquinas de anestesia".to_string(),
                full_description: None,
                category: "anestesia".to_string(),
                brand: "drager".to_string(),
                icon: Some("bi-gear-fill".to_string()),
                specifications: SpecList(vec![
                    ("Presión".to_string(), "0-70 cmH2O".to_string()),
                    ("Material".to_string(), "Latón médico".to_string()),
                    ("Compatibilidad".to_string(), "Universal".to_string()),
                ]),
                stock: Stock {
                    available: true,
                    quantity: None,
                    lead_time: None,
                },
                price: None,
                sale_price: None,
                tags: vec![],
                compatibility: vec![],
                images: None,
                featured: true,
                new_product: false,
                on_sale: false,
            }],
            categories: vec![Taxon {
                id: "anestesia".to_string(),
                name: "Anestesia".to_string(),
                icon: None,
                description: None,
            }],
            brands: vec![Taxon {
                id: "drager".to_string(),
                name: "Dräger".to_string(),
                icon: None,
                description: None,
            }],
        }
    }

    /// Looks up a product by numeric id. Ids are unique, so the first match
    /// is the only match.
    #[must_use]
    pub fn product_by_id(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Looks up a product by its human-readable code, e.g. `"VAL-001"`.
    #[must_use]
    pub fn product_by_code(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.code == code)
    }

    /// Advisory integrity check: `id` and `code` must each be unique across
    /// the catalog. Loading does not enforce this; lookup helpers assume
    /// first-match-is-only-match, so duplicates shadow silently.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] naming the first duplicate found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen_ids = HashSet::new();
        let mut seen_codes = HashSet::new();

        for product in &self.products {
            if !seen_ids.insert(product.id) {
                return Err(CatalogError::Validation(format!(
                    "duplicate product id: {}",
                    product.id
                )));
            }
            if !seen_codes.insert(product.code.as_str()) {
                return Err(CatalogError::Validation(format!(
                    "duplicate product code: '{}'",
                    product.code
                )));
            }
        }

        Ok(())
    }
}
