//! Catalog loading with silent degradation.
//!
//! The store fetches the catalog document once at startup. On any failure
//! (network, non-2xx status, unreadable file, malformed JSON) it substitutes
//! the fixed fallback catalog so the page remains navigable, logging the
//! error at `warn` instead of propagating it. Degraded mode is observable
//! through [`CatalogStore::fallback_active`].

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;

use crate::catalog::{Catalog, CatalogError};
use crate::products::Product;

/// Where the catalog document lives.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    Url(String),
    File(PathBuf),
}

/// The loaded catalog plus whether the fallback record set is active.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    catalog: Catalog,
    fallback_active: bool,
}

impl CatalogStore {
    /// Loads the catalog from `source`. Never fails: any error degrades to
    /// the fallback catalog (availability over correctness).
    pub async fn load(source: &CatalogSource, timeout_secs: u64, user_agent: &str) -> Self {
        match Self::try_load(source, timeout_secs, user_agent).await {
            Ok(catalog) => {
                tracing::info!(
                    products = catalog.products.len(),
                    categories = catalog.categories.len(),
                    brands = catalog.brands.len(),
                    "catalog loaded"
                );
                CatalogStore {
                    catalog,
                    fallback_active: false,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "catalog load failed, using fallback record set");
                CatalogStore {
                    catalog: Catalog::fallback(),
                    fallback_active: true,
                }
            }
        }
    }

    /// Wraps an already-parsed catalog, e.g. for tests or embedded data.
    #[must_use]
    pub fn from_catalog(catalog: Catalog) -> Self {
        CatalogStore {
            catalog,
            fallback_active: false,
        }
    }

    async fn try_load(
        source: &CatalogSource,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Catalog, CatalogError> {
        match source {
            CatalogSource::File(path) => Catalog::from_file(path),
            CatalogSource::Url(url) => {
                let client = Client::builder()
                    .timeout(Duration::from_secs(timeout_secs))
                    .connect_timeout(Duration::from_secs(10))
                    .user_agent(user_agent)
                    .build()?;
                let response = client.get(url).send().await?;
                let response = response.error_for_status()?;
                let body = response.text().await?;
                Catalog::from_json(&body)
            }
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.catalog.products
    }

    /// `true` when the real catalog could not be loaded and the fixed
    /// fallback record set is being served instead.
    #[must_use]
    pub fn fallback_active(&self) -> bool {
        self.fallback_active
    }
}
