pub mod app_config;
pub mod catalog;
pub mod config;
pub mod debounce;
pub mod filter;
pub mod products;
pub mod store;

pub use app_config::AppConfig;
pub use catalog::{Catalog, CatalogError, Taxon};
pub use config::{load_app_config, load_app_config_from_env};
pub use filter::{apply, FilterCriteria};
pub use products::{GalleryImage, Price, Product, ProductImages, SpecList, Stock};
pub use store::{CatalogSource, CatalogStore};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
