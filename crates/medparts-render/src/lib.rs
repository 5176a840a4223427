//! Pure projection of catalog data into display view-models.
//!
//! Nothing in this crate touches a rendering platform: products go in, typed
//! view trees come out, and the platform-specific mount step (a browser DOM
//! adapter, or the plain-text writer in [`text`]) consumes them. This keeps
//! the projection snapshot-testable and free of markup-injection hazards.

pub mod highlight;
pub mod text;
pub mod view;

pub use highlight::{highlight, Span};
pub use view::{
    catalog_stats, grid_view, product_card, product_detail, Badge, CatalogStats, GridView,
    ImageRef, PriceView, ProductCard, ProductDetail, StockView,
};
