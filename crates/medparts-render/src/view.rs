use std::collections::HashSet;

use serde::Serialize;

use medparts_core::products::Product;

use crate::highlight::{highlight, Span};

/// Number of specifications shown on a grid card; the detail view is unbounded.
const CARD_SPEC_LIMIT: usize = 3;

/// Icon used when a product has neither photos nor its own icon class.
const DEFAULT_ICON: &str = "bi-gear-fill";

/// Resolved product visual: a photo URL or an icon class fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ImageRef {
    Url(String),
    Icon(String),
}

impl ImageRef {
    fn resolve(product: &Product) -> Self {
        match product.primary_image() {
            Some(url) => ImageRef::Url(url.to_string()),
            None => ImageRef::Icon(
                product
                    .icon
                    .clone()
                    .unwrap_or_else(|| DEFAULT_ICON.to_string()),
            ),
        }
    }
}

/// Display badges. Stock state always contributes one badge; the three
/// product flags are independent, so up to four may render at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Badge {
    InStock,
    ConsultStock,
    Featured,
    New,
    OnSale,
}

impl Badge {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Badge::InStock => "En Stock",
            Badge::ConsultStock => "Consultar",
            Badge::Featured => "Destacado",
            Badge::New => "Nuevo",
            Badge::OnSale => "Oferta",
        }
    }
}

/// The three user-visible pricing states, plus `Hidden` for products with no
/// price record at all (grid cards simply omit the price block).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PriceView {
    Hidden,
    QuoteOnRequest,
    Listed {
        amount: f64,
        currency: String,
    },
    /// Discounted price with the original struck through.
    Discounted {
        original: f64,
        sale: f64,
        currency: String,
    },
}

impl PriceView {
    fn resolve(product: &Product) -> Self {
        let Some(price) = &product.price else {
            return PriceView::Hidden;
        };
        if !price.show_price {
            return PriceView::QuoteOnRequest;
        }
        match product.active_sale_price() {
            Some(sale) => PriceView::Discounted {
                original: price.amount,
                sale,
                currency: price.currency.clone(),
            },
            None => PriceView::Listed {
                amount: price.amount,
                currency: price.currency.clone(),
            },
        }
    }
}

/// Stock detail for the detail view: available with a known quantity,
/// available with unspecified quantity, or unavailable (consult).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StockView {
    Available { quantity: Option<u32> },
    Unavailable,
}

/// One grid card. Name and code carry highlight spans for the active search
/// term; specifications are truncated to the first three.
#[derive(Debug, Clone, Serialize)]
pub struct ProductCard {
    pub id: u64,
    pub code: Vec<Span>,
    pub name: Vec<Span>,
    pub description: String,
    pub category: String,
    pub image: ImageRef,
    pub badges: Vec<Badge>,
    pub price: PriceView,
    pub specifications: Vec<(String, String)>,
}

/// The expanded detail (modal) view: unbounded specifications, compatibility,
/// tags, pricing state, and stock detail.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
    pub id: u64,
    pub code: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub brand: String,
    pub image: ImageRef,
    pub badges: Vec<Badge>,
    pub price: PriceView,
    pub stock: StockView,
    pub lead_time: Option<String>,
    pub specifications: Vec<(String, String)>,
    pub compatibility: Vec<String>,
    pub tags: Vec<String>,
}

/// The rendered grid. An empty filtered set is a distinct state, not an error.
#[derive(Debug, Clone, Serialize)]
pub enum GridView {
    Products(Vec<ProductCard>),
    NoResults,
}

/// Display-side counters derived from the current filtered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub available: usize,
    pub distinct_brands: usize,
}

fn flag_badges(product: &Product) -> Vec<Badge> {
    let mut badges = Vec::new();
    if product.featured {
        badges.push(Badge::Featured);
    }
    if product.new_product {
        badges.push(Badge::New);
    }
    if product.on_sale {
        badges.push(Badge::OnSale);
    }
    badges
}

/// Projects one product into its grid card, highlighting `search_term` in
/// the name and code.
#[must_use]
pub fn product_card(product: &Product, search_term: &str) -> ProductCard {
    let mut badges = vec![if product.stock.available {
        Badge::InStock
    } else {
        Badge::ConsultStock
    }];
    badges.extend(flag_badges(product));

    ProductCard {
        id: product.id,
        code: highlight(&product.code, search_term),
        name: highlight(&product.name, search_term),
        description: product.card_description().to_string(),
        category: product.category.clone(),
        image: ImageRef::resolve(product),
        badges,
        price: PriceView::resolve(product),
        specifications: product
            .specifications
            .iter()
            .take(CARD_SPEC_LIMIT)
            .cloned()
            .collect(),
    }
}

/// Projects a filtered product list into the grid view.
#[must_use]
pub fn grid_view(products: &[Product], search_term: &str) -> GridView {
    if products.is_empty() {
        return GridView::NoResults;
    }
    GridView::Products(
        products
            .iter()
            .map(|p| product_card(p, search_term))
            .collect(),
    )
}

/// Projects one product into the full detail view.
#[must_use]
pub fn product_detail(product: &Product) -> ProductDetail {
    let description = product
        .full_description
        .clone()
        .unwrap_or_else(|| product.short_description.clone());

    ProductDetail {
        id: product.id,
        code: product.code.clone(),
        name: product.name.clone(),
        description,
        category: product.category.clone(),
        brand: product.brand.clone(),
        image: ImageRef::resolve(product),
        badges: flag_badges(product),
        price: PriceView::resolve(product),
        stock: if product.stock.available {
            StockView::Available {
                quantity: product.stock.quantity,
            }
        } else {
            StockView::Unavailable
        },
        lead_time: product.stock.lead_time.clone(),
        specifications: product.specifications.iter().cloned().collect(),
        compatibility: product.compatibility.clone(),
        tags: product.tags.clone(),
    }
}

/// Derives the total, available, and distinct-brand counters from the
/// current filtered set. Purely a display side effect.
#[must_use]
pub fn catalog_stats(products: &[Product]) -> CatalogStats {
    let brands: HashSet<&str> = products.iter().map(|p| p.brand.as_str()).collect();
    CatalogStats {
        total: products.len(),
        available: products.iter().filter(|p| p.stock.available).count(),
        distinct_brands: brands.len(),
    }
}
