use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A spare part for medical equipment, as it appears in the catalog document.
///
/// Field names follow the catalog JSON (camelCase). `category` and `brand`
/// are string keys into the catalog taxonomy; they are not cross-checked
/// against the taxonomy lists at parse time. That invariant is advisory and
/// enforced only by [`crate::Catalog::validate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique numeric identifier, stable across sessions.
    pub id: u64,
    /// Unique human-readable identifier used in quotes, e.g. `"VAL-001"`.
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub full_description: Option<String>,
    pub category: String,
    pub brand: String,
    /// Icon class shown when the product carries no photo, e.g. `"bi-gear-fill"`.
    #[serde(default, rename = "image")]
    pub icon: Option<String>,
    /// Technical specifications in document order; the first three are shown
    /// on the grid card, the rest only in the detail view.
    #[serde(default)]
    pub specifications: SpecList,
    pub stock: Stock,
    #[serde(default)]
    pub price: Option<Price>,
    /// Only meaningful when `on_sale` is set and the price is displayable.
    #[serde(default)]
    pub sale_price: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub compatibility: Vec<String>,
    #[serde(default)]
    pub images: Option<ProductImages>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub new_product: bool,
    #[serde(default)]
    pub on_sale: bool,
}

impl Product {
    /// Resolves the product photo by priority: `images.main`, then the first
    /// gallery entry, then `images.thumbnail`. Returns `None` when no photo
    /// is configured, in which case callers fall back to the icon.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        let images = self.images.as_ref()?;
        if let Some(main) = images.main.as_deref() {
            return Some(main);
        }
        if let Some(first) = images.gallery.first() {
            return Some(&first.url);
        }
        images.thumbnail.as_deref()
    }

    /// Returns `true` if the price should be displayed to visitors.
    #[must_use]
    pub fn has_visible_price(&self) -> bool {
        self.price.as_ref().is_some_and(|p| p.show_price)
    }

    /// Returns the discounted price when the product is on sale and its price
    /// is displayable.
    #[must_use]
    pub fn active_sale_price(&self) -> Option<f64> {
        if self.on_sale && self.has_visible_price() {
            self.sale_price
        } else {
            None
        }
    }

    /// Short description with a fallback to the full description, for the
    /// grid card.
    #[must_use]
    pub fn card_description(&self) -> &str {
        if self.short_description.is_empty() {
            self.full_description.as_deref().unwrap_or("")
        } else {
            &self.short_description
        }
    }
}

/// Stock information for a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub available: bool,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub lead_time: Option<String>,
}

/// List price. `show_price` gates whether the amount is rendered at all;
/// hidden prices surface as "quote on request" in the detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub amount: f64,
    pub currency: String,
    pub show_price: bool,
}

/// Product photo set. All parts are optional; resolution priority is
/// main → first gallery entry → thumbnail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductImages {
    #[serde(default)]
    pub main: Option<String>,
    #[serde(default)]
    pub gallery: Vec<GalleryImage>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryImage {
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Ordered label → value specification pairs.
///
/// The catalog document stores specifications as a JSON object whose entry
/// order is display-significant, so this deserializes through a map visitor
/// (which streams entries in document order) instead of a `HashMap`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecList(pub Vec<(String, String)>);

impl SpecList {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, String)> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a SpecList {
    type Item = &'a (String, String);
    type IntoIter = std::slice::Iter<'a, (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for SpecList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, value) in &self.0 {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SpecList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpecVisitor;

        impl<'de> Visitor<'de> for SpecVisitor {
            type Value = SpecList;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of specification labels to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, value)) = access.next_entry::<String, String>()? {
                    entries.push((label, value));
                }
                Ok(SpecList(entries))
            }
        }

        deserializer.deserialize_map(SpecVisitor)
    }
}
