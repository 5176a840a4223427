use crate::products::Product;

/// The page session's filter state. Empty strings mean "unset"; the state is
/// owned by a single controller and reset wholesale by [`FilterCriteria::clear`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub category: String,
    pub brand: String,
    pub search: String,
}

impl FilterCriteria {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.is_empty() && self.brand.is_empty() && self.search.is_empty()
    }

    /// Resets all dimensions at once (the "clear filters" action).
    pub fn clear(&mut self) {
        *self = FilterCriteria::default();
    }

    /// Seeds criteria from URL query pairs, recognizing `category` and
    /// `search`. Other pairs are ignored; repeated keys keep the last value.
    #[must_use]
    pub fn from_query_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut criteria = FilterCriteria::default();
        for (key, value) in pairs {
            match key {
                "category" => criteria.category = value.to_string(),
                "search" => criteria.search = value.to_string(),
                _ => {}
            }
        }
        criteria
    }

    fn matches(&self, product: &Product) -> bool {
        let matches_category = self.category.is_empty() || product.category == self.category;
        let matches_brand = self.brand.is_empty() || product.brand == self.brand;
        matches_category && matches_brand && self.matches_search(product)
    }

    /// Case-insensitive substring match against name, code, short and full
    /// descriptions, and tags. An empty search term matches everything.
    fn matches_search(&self, product: &Product) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        let contains = |text: &str| text.to_lowercase().contains(&term);

        contains(&product.name)
            || contains(&product.code)
            || contains(&product.short_description)
            || product.full_description.as_deref().is_some_and(contains)
            || product.tags.iter().any(|tag| contains(tag))
    }
}

/// Computes the visible subset of `products` under `criteria`.
///
/// Dimensions combine with logical AND; the free-text term matches with OR
/// across fields. Output order is the catalog's insertion order restricted
/// to matches, and the result replaces the previous view wholesale. An empty
/// result is a valid outcome, rendered as a "no results" state rather than
/// an error.
#[must_use]
pub fn apply(criteria: &FilterCriteria, products: &[Product]) -> Vec<Product> {
    products
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::products::{SpecList, Stock};

    fn make_product(id: u64, code: &str, name: &str, category: &str, brand: &str) -> Product {
        Product {
            id,
            code: code.to_string(),
            name: name.to_string(),
            short_description: String::new(),
            full_description: None,
            category: category.to_string(),
            brand: brand.to_string(),
            icon: None,
            specifications: SpecList::default(),
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
            featured: false,
            new_product: false,
            on_sale: false,
        }
    }

    fn sample_products() -> Vec<Product> {
        let mut valve = make_product(
            1,
            "VAL-001",
            "Válvula de Alivio de Presión",
            "anestesia",
            "drager",
        );
        valve.tags = vec!["seguridad".to_string()];
        let sensor = make_product(2, "SEN-014", "Sensor de Oxígeno", "monitoreo", "ge");
        let mut cable = make_product(3, "CAB-220", "Cable de Paciente ECG", "monitoreo", "philips");
        cable.full_description = Some("Cable troncal de 5 derivaciones".to_string());
        vec![valve, sensor, cable]
    }

    #[test]
    fn empty_criteria_returns_full_catalog_in_order() {
        let products = sample_products();
        let filtered = apply(&FilterCriteria::default(), &products);
        let ids: Vec<u64> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn category_filter_includes_matching_products() {
        let products = sample_products();
        let criteria = FilterCriteria {
            category: "monitoreo".to_string(),
            ..FilterCriteria::default()
        };
        let filtered = apply(&criteria, &products);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|p| p.category == "monitoreo"));
    }

    #[test]
    fn unknown_category_yields_empty_result() {
        let products = sample_products();
        let criteria = FilterCriteria {
            category: "laparoscopia".to_string(),
            ..FilterCriteria::default()
        };
        assert!(apply(&criteria, &products).is_empty());
    }

    #[test]
    fn brand_filter_is_exact_match() {
        let products = sample_products();
        let criteria = FilterCriteria {
            brand: "drager".to_string(),
            ..FilterCriteria::default()
        };
        let filtered = apply(&criteria, &products);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].code, "VAL-001");

        // Near-miss brand keys do not match.
        let criteria = FilterCriteria {
            brand: "dräger-other".to_string(),
            ..FilterCriteria::default()
        };
        assert!(apply(&criteria, &products).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let products = sample_products();

        // Name substring, different case.
        let criteria = FilterCriteria {
            search: "ALIVIO".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(apply(&criteria, &products).len(), 1);

        // Tag match.
        let criteria = FilterCriteria {
            search: "seguridad".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(apply(&criteria, &products)[0].code, "VAL-001");

        // Code match.
        let criteria = FilterCriteria {
            search: "sen-0".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(apply(&criteria, &products)[0].id, 2);

        // Full-description match.
        let criteria = FilterCriteria {
            search: "troncal".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(apply(&criteria, &products)[0].id, 3);

        // No match anywhere.
        let criteria = FilterCriteria {
            search: "xyz123".to_string(),
            ..FilterCriteria::default()
        };
        assert!(apply(&criteria, &products).is_empty());
    }

    #[test]
    fn dimensions_combine_with_logical_and() {
        let products = sample_products();
        let criteria = FilterCriteria {
            category: "monitoreo".to_string(),
            brand: "ge".to_string(),
            search: "oxígeno".to_string(),
        };
        let filtered = apply(&criteria, &products);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].code, "SEN-014");

        // Same category and search, wrong brand: AND fails.
        let criteria = FilterCriteria {
            brand: "philips".to_string(),
            ..criteria
        };
        assert!(apply(&criteria, &products).is_empty());
    }

    #[test]
    fn apply_is_idempotent_on_unchanged_catalog() {
        let products = sample_products();
        let criteria = FilterCriteria {
            search: "de".to_string(),
            ..FilterCriteria::default()
        };
        let first: Vec<u64> = apply(&criteria, &products).iter().map(|p| p.id).collect();
        let second: Vec<u64> = apply(&criteria, &products).iter().map(|p| p.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn from_query_pairs_recognizes_category_and_search() {
        let criteria = FilterCriteria::from_query_pairs(vec![
            ("category", "anestesia"),
            ("utm_source", "mailing"),
            ("search", "válvula"),
        ]);
        assert_eq!(criteria.category, "anestesia");
        assert_eq!(criteria.search, "válvula");
        assert!(criteria.brand.is_empty());
    }

    #[test]
    fn clear_resets_all_dimensions() {
        let mut criteria = FilterCriteria {
            category: "anestesia".to_string(),
            brand: "drager".to_string(),
            search: "válvula".to_string(),
        };
        criteria.clear();
        assert!(criteria.is_empty());
    }

    #[test]
    fn end_to_end_anestesia_scenario() {
        let catalog = Catalog::fallback();
        let mut criteria = FilterCriteria {
            category: "anestesia".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(apply(&criteria, &catalog.products).len(), 1);

        criteria.brand = "dräger-other".to_string();
        assert_eq!(apply(&criteria, &catalog.products).len(), 0);
    }
}
