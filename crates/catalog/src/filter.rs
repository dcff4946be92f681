//! Client-side catalog queries: the storefront filter predicate and the
//! derived inventory aggregates shown on the admin dashboard.
//!
//! These are pure functions over a listed catalog snapshot:
//! - No IO
//! - No panics
//! - No storage access

use crate::Product;

/// Stock level below which a product counts as "low stock".
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Storefront filter.
///
/// The default filter matches every product; callers narrow it field by
/// field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    /// Case-insensitive substring match against name and description.
    pub search: String,
    /// Exact category match when set.
    pub category: Option<String>,
    /// Inclusive price range.
    pub min_price: u64,
    pub max_price: u64,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            min_price: 0,
            max_price: u64::MAX,
        }
    }
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        let search = self.search.to_lowercase();
        let matches_search = search.is_empty()
            || product.name.to_lowercase().contains(&search)
            || product.description.to_lowercase().contains(&search);

        let matches_category = match &self.category {
            Some(category) => product.category == *category,
            None => true,
        };

        let matches_price = product.price >= self.min_price && product.price <= self.max_price;

        matches_search && matches_category && matches_price
    }
}

/// Apply `filter` to a catalog snapshot, preserving storage order.
pub fn filter_products<'a>(products: &'a [Product], filter: &ProductFilter) -> Vec<&'a Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}

/// Total inventory value: Σ price × quantity.
///
/// Saturates at `u64::MAX` so an extreme stored price cannot make the
/// dashboard aggregate panic.
pub fn inventory_value(products: &[Product]) -> u64 {
    products.iter().fold(0u64, |total, p| {
        total.saturating_add(p.price.saturating_mul(u64::from(p.quantity)))
    })
}

/// Number of products with stock below [`LOW_STOCK_THRESHOLD`].
pub fn low_stock_count(products: &[Product]) -> usize {
    products
        .iter()
        .filter(|p| p.quantity < LOW_STOCK_THRESHOLD)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sugarrush_core::ProductId;

    fn catalog() -> Vec<Product> {
        vec![
            Product {
                id: ProductId::new("1"),
                name: "Rainbow Gummy Bears".to_string(),
                category: "Gummies".to_string(),
                price: 399,
                quantity: 50,
                description: "Classic chewy gummy bears.".to_string(),
                image_url: None,
            },
            Product {
                id: ProductId::new("2"),
                name: "Dark Chocolate Truffles".to_string(),
                category: "Chocolates".to_string(),
                price: 999,
                quantity: 20,
                description: "Dusted with cocoa powder.".to_string(),
                image_url: None,
            },
            Product {
                id: ProductId::new("3"),
                name: "Salted Caramel Fudge".to_string(),
                category: "Baked Goods".to_string(),
                price: 699,
                quantity: 8,
                description: "Sweet and salty.".to_string(),
                image_url: None,
            },
        ]
    }

    #[test]
    fn default_filter_matches_everything() {
        let catalog = catalog();
        assert_eq!(filter_products(&catalog, &ProductFilter::default()).len(), 3);
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_description() {
        let catalog = catalog();

        let by_name = ProductFilter {
            search: "gummy".to_string(),
            ..ProductFilter::default()
        };
        let hits = filter_products(&catalog, &by_name);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "1");

        let by_description = ProductFilter {
            search: "COCOA".to_string(),
            ..ProductFilter::default()
        };
        let hits = filter_products(&catalog, &by_description);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "2");
    }

    #[test]
    fn category_match_is_exact() {
        let catalog = catalog();
        let filter = ProductFilter {
            category: Some("Gummies".to_string()),
            ..ProductFilter::default()
        };
        assert_eq!(filter_products(&catalog, &filter).len(), 1);

        let filter = ProductFilter {
            category: Some("gummies".to_string()),
            ..ProductFilter::default()
        };
        assert!(filter_products(&catalog, &filter).is_empty());
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let catalog = catalog();
        let filter = ProductFilter {
            min_price: 399,
            max_price: 699,
            ..ProductFilter::default()
        };
        let hits = filter_products(&catalog, &filter);
        let ids: Vec<_> = hits.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn filters_compose() {
        let catalog = catalog();
        let filter = ProductFilter {
            search: "sweet".to_string(),
            category: Some("Baked Goods".to_string()),
            min_price: 0,
            max_price: 700,
        };
        let hits = filter_products(&catalog, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "3");
    }

    #[test]
    fn inventory_value_sums_price_times_quantity() {
        let catalog = catalog();
        assert_eq!(
            inventory_value(&catalog),
            399 * 50 + 999 * 20 + 699 * 8
        );
        assert_eq!(inventory_value(&[]), 0);
    }

    #[test]
    fn inventory_value_saturates_on_extreme_prices() {
        let mut catalog = catalog();
        catalog[0].price = u64::MAX;
        catalog[0].quantity = 2;
        assert_eq!(inventory_value(&catalog), u64::MAX);
    }

    #[test]
    fn low_stock_counts_strictly_below_threshold() {
        let mut catalog = catalog();
        assert_eq!(low_stock_count(&catalog), 1);

        // Exactly at the threshold is not low stock.
        catalog[2].quantity = LOW_STOCK_THRESHOLD;
        assert_eq!(low_stock_count(&catalog), 0);
    }
}
