//! # Snapshot Filtering
//!
//! Pure filtering over a product snapshot.
//!
//! ## Filter Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Filter Evaluation                                  │
//! │                                                                         │
//! │  Snapshot (ordered)          Criteria                                  │
//! │  ──────────────────          ────────                                  │
//! │  [Milk, Bread, Eggs]   ×     { search: "", category: -, band: Low }   │
//! │         │                                                               │
//! │         ▼  per record, ALL three clauses must hold:                    │
//! │   1. search_term empty OR name/description contains it (case-insens.) │
//! │   2. category unset OR exact match                                     │
//! │   3. stock_band matches stock level                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  [Milk]   ← original order preserved (stable filter, never a sort)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `apply` is referentially transparent: same snapshot + criteria always
//! yields the same view, and applying it twice yields the same result as
//! applying it once.

use crate::types::{FilterCriteria, Product};

/// Applies filter criteria to a snapshot, producing a derived view.
///
/// ## Edge Cases
/// - Empty snapshot yields an empty result
/// - A category value no record carries yields an empty result, not an error
/// - Absent descriptions are treated as empty strings for search
pub fn apply(snapshot: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let term = criteria.search_term.trim().to_lowercase();
    let category = criteria
        .category
        .as_deref()
        .filter(|c| !c.is_empty());

    snapshot
        .iter()
        .filter(|product| {
            matches_search(product, &term)
                && category.map_or(true, |c| product.category == c)
                && criteria.stock_band.matches(product.stock)
        })
        .cloned()
        .collect()
}

/// Search clause: empty term matches everything, otherwise the lowercased
/// term must appear in the name or the description.
fn matches_search(product: &Product, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    product.name.to_lowercase().contains(term)
        || product
            .description
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(term)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StockBand;

    fn product(id: &str, name: &str, category: &str, price: f64, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            price,
            stock,
            description: None,
            barcode: None,
        }
    }

    fn snapshot() -> Vec<Product> {
        vec![
            product("1", "Milk", "Dairy", 2.50, 5),
            product("2", "Bread", "Bakery", 3.00, 60),
        ]
    }

    #[test]
    fn test_low_band_example() {
        let criteria = FilterCriteria {
            search_term: String::new(),
            category: None,
            stock_band: StockBand::Low,
        };
        let result = apply(&snapshot(), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1"); // Milk, stock 5 < 10
    }

    #[test]
    fn test_default_criteria_returns_everything() {
        let result = apply(&snapshot(), &FilterCriteria::default());
        assert_eq!(result, snapshot());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let criteria = FilterCriteria {
            search_term: "mIlK".to_string(),
            ..Default::default()
        };
        let result = apply(&snapshot(), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Milk");
    }

    #[test]
    fn test_search_matches_description() {
        let mut items = snapshot();
        items[1].description = Some("Sourdough loaf".to_string());

        let criteria = FilterCriteria {
            search_term: "sourdough".to_string(),
            ..Default::default()
        };
        let result = apply(&items, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Bread");
    }

    #[test]
    fn test_absent_description_treated_as_empty() {
        // Neither name contains "loaf" and descriptions are None
        let criteria = FilterCriteria {
            search_term: "loaf".to_string(),
            ..Default::default()
        };
        assert!(apply(&snapshot(), &criteria).is_empty());
    }

    #[test]
    fn test_category_exact_match() {
        let criteria = FilterCriteria {
            category: Some("Dairy".to_string()),
            ..Default::default()
        };
        let result = apply(&snapshot(), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].category, "Dairy");
    }

    #[test]
    fn test_empty_category_string_is_no_filter() {
        let criteria = FilterCriteria {
            category: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(apply(&snapshot(), &criteria).len(), 2);
    }

    #[test]
    fn test_unknown_category_yields_empty_result() {
        let criteria = FilterCriteria {
            category: Some("Frozen".to_string()),
            ..Default::default()
        };
        assert!(apply(&snapshot(), &criteria).is_empty());
    }

    #[test]
    fn test_clauses_combine_with_and() {
        // Search matches Milk, but the band excludes it
        let criteria = FilterCriteria {
            search_term: "milk".to_string(),
            category: None,
            stock_band: StockBand::High,
        };
        assert!(apply(&snapshot(), &criteria).is_empty());
    }

    #[test]
    fn test_empty_snapshot_yields_empty_result() {
        let criteria = FilterCriteria::default();
        assert!(apply(&[], &criteria).is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let items = vec![
            product("3", "Yogurt", "Dairy", 1.20, 8),
            product("1", "Milk", "Dairy", 2.50, 5),
            product("2", "Cheese", "Dairy", 7.80, 3),
        ];
        let criteria = FilterCriteria {
            stock_band: StockBand::Low,
            ..Default::default()
        };
        let filtered = apply(&items, &criteria);
        let ids: Vec<&str> = filtered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let criteria = FilterCriteria {
            search_term: "b".to_string(),
            category: None,
            stock_band: StockBand::High,
        };
        let once = apply(&snapshot(), &criteria);
        let twice = apply(&once, &criteria);
        assert_eq!(once, twice);
    }
}
