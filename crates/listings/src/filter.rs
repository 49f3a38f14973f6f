//! Filter/Search View - pure derivation of the display list
//!
//! Both filters are conjunctive and neither reorders: the result is the
//! snapshot's own order with non-matching products dropped.

use agora_core::{CategoryFilter, Product};

/// Derive the display list from a snapshot
///
/// 1. If the selector is not `All`, keep only products whose category
///    equals it exactly (case-sensitive over the closed enum).
/// 2. If the trimmed search term is non-empty, keep products whose name
///    OR description contains it, case-insensitively.
///
/// An empty snapshot or a term matching nothing yields an empty result;
/// neither is an error.
pub fn derive(snapshot: &[Product], category: &CategoryFilter, search_term: &str) -> Vec<Product> {
    let term = search_term.trim().to_lowercase();

    snapshot
        .iter()
        .filter(|product| category.matches(product.category))
        .filter(|product| {
            term.is_empty()
                || product.name.to_lowercase().contains(&term)
                || product.description.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_core::{Category, ContactDetails, ProductId, SellerId};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn product(id: &str, category: Category, name: &str, description: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: dec!(100),
            description: description.to_string(),
            image_url: "https://example.com/x.jpg".to_string(),
            category,
            seller_id: SellerId::new("s1"),
            contact: ContactDetails::from_fields("555-0101", "", ""),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn sample_snapshot() -> Vec<Product> {
        vec![
            product("1", Category::Books, "Calculus Text", "used"),
            product("2", Category::Electronics, "Lamp", "desk lamp"),
        ]
    }

    #[test]
    fn category_filter_keeps_exactly_that_category() {
        let snapshot = sample_snapshot();
        let result = derive(&snapshot, &CategoryFilter::Only(Category::Books), "");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, ProductId::new("1"));
    }

    #[test]
    fn search_matches_name_or_description_case_insensitively() {
        let snapshot = sample_snapshot();
        let result = derive(&snapshot, &CategoryFilter::All, "lamp");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, ProductId::new("2"));

        // "used" only appears in a description
        let result = derive(&snapshot, &CategoryFilter::All, "USED");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, ProductId::new("1"));
    }

    #[test]
    fn no_match_yields_empty_result() {
        let snapshot = sample_snapshot();
        assert!(derive(&snapshot, &CategoryFilter::All, "zzz").is_empty());
    }

    #[test]
    fn empty_snapshot_yields_empty_result() {
        assert!(derive(&[], &CategoryFilter::All, "anything").is_empty());
    }

    #[test]
    fn no_op_filters_return_snapshot_unchanged() {
        let snapshot = sample_snapshot();
        let result = derive(&snapshot, &CategoryFilter::All, "");
        assert_eq!(result, snapshot);

        // Whitespace-only terms count as empty
        let result = derive(&snapshot, &CategoryFilter::All, "   ");
        assert_eq!(result, snapshot);
    }

    #[test]
    fn filters_are_conjunctive() {
        let mut snapshot = sample_snapshot();
        snapshot.push(product("3", Category::Books, "Desk Lamp Manual", "booklet"));

        // "lamp" matches products 2 and 3, Books keeps only 3
        let result = derive(&snapshot, &CategoryFilter::Only(Category::Books), "lamp");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, ProductId::new("3"));
    }

    #[test]
    fn filtering_preserves_snapshot_order() {
        let snapshot = vec![
            product("1", Category::Books, "B ook one", "z"),
            product("2", Category::Electronics, "gadget", "z"),
            product("3", Category::Books, "book two", "z"),
            product("4", Category::Books, "book three", "z"),
        ];
        let result = derive(&snapshot, &CategoryFilter::Only(Category::Books), "");
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
    }

    #[test]
    fn category_filter_omits_nothing_it_should_keep() {
        let snapshot = sample_snapshot();
        let result = derive(&snapshot, &CategoryFilter::Only(Category::Books), "");
        let expected: Vec<_> = snapshot
            .iter()
            .filter(|p| p.category == Category::Books)
            .cloned()
            .collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn refiltering_with_no_op_filters_is_identity() {
        let snapshot = sample_snapshot();
        let once = derive(&snapshot, &CategoryFilter::Only(Category::Books), "calc");
        let twice = derive(&once, &CategoryFilter::All, "");
        assert_eq!(once, twice);
    }
}
