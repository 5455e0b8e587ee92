use crate::catalog::Product;
use crate::search::normalize::normalize;

/// Filter the catalog by substring containment over normalized text.
///
/// A blank query, or one whose normalized length is under `min_length`,
/// passes the whole catalog through unchanged. Matching is
/// case- and accent-insensitive, order is always catalog order, and no
/// product data is copied.
pub fn filter_products<'a>(
    catalog: &'a [Product],
    query: &str,
    min_length: usize,
) -> Vec<&'a Product> {
    let normalized_query = normalize(query);
    if normalized_query.chars().count() < min_length {
        return catalog.iter().collect();
    }
    catalog
        .iter()
        .filter(|product| normalize(&product.searchable_text()).contains(&normalized_query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;

    const MIN_LENGTH: usize = 2;

    fn ids(results: &[&Product]) -> Vec<u32> {
        results.iter().map(|p| p.id).collect()
    }

    #[test]
    fn empty_query_returns_full_catalog_in_order() {
        let catalog = default_catalog();
        let results = filter_products(&catalog, "", MIN_LENGTH);
        assert_eq!(ids(&results), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn blank_query_returns_full_catalog() {
        let catalog = default_catalog();
        let results = filter_products(&catalog, "   ", MIN_LENGTH);
        assert_eq!(results.len(), catalog.len());
    }

    #[test]
    fn single_char_query_is_below_threshold() {
        let catalog = default_catalog();
        let results = filter_products(&catalog, "a", MIN_LENGTH);
        assert_eq!(results.len(), catalog.len());
    }

    #[test]
    fn matches_name_substring_without_accent() {
        let catalog = default_catalog();
        let results = filter_products(&catalog, "auricular", MIN_LENGTH);
        assert_eq!(ids(&results), vec![1]);
    }

    #[test]
    fn accented_query_matches_identically() {
        let catalog = default_catalog();
        let plain = filter_products(&catalog, "auricular", MIN_LENGTH);
        let accented = filter_products(&catalog, "áuricular", MIN_LENGTH);
        assert_eq!(ids(&plain), ids(&accented));
        assert_eq!(ids(&accented), vec![1]);
    }

    #[test]
    fn matches_description_text() {
        let catalog = default_catalog();
        let results = filter_products(&catalog, "switches rojos", MIN_LENGTH);
        assert_eq!(ids(&results), vec![2]);
    }

    #[test]
    fn matches_category_when_present() {
        let mut catalog = default_catalog();
        catalog[2].category = Some("Periféricos".to_string());
        let results = filter_products(&catalog, "perifericos", MIN_LENGTH);
        assert_eq!(ids(&results), vec![3]);
    }

    #[test]
    fn no_match_yields_empty_result() {
        let catalog = default_catalog();
        let results = filter_products(&catalog, "zzzz", MIN_LENGTH);
        assert!(results.is_empty());
    }

    #[test]
    fn result_is_order_preserving_subsequence() {
        let catalog = default_catalog();
        // "co" hits several products; whatever matches must keep catalog order.
        let results = filter_products(&catalog, "co", MIN_LENGTH);
        let result_ids = ids(&results);
        let mut sorted = result_ids.clone();
        sorted.sort_unstable();
        assert_eq!(result_ids, sorted);
        for product in &results {
            assert!(
                normalize(&product.searchable_text()).contains("co"),
                "{} should contain the query",
                product.name
            );
        }
        for product in &catalog {
            if !result_ids.contains(&product.id) {
                assert!(!normalize(&product.searchable_text()).contains("co"));
            }
        }
    }

    #[test]
    fn filtering_is_deterministic() {
        let catalog = default_catalog();
        let first = ids(&filter_products(&catalog, "monitor", MIN_LENGTH));
        let second = ids(&filter_products(&catalog, "monitor", MIN_LENGTH));
        assert_eq!(first, second);
    }
}
