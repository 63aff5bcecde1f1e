//! Catalog views: category selector, search filter and restock list.

use crate::parser::schema::Product;
use crate::utils::config::ALL_CATEGORIES;
use log::debug;
use std::collections::HashSet;

/// Category selector options
///
/// Always starts with `"All"`, then each distinct category in order of
/// first appearance.
pub fn list_categories(products: &[Product]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut categories = vec![ALL_CATEGORIES.to_string()];

    for product in products {
        let category = product.category.as_str();
        // a literal "All" category is already covered by the sentinel
        if category != ALL_CATEGORIES && seen.insert(category) {
            categories.push(category.to_string());
        }
    }

    categories
}

/// Filter products by free-text query and category
///
/// A product matches when the category is `"All"` or equal to its own, and
/// the query is a case-insensitive substring of its name or a substring of
/// its stock count. An empty query matches everything. Input order is kept.
pub fn filter_products<'a>(products: &'a [Product], query: &str, category: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();

    let filtered: Vec<&Product> = products
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category == category)
        .filter(|p| p.name.to_lowercase().contains(&needle) || p.stock.to_string().contains(query))
        .collect();

    debug!(
        "Filter (query={:?}, category={:?}) kept {} of {} products",
        query,
        category,
        filtered.len(),
        products.len()
    );

    filtered
}

/// Products whose stock is below `threshold`, in input order
pub fn restock_candidates(products: &[Product], threshold: u64) -> Vec<&Product> {
    products.iter().filter(|p| p.stock < threshold).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::ProductId;

    fn product(id: i64, name: &str, category: &str, stock: u64) -> Product {
        Product {
            id: ProductId::Number(id),
            name: name.to_string(),
            category: category.to_string(),
            price: 1.0,
            stock,
            monthly_sales: vec![1, 2],
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "5G SIM Pack", "SIM", 320),
            product(2, "Fiber Router", "Hardware", 1250),
            product(3, "IoT Device Plan", "Plans", 800),
            product(4, "Mesh Router", "Hardware", 45),
        ]
    }

    #[test]
    fn test_list_categories_first_seen_order() {
        assert_eq!(
            list_categories(&catalog()),
            vec!["All", "SIM", "Hardware", "Plans"]
        );
    }

    #[test]
    fn test_list_categories_empty() {
        assert_eq!(list_categories(&[]), vec!["All"]);
    }

    #[test]
    fn test_filter_empty_query_all_categories() {
        let products = catalog();
        let filtered = filter_products(&products, "", ALL_CATEGORIES);
        assert_eq!(filtered.len(), products.len());
        assert!(filtered.iter().zip(&products).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_filter_name_case_insensitive() {
        let products = catalog();
        let names: Vec<&str> = filter_products(&products, "ROUTER", ALL_CATEGORIES)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Fiber Router", "Mesh Router"]);
    }

    #[test]
    fn test_filter_by_stock_digits() {
        let products = catalog();
        let filtered = filter_products(&products, "125", ALL_CATEGORIES);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Fiber Router");
    }

    #[test]
    fn test_filter_by_category() {
        let products = catalog();
        let filtered = filter_products(&products, "router", "Hardware");
        assert_eq!(filtered.len(), 2);
        assert!(filter_products(&products, "router", "SIM").is_empty());
    }

    #[test]
    fn test_restock_candidates() {
        let products = catalog();
        let names: Vec<&str> = restock_candidates(&products, 500)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["5G SIM Pack", "Mesh Router"]);
    }
}
