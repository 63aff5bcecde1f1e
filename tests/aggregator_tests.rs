use pretty_assertions::assert_eq;
use telecom_dashboard::aggregator::{
    compute_totals, filter_products, last_month_per_product, list_categories, monthly_aggregate,
    sparkline_series, top_seller_by_units,
};
use telecom_dashboard::parser::{Product, ProductId, Totals};
use telecom_dashboard::utils::error::MetricsError;

fn product(id: i64, name: &str, category: &str, price: f64, stock: u64, sales: &[u64]) -> Product {
    Product {
        id: ProductId::Number(id),
        name: name.to_string(),
        category: category.to_string(),
        price,
        stock,
        monthly_sales: sales.to_vec(),
    }
}

fn catalog() -> Vec<Product> {
    vec![
        product(1, "5G SIM Pack", "SIM", 199.0, 420, &[120, 150, 180, 210, 260, 300]),
        product(2, "IoT Device Plan", "Plans", 349.5, 1200, &[80, 85, 90, 95, 100, 110]),
        product(3, "Fiber Router", "Hardware", 2499.0, 75, &[30, 28, 35, 40, 38, 45]),
        product(4, "Prepaid Recharge", "Plans", 99.0, 5000, &[900, 950, 1000, 980, 1020, 1100]),
        product(5, "Mesh Extender", "Hardware", 1299.0, 310, &[12, 15, 11, 18, 20, 22]),
    ]
}

#[test]
fn test_totals_scenario() {
    let products = vec![
        product(1, "A", "X", 10.0, 1, &[1, 2, 3]),
        product(2, "B", "X", 5.0, 1, &[4, 4, 4]),
    ];

    assert_eq!(
        compute_totals(&products).unwrap(),
        Totals {
            total_revenue: 120.0,
            total_units: 18,
            growth_rate: 25.0,
            last_revenue: 50.0,
            prev_revenue: 40.0,
        }
    );
}

#[test]
fn test_total_revenue_matches_definition() {
    let products = catalog();
    let totals = compute_totals(&products).unwrap();

    let expected: f64 = products
        .iter()
        .map(|p| p.price * p.monthly_sales.iter().sum::<u64>() as f64)
        .sum();
    assert!((totals.total_revenue - expected).abs() < 1e-6);
}

#[test]
fn test_empty_catalog() {
    let products: Vec<Product> = Vec::new();

    assert_eq!(compute_totals(&products).unwrap(), Totals::default());
    assert_eq!(list_categories(&products), vec!["All".to_string()]);
    assert!(filter_products(&products, "sim", "All").is_empty());
    assert!(top_seller_by_units(&products).is_none());
}

#[test]
fn test_categories_each_once() {
    assert_eq!(
        list_categories(&catalog()),
        vec!["All", "SIM", "Plans", "Hardware"]
    );
}

#[test]
fn test_filter_is_subset_in_order() {
    let products = catalog();
    let ids: Vec<&ProductId> = products.iter().map(|p| &p.id).collect();

    for (query, category) in [("", "All"), ("plan", "All"), ("0", "Hardware"), ("zzz", "All")] {
        let filtered = filter_products(&products, query, category);
        let positions: Vec<usize> = filtered
            .iter()
            .map(|p| ids.iter().position(|id| **id == p.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    assert_eq!(filter_products(&products, "", "All").len(), products.len());
}

#[test]
fn test_top_seller() {
    let products = catalog();
    assert_eq!(top_seller_by_units(&products).unwrap().name, "Prepaid Recharge");

    let tied = vec![
        product(1, "First", "X", 1.0, 1, &[5, 5]),
        product(2, "Second", "X", 1.0, 1, &[4, 6]),
    ];
    assert_eq!(top_seller_by_units(&tied).unwrap().name, "First");
}

#[test]
fn test_sparkline_strictly_increasing() {
    let points = sparkline_series(&[3, 8, 13, 21, 34, 55]);
    assert_eq!(points.len(), 6);
    assert!(points.windows(2).all(|w| w[1].y < w[0].y && w[1].x > w[0].x));
}

#[test]
fn test_monthly_aggregate_mismatched_lengths() {
    let products = vec![
        product(1, "A", "X", 1.0, 1, &[1, 2, 3]),
        product(2, "B", "X", 1.0, 1, &[1, 2]),
    ];

    assert!(matches!(
        monthly_aggregate(&products, 0),
        Err(MetricsError::SeriesLengthMismatch { expected: 3, actual: 2, .. })
    ));
}

#[test]
fn test_last_month_per_product() {
    let values: Vec<u64> = last_month_per_product(&catalog())
        .unwrap()
        .into_iter()
        .map(|v| v.value)
        .collect();
    assert_eq!(values, vec![300, 110, 45, 1100, 22]);
}
