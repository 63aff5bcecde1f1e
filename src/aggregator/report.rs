//! Assemble a full dashboard report from a validated snapshot.

use super::catalog::{filter_products, list_categories, restock_candidates};
use super::metrics::{compute_totals, top_seller_by_units, units_overflow};
use super::series::{last_month_per_product, monthly_aggregate_series, sparkline_series};
use crate::parser::schema::{DashboardReport, MonthlyUnits, ProductRow};
use crate::parser::snapshot::Snapshot;
use crate::utils::config::{
    ALL_CATEGORIES, DEFAULT_MONTH_LABELS, DEFAULT_RESTOCK_THRESHOLD, REPORT_SCHEMA_VERSION,
};
use crate::utils::error::MetricsError;
use log::debug;

/// Options controlling which view of the snapshot is reported
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub source: String,
    pub query: String,
    pub category: String,
    pub restock_threshold: u64,
    pub month_labels: Vec<String>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            source: String::new(),
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
            restock_threshold: DEFAULT_RESTOCK_THRESHOLD,
            month_labels: DEFAULT_MONTH_LABELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Label for reporting month `index`; falls back to `M<n>` past the configured labels
pub fn month_label(labels: &[String], index: usize) -> String {
    labels
        .get(index)
        .cloned()
        .unwrap_or_else(|| format!("M{}", index + 1))
}

/// Build the report
///
/// **Public** - main entry point used by the report command
///
/// Totals, monthly units, last-month values and the top seller are computed
/// over the whole snapshot; only the products table honours the filter.
pub fn build_report(snapshot: &Snapshot, options: &ReportOptions) -> Result<DashboardReport, MetricsError> {
    let products = snapshot.products();

    let totals = compute_totals(products)?;
    let categories = list_categories(products);

    let filtered = filter_products(products, &options.query, &options.category)
        .into_iter()
        .map(|p| {
            Ok(ProductRow {
                id: p.id.clone(),
                name: p.name.clone(),
                category: p.category.clone(),
                price: p.price,
                stock: p.stock,
                units: p.total_units().ok_or_else(|| units_overflow(p))?,
                sparkline: sparkline_series(&p.monthly_sales),
            })
        })
        .collect::<Result<Vec<ProductRow>, MetricsError>>()?;

    let monthly_units = monthly_aggregate_series(products)?
        .into_iter()
        .enumerate()
        .map(|(i, units)| MonthlyUnits {
            month: month_label(&options.month_labels, i),
            units,
        })
        .collect();

    let last_month = last_month_per_product(products)?;
    let top_seller = top_seller_by_units(products).map(|p| p.name.clone());
    let restock = restock_candidates(products, options.restock_threshold)
        .into_iter()
        .map(|p| p.name.clone())
        .collect();

    debug!(
        "Report built: {} products, {} shown after filtering",
        products.len(),
        filtered.len()
    );

    Ok(DashboardReport {
        version: REPORT_SCHEMA_VERSION.to_string(),
        source: options.source.clone(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        product_count: products.len(),
        series_len: snapshot.series_len(),
        query: options.query.clone(),
        category: options.category.clone(),
        totals,
        categories,
        filtered,
        monthly_units,
        last_month,
        top_seller,
        restock,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::snapshot::parse_snapshot_str;

    const SNAPSHOT: &str = r#"[
        {"id": 1, "name": "5G SIM Pack", "category": "SIM", "price": 10, "stock": 320, "monthlySales": [1, 2, 3]},
        {"id": 2, "name": "Fiber Router", "category": "Hardware", "price": 5, "stock": 900, "monthlySales": [4, 4, 4]}
    ]"#;

    #[test]
    fn test_build_report() {
        let snapshot = parse_snapshot_str(SNAPSHOT).unwrap();
        let report = build_report(&snapshot, &ReportOptions::default()).unwrap();

        assert_eq!(report.version, REPORT_SCHEMA_VERSION);
        assert_eq!(report.product_count, 2);
        assert_eq!(report.series_len, 3);
        assert_eq!(report.totals.total_revenue, 120.0);
        assert_eq!(report.categories, vec!["All", "SIM", "Hardware"]);
        assert_eq!(report.filtered.len(), 2);
        assert_eq!(report.monthly_units[0].month, "Apr");
        assert_eq!(report.monthly_units[2].units, 7);
        assert_eq!(report.top_seller.as_deref(), Some("Fiber Router"));
        assert_eq!(report.restock, vec!["5G SIM Pack"]);
    }

    #[test]
    fn test_filter_only_affects_table() {
        let snapshot = parse_snapshot_str(SNAPSHOT).unwrap();
        let options = ReportOptions {
            category: "SIM".to_string(),
            ..Default::default()
        };

        let report = build_report(&snapshot, &options).unwrap();

        assert_eq!(report.filtered.len(), 1);
        assert_eq!(report.totals.total_units, 18);
        assert_eq!(report.last_month.len(), 2);
    }

    #[test]
    fn test_empty_snapshot_report() {
        let snapshot = parse_snapshot_str("[]").unwrap();
        let report = build_report(&snapshot, &ReportOptions::default()).unwrap();

        assert_eq!(report.totals.total_revenue, 0.0);
        assert_eq!(report.categories, vec!["All"]);
        assert!(report.filtered.is_empty());
        assert!(report.monthly_units.is_empty());
        assert!(report.top_seller.is_none());
    }

    #[test]
    fn test_month_label_fallback() {
        let labels = vec!["Jan".to_string()];
        assert_eq!(month_label(&labels, 0), "Jan");
        assert_eq!(month_label(&labels, 3), "M4");
    }
}
