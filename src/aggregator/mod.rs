//! Metrics aggregation over a product snapshot.
//!
//! This module turns validated product records into:
//! - Headline totals (revenue, units, growth)
//! - Catalog views (categories, search filter, restock list)
//! - Chart series (sparklines, monthly line, last-month bars)

pub mod catalog;
pub mod metrics;
pub mod report;
pub mod series;

// Re-export main types and functions
pub use catalog::{filter_products, list_categories, restock_candidates};
pub use metrics::{compute_totals, growth_rate, top_seller_by_units};
pub use report::{build_report, month_label, ReportOptions};
pub use series::{
    bar_heights, last_month_per_product, line_chart_points, monthly_aggregate,
    monthly_aggregate_series, sparkline_series, uniform_series_len,
};
