//! Schema definitions for product records and the dashboard report.
//!
//! Product records are what the backend sends us (camelCase on the wire).
//! The report is what we write to disk; it is versioned to allow future evolution.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product identifier as sent by the backend (string or integer)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

/// One catalog entry with pricing, stock and monthly sales history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    pub name: String,

    pub category: String,

    /// Unit price (non-negative, not necessarily integral)
    pub price: f64,

    /// Current inventory count
    pub stock: u64,

    /// Units sold per reporting month, oldest first
    #[serde(rename = "monthlySales", alias = "monthly_sales")]
    pub monthly_sales: Vec<u64>,
}

impl Product {
    /// Units sold across the whole series, `None` if the sum overflows `u64`
    pub fn total_units(&self) -> Option<u64> {
        self.monthly_sales
            .iter()
            .try_fold(0u64, |acc, &units| acc.checked_add(units))
    }
}

/// Headline dashboard figures
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub total_revenue: f64,
    pub total_units: u64,
    /// Month-on-month revenue growth in percent (0 when previous month had no revenue)
    pub growth_rate: f64,
    pub last_revenue: f64,
    pub prev_revenue: f64,
}

/// A point in SVG user space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A labelled value for the per-product bar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
    pub value: u64,
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Where the snapshot came from (API URL or file path)
    pub source: String,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,

    pub product_count: usize,

    /// Number of reporting months per product
    pub series_len: usize,

    pub query: String,

    pub category: String,

    pub totals: Totals,

    /// Category selector options, "All" first
    pub categories: Vec<String>,

    /// Products matching the query and category, in snapshot order
    pub filtered: Vec<ProductRow>,

    /// Units sold per month across all products
    pub monthly_units: Vec<MonthlyUnits>,

    /// Last month's units per product
    pub last_month: Vec<NamedValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_seller: Option<String>,

    /// Names of products below the restock threshold
    pub restock: Vec<String>,
}

/// One row of the products table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u64,
    pub units: u64,
    pub sparkline: Vec<Point>,
}

/// Combined units for one reporting month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyUnits {
    pub month: String,
    pub units: u64,
}
