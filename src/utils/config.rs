//! Configuration and constants for the dashboard.

use std::time::Duration;

/// Default timeout for API requests
pub const DEFAULT_API_TIMEOUT: Duration = Duration::from_secs(30);

/// Path of the product snapshot endpoint, relative to the API base URL
pub const PRODUCTS_ENDPOINT: &str = "/api/dashboard/products";

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Category selector value that matches every product
pub const ALL_CATEGORIES: &str = "All";

/// Minimum series length accepted at ingestion (growth rate needs two months)
pub const MIN_SERIES_LEN: usize = 2;

/// Products below this stock level are flagged for restocking
pub const DEFAULT_RESTOCK_THRESHOLD: u64 = 500;

/// Reporting month labels used by the dashboard line chart
pub const DEFAULT_MONTH_LABELS: &[&str] = &["Apr", "May", "Jun", "Jul", "Aug", "Sep"];

// Sparkline plotting box
pub const SPARKLINE_WIDTH: f64 = 160.0;
pub const SPARKLINE_HEIGHT: f64 = 40.0;
pub const SPARKLINE_PADDING: f64 = 4.0;

// Combined monthly line chart geometry
pub const LINE_CHART_STEP: f64 = 60.0;
pub const LINE_CHART_OFFSET: f64 = 20.0;
pub const LINE_CHART_HEIGHT: f64 = 120.0;
pub const LINE_CHART_SPAN: f64 = 90.0;
pub const LINE_CHART_BASELINE: f64 = 10.0;

/// Narrowest chart sheet we can lay out, in pixels
pub const MIN_CHART_WIDTH: usize = 200;

/// Bars never render shorter than this percentage of the chart height
pub const BAR_MIN_HEIGHT_PCT: f64 = 6.0;

// Envelope keys a backend may wrap the product array in
pub const ENVELOPE_FIELD_NAMES: &[&str] = &["products", "data", "items", "result"];
