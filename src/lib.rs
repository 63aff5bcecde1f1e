//! Telecom Dashboard
//!
//! Derived metrics, filtering and chart series for the telecom inventory
//! dashboard.
//!
//! A product snapshot (fetched from the backend or read from a file) is
//! validated once, then aggregated into headline totals, a searchable
//! product table and the series behind the sparklines, the monthly line
//! chart and the last-month bar chart.
//!
//! ## Getting Started
//!
//! ```bash
//! telecom-dashboard report --input products.json --summary
//! telecom-dashboard report --api http://localhost:5000 --charts dashboard.svg
//! ```

pub mod aggregator;
pub mod api;
pub mod charts;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
