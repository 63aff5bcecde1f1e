//! Snapshot parsing and schema definitions.
//!
//! This module handles:
//! - Parsing raw JSON from the dashboard endpoint
//! - Validating product records
//! - Defining the report schema

pub mod schema;
pub mod snapshot;

// Re-export main types
pub use schema::{
    DashboardReport, MonthlyUnits, NamedValue, Point, Product, ProductId, ProductRow, Totals,
};
pub use snapshot::{parse_snapshot, parse_snapshot_str, read_snapshot, Snapshot};
