//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while fetching the product snapshot.
///
/// Any of these means the dashboard data is unavailable; aggregation never
/// runs on a failed fetch.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Dashboard data unavailable: HTTP {status}: {body}")]
    Unavailable { status: u16, body: String },

    #[error("Invalid API base URL: {0}")]
    InvalidUrl(String),
}

/// Errors that can occur while ingesting product records
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid snapshot format: {0}")]
    InvalidFormat(String),

    #[error("Product {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("Duplicate product id: {0}")]
    DuplicateId(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors raised by the metrics aggregator on malformed input
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MetricsError {
    #[error("monthlySales length mismatch: product {id} has {actual} months, expected {expected}")]
    SeriesLengthMismatch {
        id: String,
        expected: usize,
        actual: usize,
    },

    #[error("monthlySales too short: product {id} has {actual} months, need at least {required}")]
    SeriesTooShort {
        id: String,
        actual: usize,
        required: usize,
    },

    #[error("Unit count overflow in product {id}")]
    UnitsOverflow { id: String },

    #[error("Month index {index} out of range for series of length {len}")]
    MonthOutOfRange { index: usize, len: usize },
}

/// Errors that can occur during chart rendering
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("No products to chart")]
    EmptySnapshot,

    #[error("Chart width {width} is below the minimum of {min} pixels")]
    InvalidWidth { width: usize, min: usize },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
