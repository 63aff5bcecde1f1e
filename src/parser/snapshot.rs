//! Product snapshot ingestion.
//!
//! Parses the raw JSON returned by the dashboard endpoint into a validated,
//! immutable snapshot. Everything downstream can rely on:
//! - every price being finite and non-negative
//! - every series having the same length, at least `MIN_SERIES_LEN`
//! - ids being unique

use super::schema::Product;
use crate::utils::config::{ENVELOPE_FIELD_NAMES, MIN_SERIES_LEN};
use crate::utils::error::SnapshotError;
use log::{debug, warn};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Validated product snapshot held for the duration of one report
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    products: Vec<Product>,
    series_len: usize,
}

impl Snapshot {
    /// Validate a product list and wrap it as a snapshot
    pub fn new(products: Vec<Product>) -> Result<Self, SnapshotError> {
        let series_len = validate_products(&products)?;
        Ok(Self {
            products,
            series_len,
        })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Months per product (0 for an empty snapshot)
    pub fn series_len(&self) -> usize {
        self.series_len
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Parse a raw JSON value into a snapshot
///
/// **Public** - main entry point for ingestion
///
/// Accepts a bare array of products or an object wrapping the array under
/// one of the common envelope keys (`products`, `data`, ...).
pub fn parse_snapshot(raw: &serde_json::Value) -> Result<Snapshot, SnapshotError> {
    let array = extract_product_array(raw)?;

    let products: Vec<Product> = serde_json::from_value(array.clone())?;
    debug!("Deserialized {} product records", products.len());

    Snapshot::new(products)
}

/// Parse a JSON string into a snapshot
pub fn parse_snapshot_str(json: &str) -> Result<Snapshot, SnapshotError> {
    let raw: serde_json::Value = serde_json::from_str(json)?;
    parse_snapshot(&raw)
}

/// Read and validate a snapshot from a JSON file
pub fn read_snapshot(path: impl AsRef<Path>) -> Result<Snapshot, SnapshotError> {
    let path = path.as_ref();
    debug!("Reading snapshot from: {}", path.display());

    let file = File::open(path)?;
    let raw: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;
    parse_snapshot(&raw)
}

/// Locate the product array inside the response body
///
/// **Private** - internal helper
fn extract_product_array(raw: &serde_json::Value) -> Result<&serde_json::Value, SnapshotError> {
    if raw.is_array() {
        return Ok(raw);
    }

    if let Some(obj) = raw.as_object() {
        for field in ENVELOPE_FIELD_NAMES {
            if let Some(value) = obj.get(*field) {
                if value.is_array() {
                    debug!("Found product array under '{}'", field);
                    return Ok(value);
                }
            }
        }
        warn!(
            "Snapshot object has no product array (keys: {:?})",
            obj.keys().collect::<Vec<_>>()
        );
    }

    Err(SnapshotError::InvalidFormat(
        "expected a JSON array of products".to_string(),
    ))
}

/// Check every record invariant and return the shared series length
///
/// **Private** - internal validation
fn validate_products(products: &[Product]) -> Result<usize, SnapshotError> {
    let Some(first) = products.first() else {
        return Ok(0);
    };
    let expected = first.monthly_sales.len();
    let mut seen = HashSet::with_capacity(products.len());
    // Every per-product and per-month sum is bounded by this one
    let mut grand_total: u64 = 0;

    for product in products {
        let id = product.id.to_string();

        if !seen.insert(&product.id) {
            return Err(SnapshotError::DuplicateId(id));
        }

        if product.name.trim().is_empty() {
            return Err(invalid(&id, "name is empty"));
        }

        if !product.price.is_finite() || product.price < 0.0 {
            return Err(invalid(
                &id,
                &format!("price must be a non-negative number, got {}", product.price),
            ));
        }

        let len = product.monthly_sales.len();
        if len < MIN_SERIES_LEN {
            return Err(invalid(
                &id,
                &format!(
                    "monthlySales has {} entries, need at least {}",
                    len, MIN_SERIES_LEN
                ),
            ));
        }

        if len != expected {
            return Err(invalid(
                &id,
                &format!(
                    "monthlySales has {} entries, other products have {}",
                    len, expected
                ),
            ));
        }

        grand_total = product
            .total_units()
            .and_then(|units| grand_total.checked_add(units))
            .ok_or_else(|| invalid(&id, "monthlySales total exceeds the representable unit count"))?;
    }

    Ok(expected)
}

fn invalid(id: &str, reason: &str) -> SnapshotError {
    SnapshotError::InvalidRecord {
        id: id.to_string(),
        reason: reason.to_string(),
    }
}
