use crate::aggregator::list_categories;
use crate::parser::read_snapshot;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a product snapshot file
pub fn validate_snapshot_file(file_path: &Path) -> Result<()> {
    println!("Validating snapshot: {}", file_path.display());

    let snapshot = read_snapshot(file_path)
        .with_context(|| format!("Invalid snapshot: {}", file_path.display()))?;

    println!("✓ Valid product snapshot");
    println!("  Products: {}", snapshot.len());
    println!("  Months per product: {}", snapshot.series_len());
    println!(
        "  Categories: {}",
        list_categories(snapshot.products())[1..].join(", ")
    );

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Telecom Dashboard Report Schema");
    println!("Current Version: {}", REPORT_SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  source: string           - API URL or snapshot file");
        println!("  generated_at: string     - RFC 3339 timestamp");
        println!("  product_count: number    - Products in the snapshot");
        println!("  series_len: number       - Reporting months per product");
        println!("  query, category: string  - Filter applied to the table");
        println!("  totals: object           - Headline metrics");
        println!("    total_revenue: number  - Sum of price x units");
        println!("    total_units: number    - Units sold across all months");
        println!("    last_revenue: number   - Revenue in the last month");
        println!("    prev_revenue: number   - Revenue in the month before");
        println!("    growth_rate: number    - Month-on-month %, 0 if prev is 0");
        println!("  categories: array        - \"All\" then categories in first-seen order");
        println!("  filtered: array          - Matching products with sparkline points");
        println!("  monthly_units: array     - Units per month across all products");
        println!("  last_month: array        - Last month units per product");
        println!("  top_seller: string?      - Product with most units (absent if empty)");
        println!("  restock: array           - Products below the stock threshold");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Telecom Dashboard v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Derived metrics and charts for the telecom inventory dashboard.");
}
