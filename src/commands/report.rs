//! Report command implementation.
//!
//! The report command:
//! 1. Loads the product snapshot (API or file)
//! 2. Validates the records
//! 3. Computes totals, filtered view and chart series
//! 4. Renders the chart sheet
//! 5. Writes output files

use super::models::{ReportArgs, SnapshotSource};
use crate::aggregator::{build_report, ReportOptions};
use crate::api::ApiClient;
use crate::charts::{generate_charts, generate_text_summary};
use crate::output::{write_report, write_svg};
use crate::parser::{parse_snapshot, read_snapshot, Snapshot};
use crate::utils::config::MIN_CHART_WIDTH;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Backend unavailable or unreadable snapshot file
/// * Malformed product records
/// * File write errors
pub fn execute_report(args: ReportArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Starting dashboard report from: {}", args.source);

    info!("Step 1/5: Loading product snapshot...");
    let snapshot = load_snapshot(&args.source)?;

    info!(
        "Step 2/5: Snapshot validated ({} products, {} months)",
        snapshot.len(),
        snapshot.series_len()
    );

    info!("Step 3/5: Computing dashboard metrics...");
    let options = ReportOptions {
        source: args.source.to_string(),
        query: args.query.clone(),
        category: args.category.clone(),
        restock_threshold: args.restock_threshold,
        month_labels: args.month_labels.clone(),
    };
    let report = build_report(&snapshot, &options).context("Failed to compute dashboard metrics")?;

    debug!(
        "Totals: revenue {:.2}, units {}, growth {:.2}%",
        report.totals.total_revenue, report.totals.total_units, report.totals.growth_rate
    );

    let svg_content = match &args.output_svg {
        Some(_) if snapshot.is_empty() => {
            info!("Step 4/5: Skipping charts (snapshot is empty)");
            None
        }
        Some(_) => {
            info!("Step 4/5: Rendering chart sheet...");
            let svg = generate_charts(&report, args.chart_config.as_ref())
                .context("Failed to render charts")?;
            Some(svg)
        }
        None => {
            info!("Step 4/5: Skipping charts (not requested)");
            None
        }
    };

    info!("Step 5/5: Writing output files...");
    write_report(&report, &args.output_json).context("Failed to write report JSON")?;
    info!("✓ Report written to: {}", args.output_json.display());

    if let (Some(svg), Some(svg_path)) = (svg_content, &args.output_svg) {
        write_svg(&svg, svg_path).context("Failed to write chart SVG")?;
        info!("✓ Charts written to: {}", svg_path.display());
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("DASHBOARD SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Source:     {}", args.source);
        println!("Products:   {} ({} shown)", report.product_count, report.filtered.len());
        println!("Categories: {}", report.categories.join(", "));
        println!("\n{}", generate_text_summary(&report, args.summary_rows));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Fetch or read the snapshot
///
/// **Private** - internal helper for execute_report
fn load_snapshot(source: &SnapshotSource) -> Result<Snapshot> {
    match source {
        SnapshotSource::Api(url) => {
            let client = ApiClient::new(url.as_str()).context("Failed to create API client")?;
            let raw = client
                .fetch_products()
                .context("Dashboard data unavailable")?;
            parse_snapshot(&raw).context("Backend returned malformed product data")
        }
        SnapshotSource::File(path) => read_snapshot(path)
            .with_context(|| format!("Failed to load snapshot from {}", path.display())),
    }
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    match &args.source {
        SnapshotSource::Api(url) => {
            if url.is_empty() {
                anyhow::bail!("API URL cannot be empty");
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("API URL must start with http:// or https://");
            }
        }
        SnapshotSource::File(path) => {
            if !path.is_file() {
                anyhow::bail!("Snapshot file not found: {}", path.display());
            }
        }
    }

    if args.category.trim().is_empty() {
        anyhow::bail!("Category cannot be empty (use \"All\" for every category)");
    }

    if args.summary_rows == 0 {
        anyhow::bail!("summary_rows must be greater than 0");
    }

    if let Some(config) = &args.chart_config {
        if config.width < MIN_CHART_WIDTH {
            anyhow::bail!("Chart width must be at least {} pixels", MIN_CHART_WIDTH);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartConfig;
    use crate::output::read_report;
    use std::path::PathBuf;

    #[test]
    fn test_validate_args_valid() {
        assert!(validate_args(&ReportArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_url() {
        let args = ReportArgs {
            source: SnapshotSource::Api(String::new()),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_invalid_scheme() {
        let args = ReportArgs {
            source: SnapshotSource::Api("ftp://localhost:5000".to_string()),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_missing_file() {
        let args = ReportArgs {
            source: SnapshotSource::File(PathBuf::from("/definitely/not/here.json")),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_category() {
        let args = ReportArgs {
            category: "  ".to_string(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_narrow_chart() {
        let args = ReportArgs {
            chart_config: Some(ChartConfig::new().with_width(50)),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_execute_report_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("products.json");
        std::fs::write(
            &input,
            r#"[{"id": 1, "name": "5G SIM Pack", "category": "SIM", "price": 10, "stock": 320, "monthlySales": [1, 2, 3]}]"#,
        )
        .unwrap();

        let args = ReportArgs {
            source: SnapshotSource::File(input),
            output_json: dir.path().join("out/dashboard.json"),
            output_svg: Some(dir.path().join("out/dashboard.svg")),
            ..Default::default()
        };

        execute_report(args.clone()).unwrap();

        let report = read_report(&args.output_json).unwrap();
        assert_eq!(report.totals.total_units, 6);
        assert!(dir.path().join("out/dashboard.svg").exists());
    }

    #[test]
    fn test_execute_report_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("products.json");
        std::fs::write(
            &input,
            r#"[{"id": 1, "name": "Router", "category": "Hardware", "price": 10, "stock": 1, "monthlySales": [3]}]"#,
        )
        .unwrap();

        let args = ReportArgs {
            source: SnapshotSource::File(input),
            output_json: dir.path().join("dashboard.json"),
            ..Default::default()
        };

        assert!(execute_report(args).is_err());
        assert!(!dir.path().join("dashboard.json").exists());
    }
}
