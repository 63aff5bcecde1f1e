//! Telecom Dashboard CLI
//!
//! Computes dashboard metrics from a product snapshot and writes a JSON
//! report, an optional SVG chart sheet and an optional text summary.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use telecom_dashboard::charts::ChartConfig;
use telecom_dashboard::commands::{
    display_schema, display_version, execute_report, validate_args, validate_snapshot_file,
    ReportArgs, SnapshotSource,
};
use telecom_dashboard::utils::config::{ALL_CATEGORIES, DEFAULT_RESTOCK_THRESHOLD};

/// Telecom Dashboard - inventory metrics and charts
#[derive(Parser, Debug)]
#[command(name = "telecom-dashboard")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute dashboard metrics for a product snapshot
    Report {
        /// Backend base URL (products are fetched from /api/dashboard/products)
        #[arg(short, long, env = "DASHBOARD_API_URL")]
        api: Option<String>,

        /// Read the product snapshot from a JSON file (takes precedence over --api)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output path for the JSON report
        #[arg(short, long, default_value = "dashboard.json")]
        output: PathBuf,

        /// Output path for the SVG chart sheet (optional)
        #[arg(short, long)]
        charts: Option<PathBuf>,

        /// Search products by name or stock count
        #[arg(short, long, default_value = "")]
        query: String,

        /// Only show products in this category
        #[arg(long, default_value = ALL_CATEGORIES)]
        category: String,

        /// Flag products with stock below this level
        #[arg(long, default_value_t = DEFAULT_RESTOCK_THRESHOLD)]
        restock_threshold: u64,

        /// Comma-separated month labels for the line chart
        #[arg(long, value_delimiter = ',')]
        months: Option<Vec<String>>,

        /// Chart sheet title
        #[arg(long)]
        title: Option<String>,

        /// Chart sheet width in pixels
        #[arg(long, default_value = "960")]
        width: usize,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Maximum product rows in the text summary
        #[arg(long, default_value = "20")]
        summary_rows: usize,
    },

    /// Validate a product snapshot file
    Validate {
        /// Path to snapshot JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display report schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Report {
            api,
            input,
            output,
            charts,
            query,
            category,
            restock_threshold,
            months,
            title,
            width,
            summary,
            summary_rows,
        } => {
            let source = match (api, input) {
                (_, Some(path)) => SnapshotSource::File(path),
                (Some(url), None) => SnapshotSource::Api(url),
                (None, None) => {
                    anyhow::bail!("Provide --api <url> (or DASHBOARD_API_URL) or --input <file>")
                }
            };

            let chart_config = charts.as_ref().map(|_| {
                let config = ChartConfig::new().with_width(width);
                match title {
                    Some(title) => config.with_title(title),
                    None => config,
                }
            });

            let mut args = ReportArgs {
                source,
                output_json: output,
                output_svg: charts,
                query,
                category,
                restock_threshold,
                chart_config,
                print_summary: summary,
                summary_rows,
                ..Default::default()
            };
            if let Some(months) = months {
                args.month_labels = months;
            }

            validate_args(&args)?;
            execute_report(args)?;
        }

        Commands::Validate { file } => {
            validate_snapshot_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
