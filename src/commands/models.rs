use crate::charts::ChartConfig;
use crate::utils::config::{ALL_CATEGORIES, DEFAULT_MONTH_LABELS, DEFAULT_RESTOCK_THRESHOLD};
use std::fmt;
use std::path::PathBuf;

/// Where the product snapshot comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSource {
    /// Backend base URL; products are fetched from its dashboard endpoint
    Api(String),
    /// Local JSON file with the product array
    File(PathBuf),
}

impl fmt::Display for SnapshotSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotSource::Api(url) => f.write_str(url),
            SnapshotSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    pub source: SnapshotSource,

    /// Output path for the JSON report
    pub output_json: PathBuf,

    /// Output path for the SVG chart sheet (optional)
    pub output_svg: Option<PathBuf>,

    /// Free-text product search
    pub query: String,

    /// Category selector ("All" for every category)
    pub category: String,

    pub restock_threshold: u64,

    pub month_labels: Vec<String>,

    pub chart_config: Option<ChartConfig>,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Maximum product rows in the text summary
    pub summary_rows: usize,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            source: SnapshotSource::Api("http://localhost:5000".to_string()),
            output_json: PathBuf::from("dashboard.json"),
            output_svg: None,
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
            restock_threshold: DEFAULT_RESTOCK_THRESHOLD,
            month_labels: DEFAULT_MONTH_LABELS.iter().map(|s| s.to_string()).collect(),
            chart_config: None,
            print_summary: false,
            summary_rows: 20,
        }
    }
}
