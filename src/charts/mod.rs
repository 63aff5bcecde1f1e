//! Chart rendering for dashboard reports.
//!
//! This module converts a report into an SVG chart sheet (line chart,
//! bar chart, sparklines) and a plain-text terminal summary.

pub mod generator;

// Re-export main types
pub use generator::{generate_charts, generate_text_summary, points_attr, ChartConfig};
