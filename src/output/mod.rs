//! Output writers for reports and charts.
//!
//! This module handles writing data to disk:
//! - JSON dashboard reports
//! - SVG chart sheets

pub mod json;
pub mod svg;

// Re-export main functions
pub use json::{read_report, write_report};
pub use svg::write_svg;
