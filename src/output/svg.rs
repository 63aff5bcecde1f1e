//! SVG chart sheet output writer.

use super::json::{create_parent_dirs, validate_output_path};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write SVG content to a file
///
/// **Public** - main entry point for SVG output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_svg(svg_content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing SVG to: {}", output_path.display());

    validate_output_path(output_path)?;
    if output_path.extension().map_or(true, |ext| ext != "svg") {
        debug!("Warning: File does not have .svg extension: {}", output_path.display());
    }
    create_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(svg_content.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    let file_size = svg_content.len();
    info!(
        "SVG written successfully ({} bytes, {:.2} KB)",
        file_size,
        file_size as f64 / 1024.0
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_svg() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("charts/dashboard.svg");

        write_svg("<svg></svg>", &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg></svg>");
    }

    #[test]
    fn test_write_svg_to_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(write_svg("<svg></svg>", temp_dir.path()).is_err());
    }
}
