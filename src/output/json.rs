//! JSON tree output writer.
//!
//! Writes the finished hierarchy to JSON files with pretty formatting.

use super::schema::{to_report, CompanyReport};
use crate::hierarchy::CompanyTree;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write the tree to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `tree` - Hierarchy with costs applied
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_tree(tree: &CompanyTree, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    write_report(&to_report(tree), output_path)
}

/// Write an already converted tree to a JSON file
pub fn write_report(
    report: &CompanyReport,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing company tree to: {}", output_path.display());

    // Validate path
    super::validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    render_pretty(report, &mut writer)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "Company tree written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Render the tree as pretty JSON
///
/// **Public** - used for echoing the result to stdout
pub fn tree_to_string(tree: &CompanyTree) -> Result<String, OutputError> {
    let mut buffer = Vec::new();
    render_pretty(&to_report(tree), &mut buffer)?;

    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Pretty-print a report, growing the stack for deep trees
///
/// **Private** - shared by file and string output
fn render_pretty<W: Write>(report: &CompanyReport, writer: W) -> Result<(), OutputError> {
    let mut serializer = serde_json::Serializer::pretty(writer);
    report
        .serialize(serde_stacker::Serializer::new(&mut serializer))
        .map_err(OutputError::SerializationFailed)
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read a company tree from a JSON file
///
/// **Public** - used by the validate command and tests
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_tree(input_path: impl AsRef<Path>) -> Result<CompanyReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading company tree from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    // Written trees can be deeper than serde_json's default nesting limit
    let mut deserializer = serde_json::Deserializer::from_reader(BufReader::new(file));
    deserializer.disable_recursion_limit();

    let report = CompanyReport::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .map_err(OutputError::SerializationFailed)?;
    deserializer.end().map_err(OutputError::SerializationFailed)?;

    debug!(
        "Company tree loaded: root {}, {} companies",
        report.id,
        report.node_count()
    );

    Ok(report)
}
