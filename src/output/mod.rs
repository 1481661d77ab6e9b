//! Output writers for the finished company tree.
//!
//! This module handles:
//! - Converting the arena into a nested `{id, name, cost, children}` form
//! - Writing it as pretty JSON to disk or to a string
//! - Reading a written tree back for validation

pub mod json;
pub mod schema;

// Re-export main functions
pub use json::{read_tree, tree_to_string, write_report, write_tree};
pub use schema::{to_report, CompanyReport};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
