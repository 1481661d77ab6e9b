use crate::utils::config::{
    DEFAULT_COMPANIES_SOURCE, DEFAULT_FETCH_TIMEOUT, DEFAULT_OUTPUT_PATH, DEFAULT_TRAVELS_SOURCE,
};
use std::path::PathBuf;
use std::time::Duration;

/// Arguments for the build command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct BuildArgs {
    /// Companies source (URL or file path)
    pub companies_source: String,

    /// Travels source (URL or file path)
    pub travels_source: String,

    /// Output path for the JSON tree
    pub output_json: PathBuf,

    /// Print the JSON tree to stdout after writing it
    pub echo: bool,

    /// Print elapsed time per stage
    pub timings: bool,

    /// Timeout for each remote fetch
    pub timeout: Duration,
}

impl Default for BuildArgs {
    fn default() -> Self {
        Self {
            companies_source: DEFAULT_COMPANIES_SOURCE.to_string(),
            travels_source: DEFAULT_TRAVELS_SOURCE.to_string(),
            output_json: PathBuf::from(DEFAULT_OUTPUT_PATH),
            echo: false,
            timings: false,
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}
