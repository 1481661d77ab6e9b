//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default timeout for fetching a source over HTTP
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Default companies source (JSON array of `{id, name, parentId}`)
pub const DEFAULT_COMPANIES_SOURCE: &str =
    "https://5f27781bf5d27e001612e057.mockapi.io/webprovise/companies";

/// Default travels source (JSON array of `{id, price, companyId}`)
pub const DEFAULT_TRAVELS_SOURCE: &str =
    "https://5f27781bf5d27e001612e057.mockapi.io/webprovise/travels";

/// Where the finished tree is written when no path is given
pub const DEFAULT_OUTPUT_PATH: &str = "artifacts/company_tree.json";

// Environment variables consulted by the CLI before falling back to the defaults above
pub const COMPANIES_SOURCE_ENV: &str = "COMPANY_TREE_COMPANIES";
pub const TRAVELS_SOURCE_ENV: &str = "COMPANY_TREE_TRAVELS";

/// URL schemes fetched over HTTP; anything else is read from the filesystem
pub const REMOTE_SCHEMES: &[&str] = &["http://", "https://"];

/// Slack allowed when re-checking rolled-up costs read back from disk
pub const COST_TOLERANCE: f64 = 1e-6;
