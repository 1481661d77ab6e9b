//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod build;
pub mod models;
pub mod timing;
pub mod utils;

// Re-export main command functions
pub use build::{execute_build, run_pipeline, validate_args, PipelineOutcome};
pub use models::BuildArgs;
pub use timing::StageTimer;
pub use utils::{display_version, validate_tree_file};
