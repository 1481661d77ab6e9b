//! Company hierarchy: arena storage and construction from records.

pub mod builder;
pub mod tree;

// Re-export main types and functions
pub use builder::{build, build_with_report, BuildReport};
pub use tree::{CompanyNode, CompanyTree, NodeId};
