//! Aggregation of travel expenses into company costs.
//!
//! Each travel contributes its price to the owning company and to every
//! company above it, so a node's cost covers its whole subtree.

pub mod cost;

// Re-export main types and functions
pub use cost::{apply_all, apply_travel, CostReport, TravelOutcome};
