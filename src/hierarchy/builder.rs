//! Assemble a [`CompanyTree`] from a flat list of company records.
//!
//! Records are processed once, in input order. A record can only attach to a
//! parent that is already in the tree; anything else is dropped and reported.
//! Callers that want every company attached must list the root first and
//! every parent before its children.

use super::tree::CompanyTree;
use crate::parser::CompanyRecord;
use crate::utils::error::BuildError;
use log::{debug, warn};

/// What happened to the records that did not end up in the tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Companies placed in the tree, root included
    pub attached: usize,

    /// Ids of records whose parent was not in the tree when they were read
    pub unresolved_parents: Vec<String>,

    /// Ids of root records seen after the first one
    pub extra_roots: Vec<String>,
}

impl BuildReport {
    /// Number of records that were read but not attached
    pub fn dropped(&self) -> usize {
        self.unresolved_parents.len() + self.extra_roots.len()
    }

    /// Get human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Attached: {} | Unresolved parents: {} | Extra roots: {}",
            self.attached,
            self.unresolved_parents.len(),
            self.extra_roots.len()
        )
    }
}

/// Build the hierarchy, discarding the report
///
/// **Public** - main entry point for tree construction
///
/// # Errors
/// * `BuildError::EmptyInput` - `records` is empty
/// * `BuildError::NoRoot` - no record lacks a parent
/// * `BuildError::DuplicateId` - a record reuses an id already in the tree
pub fn build(records: &[CompanyRecord]) -> Result<CompanyTree, BuildError> {
    build_with_report(records).map(|(tree, _)| tree)
}

/// Build the hierarchy and report dropped records
///
/// **Public** - used by the build command to surface dropped records
///
/// # Algorithm
/// 1. The first record without a parent becomes the root
/// 2. Records before it, and records whose parent is not yet attached, are dropped
/// 3. Every other record is appended to its parent's children
pub fn build_with_report(
    records: &[CompanyRecord],
) -> Result<(CompanyTree, BuildReport), BuildError> {
    if records.is_empty() {
        return Err(BuildError::EmptyInput);
    }

    debug!("Building hierarchy from {} company records", records.len());

    let mut report = BuildReport::default();
    let mut records = records.iter();

    let mut tree = loop {
        match records.next() {
            Some(record) if record.is_root() => {
                debug!("Root company: {} ({})", record.id, record.name);
                break CompanyTree::with_root(&record.id, &record.name);
            }
            Some(record) => {
                warn!(
                    "Dropping company {}: appears before the root company",
                    record.id
                );
                report.unresolved_parents.push(record.id.clone());
            }
            None => return Err(BuildError::NoRoot),
        }
    };

    for record in records {
        if tree.contains(&record.id) {
            return Err(BuildError::DuplicateId(record.id.clone()));
        }

        let Some(parent_id) = record.parent_id.as_deref() else {
            warn!(
                "Dropping company {}: root already set to {}",
                record.id,
                tree.root_node().id
            );
            report.extra_roots.push(record.id.clone());
            continue;
        };

        match tree.find(parent_id) {
            Some(parent) => {
                tree.attach(parent, &record.id, &record.name);
            }
            None => {
                warn!(
                    "Dropping company {}: parent {} not in tree",
                    record.id, parent_id
                );
                report.unresolved_parents.push(record.id.clone());
            }
        }
    }

    report.attached = tree.len();

    debug!("{}", report.summary());

    Ok((tree, report))
}
