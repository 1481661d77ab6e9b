//! Roll travel prices up the company hierarchy.
//!
//! A travel's price is added to the company it belongs to and to every
//! ancestor of that company, root included. Travels whose company is not in
//! the tree are skipped and reported.

use crate::hierarchy::{CompanyTree, NodeId};
use crate::parser::TravelRecord;
use log::{debug, warn};

/// Result of applying a single travel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelOutcome {
    /// Price added to `node` and its ancestors; `levels` nodes were updated
    Applied { node: NodeId, levels: usize },

    /// No company in the tree matches the travel's company id
    Unresolved,
}

/// Totals for a batch of travels
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostReport {
    /// Travels whose price was propagated
    pub applied: usize,

    /// Ids of travels whose company was not found
    pub unresolved: Vec<String>,

    /// Sum of prices that reached the root
    pub total_applied: f64,
}

impl CostReport {
    /// Get human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Applied: {} | Unresolved: {} | Total: {:.2}",
            self.applied,
            self.unresolved.len(),
            self.total_applied
        )
    }
}

/// Apply one travel to the tree
///
/// **Public** - single-record entry point
pub fn apply_travel(tree: &mut CompanyTree, travel: &TravelRecord) -> TravelOutcome {
    let Some(node) = tree.find(&travel.company_id) else {
        return TravelOutcome::Unresolved;
    };

    let mut levels = 0;
    let mut current = Some(node);

    // Walk up the parent chain, root inclusive
    while let Some(id) = current {
        let company = tree.node_mut(id);
        company.cost += travel.price;
        current = company.parent();
        levels += 1;
    }

    TravelOutcome::Applied { node, levels }
}

/// Apply every travel in sequence
///
/// **Public** - main entry point for cost aggregation
///
/// Final costs do not depend on the order of `travels`.
pub fn apply_all(tree: &mut CompanyTree, travels: &[TravelRecord]) -> CostReport {
    debug!("Applying {} travels to {} companies", travels.len(), tree.len());

    let mut report = CostReport::default();

    for travel in travels {
        match apply_travel(tree, travel) {
            TravelOutcome::Applied { .. } => {
                report.applied += 1;
                report.total_applied += travel.price;
            }
            TravelOutcome::Unresolved => {
                warn!(
                    "Ignoring travel {}: company {} not in tree",
                    travel.id, travel.company_id
                );
                report.unresolved.push(travel.id.clone());
            }
        }
    }

    debug!("{}", report.summary());

    report
}
