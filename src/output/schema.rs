//! Output JSON schema for the finished hierarchy.
//!
//! Only `id`, `name`, `cost` and `children` are written; parent links stay
//! internal to the arena.

use crate::hierarchy::{CompanyNode, CompanyTree, NodeId};
use serde::{Deserialize, Serialize};

/// One company in the rendered tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyReport {
    pub id: String,
    pub name: String,

    /// Rolled-up travel cost of this company and its descendants
    pub cost: f64,

    #[serde(default)]
    pub children: Vec<CompanyReport>,
}

impl CompanyReport {
    /// Companies in this subtree, self included
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Find the first company with `id`, depth-first
    pub fn find(&self, id: &str) -> Option<&CompanyReport> {
        self.iter().find(|report| report.id == id)
    }

    /// Depth-first pre-order walk over this subtree
    pub fn iter(&self) -> ReportIter<'_> {
        ReportIter { stack: vec![self] }
    }

    /// Ids of companies whose cost is below the sum of their children's
    ///
    /// Prices are never negative, so a node's own travels only ever add to
    /// its cost and a well-formed tree yields an empty list.
    pub fn cost_violations(&self, tolerance: f64) -> Vec<String> {
        self.iter()
            .filter(|report| {
                let children_cost: f64 = report.children.iter().map(|c| c.cost).sum();
                report.cost + tolerance < children_cost
            })
            .map(|report| report.id.clone())
            .collect()
    }
}

// Drop children from a flat work list so deep chains don't recurse
impl Drop for CompanyReport {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut child) = pending.pop() {
            pending.append(&mut child.children);
        }
    }
}

/// Iterator returned by [`CompanyReport::iter`]
pub struct ReportIter<'a> {
    stack: Vec<&'a CompanyReport>,
}

impl<'a> Iterator for ReportIter<'a> {
    type Item = &'a CompanyReport;

    fn next(&mut self) -> Option<&'a CompanyReport> {
        let current = self.stack.pop()?;
        self.stack.extend(current.children.iter().rev());
        Some(current)
    }
}

/// Convert the arena tree into its nested output form
///
/// **Public** - used before writing and in tests
///
/// Nodes are visited in reverse pre-order, so every subtree is finished
/// before its parent and sits on `done` with the first child on top.
pub fn to_report(tree: &CompanyTree) -> CompanyReport {
    let order: Vec<NodeId> = tree.iter().collect();
    let mut done: Vec<CompanyReport> = Vec::with_capacity(order.len());

    // order[0] is the root
    for &id in order[1..].iter().rev() {
        let node = tree.node(id);
        let children = take_children(&mut done, node.children().len());
        done.push(report_node(node, children));
    }

    let root = tree.root_node();
    let children = take_children(&mut done, root.children().len());
    report_node(root, children)
}

fn take_children(done: &mut Vec<CompanyReport>, count: usize) -> Vec<CompanyReport> {
    let mut children = done.split_off(done.len() - count);
    children.reverse();
    children
}

fn report_node(node: &CompanyNode, children: Vec<CompanyReport>) -> CompanyReport {
    CompanyReport {
        id: node.id.clone(),
        name: node.name.clone(),
        cost: node.cost,
        children,
    }
}
