//! Arena-backed company tree.
//!
//! Nodes live in a flat `Vec` and refer to each other by [`NodeId`].
//! The tree owns every node; `parent` is a plain index used only to walk
//! upward during cost propagation.

use std::collections::HashMap;

/// Index of a node inside its [`CompanyTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A company in the hierarchy
#[derive(Debug, Clone)]
pub struct CompanyNode {
    pub id: String,
    pub name: String,

    /// Sum of travel prices attributed to this node and all descendants
    pub cost: f64,

    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl CompanyNode {
    fn new(id: String, name: String, parent: Option<NodeId>) -> Self {
        Self {
            id,
            name,
            cost: 0.0,
            children: Vec::new(),
            parent,
        }
    }

    /// Children in the order they were attached
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Rooted company hierarchy
///
/// Always holds at least the root, which is stored at index 0.
#[derive(Debug, Clone)]
pub struct CompanyTree {
    nodes: Vec<CompanyNode>,
    // Company ids are unique, so this resolves the same node a
    // depth-first first-match search would.
    by_id: HashMap<String, NodeId>,
}

impl CompanyTree {
    /// Create a tree holding only the root company
    pub fn with_root(id: impl Into<String>, name: impl Into<String>) -> Self {
        let root = CompanyNode::new(id.into(), name.into(), None);
        let mut by_id = HashMap::new();
        by_id.insert(root.id.clone(), NodeId(0));

        Self {
            nodes: vec![root],
            by_id,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn root_node(&self) -> &CompanyNode {
        &self.nodes[0]
    }

    /// Borrow a node by index
    ///
    /// `id` must come from this tree.
    pub fn node(&self, id: NodeId) -> &CompanyNode {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut CompanyNode {
        &mut self.nodes[id.0]
    }

    /// Look up a node by company id
    pub fn find(&self, company_id: &str) -> Option<NodeId> {
        self.by_id.get(company_id).copied()
    }

    /// Look up a node by company id and borrow it
    pub fn get(&self, company_id: &str) -> Option<&CompanyNode> {
        self.find(company_id).map(|id| self.node(id))
    }

    pub fn contains(&self, company_id: &str) -> bool {
        self.by_id.contains_key(company_id)
    }

    /// Attach a new company as the last child of `parent`
    ///
    /// Callers must ensure `id` is not already in the tree.
    pub(crate) fn attach(
        &mut self,
        parent: NodeId,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> NodeId {
        let node_id = NodeId(self.nodes.len());
        let node = CompanyNode::new(id.into(), name.into(), Some(parent));

        self.by_id.insert(node.id.clone(), node_id);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(node_id);

        node_id
    }

    /// Number of companies in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree cannot exist without its root
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `start` followed by each of its ancestors, ending at the root
    pub fn ancestors(&self, start: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: Some(start),
        }
    }

    /// Depth-first pre-order walk from the root, children in attach order
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            tree: self,
            stack: vec![self.root()],
        }
    }

    /// Number of edges on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root(), 0)];

        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(self.node(id).children.iter().map(|&child| (child, depth + 1)));
        }

        deepest
    }
}

/// Iterator returned by [`CompanyTree::ancestors`]
pub struct Ancestors<'a> {
    tree: &'a CompanyTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.node(current).parent;
        Some(current)
    }
}

/// Iterator returned by [`CompanyTree::iter`]
pub struct PreOrder<'a> {
    tree: &'a CompanyTree,
    stack: Vec<NodeId>,
}

impl Iterator for PreOrder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.stack.pop()?;
        // Reverse so the first child is visited first
        self.stack
            .extend(self.tree.node(current).children.iter().rev().copied());
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> CompanyTree {
        let mut tree = CompanyTree::with_root("1", "Root");
        let a = tree.attach(tree.root(), "2", "A");
        tree.attach(a, "3", "A1");
        tree.attach(tree.root(), "4", "B");
        tree
    }

    #[test]
    fn test_with_root() {
        let tree = CompanyTree::with_root("1", "Root");
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert!(tree.root_node().is_root());
        assert_eq!(tree.root_node().cost, 0.0);
    }

    #[test]
    fn test_attach_links_both_ways() {
        let tree = sample_tree();
        let a = tree.find("2").unwrap();
        let a1 = tree.find("3").unwrap();

        assert_eq!(tree.node(a1).parent(), Some(a));
        assert_eq!(tree.node(a).children(), &[a1]);
        assert_eq!(tree.node(tree.root()).children().len(), 2);
    }

    #[test]
    fn test_preorder_is_depth_first() {
        let tree = sample_tree();
        let ids: Vec<&str> = tree.iter().map(|n| tree.node(n).id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_ancestors_ends_at_root() {
        let tree = sample_tree();
        let leaf = tree.find("3").unwrap();
        let chain: Vec<&str> = tree
            .ancestors(leaf)
            .map(|n| tree.node(n).id.as_str())
            .collect();
        assert_eq!(chain, vec!["3", "2", "1"]);
    }

    #[test]
    fn test_depth() {
        assert_eq!(CompanyTree::with_root("1", "Root").depth(), 0);
        assert_eq!(sample_tree().depth(), 2);
    }

    #[test]
    fn test_depth_long_chain() {
        let mut tree = CompanyTree::with_root("0", "Root");
        let mut last = tree.root();
        for i in 1..=50_000 {
            last = tree.attach(last, i.to_string(), "Level");
        }
        assert_eq!(tree.depth(), 50_000);
    }

    #[test]
    fn test_find_unknown() {
        let tree = sample_tree();
        assert!(tree.find("99").is_none());
        assert!(!tree.contains("99"));
    }
}
