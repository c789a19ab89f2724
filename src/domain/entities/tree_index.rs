//! TreeIndex - the static hierarchical dictionary
//!
//! Nodes live in a flat arena in pre-order, so a node's descendants always
//! occupy the contiguous range directly after it. That gives O(1) subtree
//! ranges and a parent index that is always smaller than its children's.

use std::collections::HashMap;

use crate::domain::value_objects::NodeId;

use super::dictionary::{AreaNode, Category};

/// Position of a node inside a [`TreeIndex`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIdx(usize);

impl NodeIdx {
    pub fn get(self) -> usize {
        self.0
    }
}

/// Which dictionary a tree was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeKind {
    Industries,
    Areas,
}

impl TreeKind {
    pub fn name(&self) -> &'static str {
        match self {
            TreeKind::Industries => "industries",
            TreeKind::Areas => "areas",
        }
    }
}

impl std::fmt::Display for TreeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A node in the tree arena
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub id: NodeId,
    pub name: String,
    pub parent: Option<NodeIdx>,
    pub children: Vec<NodeIdx>,
    pub depth: usize,
    /// One past the last descendant in the arena
    subtree_end: usize,
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Immutable hierarchy with id lookup
#[derive(Debug, Clone)]
pub struct TreeIndex {
    kind: TreeKind,
    nodes: Vec<TreeNode>,
    roots: Vec<NodeIdx>,
    by_id: HashMap<NodeId, NodeIdx>,
}

/// Source-agnostic shape used while building the arena
struct Draft<'a> {
    id: &'a NodeId,
    name: &'a str,
    children: Vec<Draft<'a>>,
}

impl TreeIndex {
    pub fn empty(kind: TreeKind) -> Self {
        Self {
            kind,
            nodes: Vec::new(),
            roots: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Build a two-level industry tree
    pub fn from_categories(categories: &[Category]) -> Self {
        let drafts = categories
            .iter()
            .map(|c| Draft {
                id: &c.id,
                name: &c.name,
                children: c
                    .industries
                    .iter()
                    .map(|i| Draft {
                        id: &i.id,
                        name: &i.name,
                        children: Vec::new(),
                    })
                    .collect(),
            })
            .collect();
        Self::build(TreeKind::Industries, drafts)
    }

    /// Build an arbitrarily deep area tree
    pub fn from_areas(areas: &[AreaNode]) -> Self {
        fn draft(area: &AreaNode) -> Draft<'_> {
            Draft {
                id: &area.id,
                name: &area.name,
                children: area.areas.iter().map(draft).collect(),
            }
        }
        Self::build(TreeKind::Areas, areas.iter().map(draft).collect())
    }

    fn build(kind: TreeKind, drafts: Vec<Draft<'_>>) -> Self {
        let mut index = Self::empty(kind);
        for draft in drafts {
            if let Some(root) = index.insert(draft, None, 0) {
                index.roots.push(root);
            }
        }
        tracing::debug!(tree = %kind, nodes = index.nodes.len(), roots = index.roots.len(), "tree index built");
        index
    }

    fn insert(&mut self, draft: Draft<'_>, parent: Option<NodeIdx>, depth: usize) -> Option<NodeIdx> {
        if draft.id.is_empty() || self.by_id.contains_key(draft.id) {
            tracing::warn!(tree = %self.kind, id = %draft.id, "skipping duplicate or empty node id");
            return None;
        }

        let idx = NodeIdx(self.nodes.len());
        self.by_id.insert(draft.id.clone(), idx);
        self.nodes.push(TreeNode {
            id: draft.id.clone(),
            name: draft.name.trim().to_string(),
            parent,
            children: Vec::new(),
            depth,
            subtree_end: idx.0 + 1,
        });

        for child in draft.children {
            if let Some(child_idx) = self.insert(child, Some(idx), depth + 1) {
                self.nodes[idx.0].children.push(child_idx);
            }
        }
        self.nodes[idx.0].subtree_end = self.nodes.len();
        Some(idx)
    }

    pub fn kind(&self) -> TreeKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[NodeIdx] {
        &self.roots
    }

    pub fn node(&self, idx: NodeIdx) -> &TreeNode {
        &self.nodes[idx.0]
    }

    pub fn lookup(&self, id: &NodeId) -> Option<NodeIdx> {
        self.by_id.get(id).copied()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn children(&self, idx: NodeIdx) -> &[NodeIdx] {
        &self.nodes[idx.0].children
    }

    /// Every node, in pre-order (the flat id→node map)
    pub fn iter(&self) -> impl Iterator<Item = NodeIdx> + '_ {
        (0..self.nodes.len()).map(NodeIdx)
    }

    /// Descendants of `idx` in pre-order, excluding `idx` itself
    pub fn descendants(&self, idx: NodeIdx) -> impl Iterator<Item = NodeIdx> {
        (idx.0 + 1..self.nodes[idx.0].subtree_end).map(NodeIdx)
    }

    /// Ancestors from the direct parent up to the root
    pub fn ancestors(&self, idx: NodeIdx) -> Ancestors<'_> {
        Ancestors {
            index: self,
            next: self.nodes[idx.0].parent,
        }
    }

    pub fn is_descendant_of(&self, idx: NodeIdx, ancestor: NodeIdx) -> bool {
        idx.0 > ancestor.0 && idx.0 < self.nodes[ancestor.0].subtree_end
    }

    /// Number of leaves below `idx` (1 for a leaf)
    pub fn leaf_count(&self, idx: NodeIdx) -> usize {
        if self.node(idx).is_leaf() {
            1
        } else {
            self.descendants(idx)
                .filter(|d| self.node(*d).is_leaf())
                .count()
        }
    }

    /// Ancestor names joined root-first, e.g. `Russia / Moscow Oblast`
    pub fn breadcrumb(&self, idx: NodeIdx, separator: &str) -> String {
        let mut names: Vec<&str> = self
            .ancestors(idx)
            .map(|a| self.nodes[a.0].name.as_str())
            .collect();
        names.reverse();
        names.join(separator)
    }
}

/// Iterator over a node's ancestors
pub struct Ancestors<'a> {
    index: &'a TreeIndex,
    next: Option<NodeIdx>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeIdx;

    fn next(&mut self) -> Option<NodeIdx> {
        let current = self.next?;
        self.next = self.index.nodes[current.0].parent;
        Some(current)
    }
}
