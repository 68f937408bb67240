//! Ordered forest of Why-Why chains
//!
//! Every edit is copy-and-rebuild: the receiver is borrowed, a new
//! [`Forest`] is returned and untouched subtrees keep their ids. Lookups and
//! listings walk with an explicit stack; edits recurse with a depth guard of
//! [`MAX_DEPTH`] levels.

use crate::error::TreeError;
use crate::id::NodeId;
use crate::node::WhyNode;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Recursion guard for edits (levels, roots are level 0)
pub const MAX_DEPTH: usize = 128;

/// Ordered list of root nodes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Forest {
    roots: Vec<WhyNode>,
}

/// Depth-first listing row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeEntry<'a> {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub depth: usize,
    pub text: &'a str,
}

impl Forest {
    /// Empty forest
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forest from already-built roots
    #[inline]
    #[must_use]
    pub fn from_roots(roots: Vec<WhyNode>) -> Self {
        Self { roots }
    }

    /// Root nodes in order
    #[inline]
    #[must_use]
    pub fn roots(&self) -> &[WhyNode] {
        &self.roots
    }

    /// Total number of nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.iter().map(WhyNode::subtree_len).sum()
    }

    /// Check if forest has no nodes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Append a new root node
    #[must_use]
    pub fn insert_root(&self, text: impl Into<String>) -> (Self, NodeId) {
        let node = WhyNode::new(text);
        let id = node.id;
        let mut roots = Vec::with_capacity(self.roots.len() + 1);
        roots.extend_from_slice(&self.roots);
        roots.push(node);
        (Self { roots }, id)
    }

    /// Append a new child under `parent`
    ///
    /// # Errors
    /// - [`TreeError::NotFound`] if `parent` is not in the forest
    /// - [`TreeError::DepthExceeded`] if the child would sit at [`MAX_DEPTH`]
    pub fn insert_child(
        &self,
        parent: NodeId,
        text: impl Into<String>,
    ) -> Result<(Self, NodeId), TreeError> {
        let child = WhyNode::new(text);
        let id = child.id;
        let forest = self.attach(parent, child)?;
        Ok((forest, id))
    }

    /// Replace the text of a node, structure unchanged
    ///
    /// # Errors
    /// Returns [`TreeError::NotFound`] if `id` is not in the forest
    pub fn update_text(&self, id: NodeId, text: impl Into<String>) -> Result<Self, TreeError> {
        let text = text.into();
        self.rewrite(id, |node| Some(node.with_text(text.clone())))
    }

    /// Remove a node together with its whole subtree
    ///
    /// # Errors
    /// Returns [`TreeError::NotFound`] if `id` is not in the forest
    pub fn remove_node(&self, id: NodeId) -> Result<Self, TreeError> {
        self.rewrite(id, |_| None)
    }

    /// Build a chain from `statements` and attach it as a new root, or as
    /// the last child of `parent`
    ///
    /// Returns the id of the chain head.
    ///
    /// # Errors
    /// - [`TreeError::EmptyChain`] if `statements` is empty
    /// - [`TreeError::NotFound`] if `parent` is given but missing
    /// - [`TreeError::DepthExceeded`] if the chain would reach [`MAX_DEPTH`]
    pub fn insert_chain<S: AsRef<str>>(
        &self,
        parent: Option<NodeId>,
        statements: &[S],
    ) -> Result<(Self, NodeId), TreeError> {
        let head = build_chain(statements).ok_or(TreeError::EmptyChain)?;
        let head_id = head.id;
        match parent {
            None => {
                if statements.len() > MAX_DEPTH {
                    return Err(TreeError::DepthExceeded { limit: MAX_DEPTH });
                }
                let mut roots = self.roots.clone();
                roots.push(head);
                Ok((Self { roots }, head_id))
            }
            Some(parent) => Ok((self.attach(parent, head)?, head_id)),
        }
    }

    /// First node, in depth-first order, whose text equals `text` exactly
    #[must_use]
    pub fn find_by_text(&self, text: &str) -> Option<NodeId> {
        self.preorder().find(|node| node.text == text).map(|node| node.id)
    }

    /// Every node whose text equals `text`, in depth-first order
    #[must_use]
    pub fn find_all_by_text(&self, text: &str) -> Vec<NodeId> {
        self.preorder()
            .filter(|node| node.text == text)
            .map(|node| node.id)
            .collect()
    }

    /// Look up node by id
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&WhyNode> {
        self.preorder().find(|node| node.id == id)
    }

    /// Check if node exists
    #[inline]
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Parent of a node (`None` for roots and for missing ids)
    #[must_use]
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.walk()
            .into_iter()
            .find(|entry| entry.id == id)
            .and_then(|entry| entry.parent)
    }

    /// Level of a node (roots are 0)
    #[must_use]
    pub fn depth_of(&self, id: NodeId) -> Option<usize> {
        self.walk()
            .into_iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.depth)
    }

    /// Number of levels in the deepest chain
    #[must_use]
    pub fn max_depth(&self) -> Option<usize> {
        self.walk().iter().map(|entry| entry.depth + 1).max()
    }

    /// Depth-first listing with parent and depth for indentation
    #[must_use]
    pub fn walk(&self) -> Vec<NodeEntry<'_>> {
        let mut out = Vec::new();
        let mut stack: Vec<(&WhyNode, Option<NodeId>, usize)> =
            self.roots.iter().rev().map(|node| (node, None, 0)).collect();

        while let Some((node, parent, depth)) = stack.pop() {
            out.push(NodeEntry {
                id: node.id,
                parent,
                depth,
                text: &node.text,
            });
            stack.extend(
                node.children
                    .iter()
                    .rev()
                    .map(|child| (child, Some(node.id), depth + 1)),
            );
        }
        out
    }

    /// Check id uniqueness and depth of a forest loaded from outside
    ///
    /// # Errors
    /// - [`TreeError::DuplicateId`] on the first repeated id
    /// - [`TreeError::DepthExceeded`] if any node sits at `max_depth` or deeper
    pub fn validate(&self, max_depth: usize) -> Result<(), TreeError> {
        let limit = max_depth.min(MAX_DEPTH);
        let mut seen = HashSet::new();
        for entry in self.walk() {
            if entry.depth >= limit {
                return Err(TreeError::DepthExceeded { limit });
            }
            if !seen.insert(entry.id) {
                return Err(TreeError::DuplicateId(entry.id));
            }
        }
        Ok(())
    }

    /// Pre-order iterator over nodes
    fn preorder(&self) -> impl Iterator<Item = &WhyNode> {
        let mut stack: Vec<&WhyNode> = self.roots.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    fn attach(&self, parent: NodeId, child: WhyNode) -> Result<Self, TreeError> {
        let parent_depth = self.depth_of(parent).ok_or(TreeError::NotFound(parent))?;
        if parent_depth + child.subtree_depth() >= MAX_DEPTH {
            return Err(TreeError::DepthExceeded { limit: MAX_DEPTH });
        }
        self.rewrite(parent, |node| Some(node.with_child(child.clone())))
    }

    fn rewrite<F>(&self, target: NodeId, edit: F) -> Result<Self, TreeError>
    where
        F: Fn(&WhyNode) -> Option<WhyNode>,
    {
        match rewrite_level(&self.roots, target, 0, &edit)? {
            Some(roots) => Ok(Self { roots }),
            None => Err(TreeError::NotFound(target)),
        }
    }
}

/// Rebuild one level of siblings with `edit` applied to `target`
///
/// Returns `None` if `target` is not below this level. Only the path from
/// the root to `target` is rebuilt; siblings are cloned as-is.
fn rewrite_level<F>(
    nodes: &[WhyNode],
    target: NodeId,
    depth: usize,
    edit: &F,
) -> Result<Option<Vec<WhyNode>>, TreeError>
where
    F: Fn(&WhyNode) -> Option<WhyNode>,
{
    if nodes.is_empty() {
        return Ok(None);
    }
    if depth >= MAX_DEPTH {
        return Err(TreeError::DepthExceeded { limit: MAX_DEPTH });
    }

    for (idx, node) in nodes.iter().enumerate() {
        if node.id == target {
            let mut next = Vec::with_capacity(nodes.len());
            next.extend_from_slice(&nodes[..idx]);
            next.extend(edit(node));
            next.extend_from_slice(&nodes[idx + 1..]);
            return Ok(Some(next));
        }

        if let Some(children) = rewrite_level(&node.children, target, depth + 1, edit)? {
            let mut next = nodes.to_vec();
            next[idx] = WhyNode {
                id: node.id,
                text: node.text.clone(),
                children,
            };
            return Ok(Some(next));
        }
    }

    Ok(None)
}

/// Build a linear chain `s0 -> s1 -> ... -> sn` with fresh ids
///
/// `s0` is the head; each following statement is the sole child of the one
/// before it. Returns `None` for an empty list.
#[must_use]
pub fn build_chain<S: AsRef<str>>(statements: &[S]) -> Option<WhyNode> {
    statements.iter().rev().fold(None, |below, statement| {
        let mut node = WhyNode::new(statement.as_ref());
        node.children.extend(below);
        Some(node)
    })
}
