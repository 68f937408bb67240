//! Flat pre-order persistence for the forest
//!
//! Hosts that store rows rather than nested documents persist a forest as a
//! list of [`NodeRecord`]s in depth-first order. Loading rebuilds the nested
//! form without recursion and rejects anything that could not have been
//! produced by [`Forest::to_records`].

use crate::error::TreeError;
use crate::forest::{Forest, MAX_DEPTH};
use crate::id::NodeId;
use crate::node::WhyNode;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One node in pre-order position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<NodeId>,
    pub depth: usize,
    pub text: String,
}

impl Forest {
    /// Serialize to flat pre-order records
    #[must_use]
    pub fn to_records(&self) -> Vec<NodeRecord> {
        self.walk()
            .into_iter()
            .map(|entry| NodeRecord {
                id: entry.id,
                parent: entry.parent,
                depth: entry.depth,
                text: entry.text.to_string(),
            })
            .collect()
    }

    /// Rebuild a forest from pre-order records
    ///
    /// # Errors
    /// - [`TreeError::DuplicateId`] if an id repeats
    /// - [`TreeError::OrphanRecord`] if a parent id was never seen
    /// - [`TreeError::MalformedRecord`] if parent and depth disagree with
    ///   pre-order position
    /// - [`TreeError::DepthExceeded`] if a record sits at `max_depth` or deeper
    pub fn from_records(records: &[NodeRecord], max_depth: usize) -> Result<Self, TreeError> {
        let limit = max_depth.min(MAX_DEPTH);
        let mut seen: HashSet<NodeId> = HashSet::with_capacity(records.len());
        let mut roots = Vec::new();
        // Ancestors of the current record, outermost first
        let mut open: Vec<WhyNode> = Vec::new();

        for record in records {
            if record.depth >= limit {
                return Err(TreeError::DepthExceeded { limit });
            }
            if !seen.insert(record.id) {
                return Err(TreeError::DuplicateId(record.id));
            }

            if record.depth > open.len() {
                return Err(TreeError::malformed(
                    record.id,
                    format!("depth {} skips a level", record.depth),
                ));
            }
            close_to(&mut open, &mut roots, record.depth);

            match (record.parent, open.last()) {
                (None, None) => {}
                (Some(parent), Some(top)) if top.id == parent => {}
                (Some(parent), _) if !seen.contains(&parent) => {
                    return Err(TreeError::OrphanRecord {
                        id: record.id,
                        parent,
                    });
                }
                _ => {
                    return Err(TreeError::malformed(
                        record.id,
                        "parent does not match pre-order position",
                    ));
                }
            }

            open.push(WhyNode {
                id: record.id,
                text: record.text.clone(),
                children: Vec::new(),
            });
        }

        close_to(&mut open, &mut roots, 0);
        Ok(Self::from_roots(roots))
    }
}

/// Pop open nodes until `depth` remain, attaching each to its parent
fn close_to(open: &mut Vec<WhyNode>, roots: &mut Vec<WhyNode>, depth: usize) {
    while open.len() > depth {
        let Some(done) = open.pop() else { break };
        match open.last_mut() {
            Some(parent) => parent.children.push(done),
            None => roots.push(done),
        }
    }
}
