//! Why-Why Causal Forest
//!
//! Ordered forest of causal chains used by incident investigation.
//!
//! # Core Concepts
//!
//! - [`NodeId`]: ULID identifier, unique across the forest and never reused
//! - [`WhyNode`]: Node with editable text and exclusively owned children
//! - [`Forest`]: Ordered roots; every edit returns a new forest
//! - [`NodeEntry`]: Depth-first listing row (parent and depth for indentation)
//! - [`NodeRecord`]: Flat pre-order record used for persistence
//!
//! # Example
//!
//! ```rust,ignore
//! use rca_whywhy::Forest;
//!
//! let (forest, why1) = Forest::new().insert_root("Truck left the lane");
//! let (forest, why2) = forest.insert_child(why1, "Driver was drowsy")?;
//! let forest = forest.update_text(why2, "Driver was drowsy after a night shift")?;
//!
//! for entry in forest.walk() {
//!     println!("{}{}", "  ".repeat(entry.depth), entry.text);
//! }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod error;
mod forest;
mod id;
mod node;
mod record;

// Re-exports
pub use error::TreeError;
pub use forest::{build_chain, Forest, NodeEntry, MAX_DEPTH};
pub use id::NodeId;
pub use node::WhyNode;
pub use record::NodeRecord;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn edit_then_persist_round_trip() {
        let (forest, root) = Forest::new().insert_root("Brake failure");
        let (forest, child) = forest.insert_child(root, "Worn pads").unwrap();
        let (forest, _) = forest.insert_child(child, "Missed inspection").unwrap();

        let records = forest.to_records();
        assert_eq!(records.len(), 3);

        let restored = Forest::from_records(&records, MAX_DEPTH).unwrap();
        assert_eq!(restored, forest);
    }

    #[test]
    fn template_chain_attaches_under_existing_node() {
        let (forest, root) = Forest::new().insert_root("Rear-end collision");
        let (forest, head) = forest
            .insert_chain(Some(root), &["Late braking", "Phone use", "No phone policy"])
            .unwrap();

        assert_eq!(forest.parent_of(head), Some(root));
        assert_eq!(forest.max_depth(), Some(3));
    }
}
