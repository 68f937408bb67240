//! RCA Sync Engine
//!
//! Keeps three independently editable views of an incident's root causes
//! in step:
//! - the checklist of catalogued statements ([`rca_checklist`])
//! - the Why-Why causal forest ([`rca_whywhy`])
//! - the SCAT grid text blocks ([`rca_scat`])
//!
//! A checklist toggle enters through [`SyncEngine::apply_toggle`] only, which
//! returns a complete next [`SyncState`]; the three components never update
//! each other directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use rca_sync::{SyncConfig, SyncEngine, SyncState};
//! use rca_checklist::{Category, OTHER};
//! use rca_scat::ScatField;
//!
//! let engine = SyncEngine::new(SyncConfig::new());
//! let state = engine.apply_toggle(&SyncState::new(), Category::CompanyPolicy, OTHER)?;
//!
//! assert_eq!(state.block_lines(ScatField::LackOfControl), ["- อื่นๆ (Other)"]);
//! assert!(state.forest.find_by_text(OTHER).is_some());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod audit;
pub mod config;
pub mod edit;
pub mod engine;
pub mod error;
pub mod mapping;
pub mod state;

// Re-exports for convenience
pub use audit::Inconsistency;
pub use config::{InvalidTogglePolicy, PruneScope, SyncConfig};
pub use engine::SyncEngine;
pub use error::{ConfigError, SyncError, SyncResult};
pub use mapping::CategoryMapping;
pub use state::SyncState;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving the sync engine
    pub use crate::{CategoryMapping, SyncConfig, SyncEngine, SyncError, SyncState};
    pub use rca_checklist::{Category, RootCauseAnalysis, OTHER};
    pub use rca_scat::{ScatAnalysis, ScatField};
    pub use rca_whywhy::{Forest, NodeId};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
