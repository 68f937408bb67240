//! Root-Cause Checklist
//!
//! Fixed catalogue of canonical causal statements grouped in five
//! categories, and the per-incident selection of those statements.
//!
//! # Core Concepts
//!
//! - [`Category`]: The five checklist groups (`personalFactors` .. `companyPolicy`)
//! - [`catalogue`]: The fixed statements offered for each group
//! - [`RootCauseAnalysis`]: Set of selected statements per group
//! - [`toggle_statement`]: Set toggle reporting whether the statement was added
//!
//! # Example
//!
//! ```rust,ignore
//! use rca_checklist::{Category, RootCauseAnalysis, OTHER};
//!
//! let (rca, added) = RootCauseAnalysis::new().toggle(Category::CompanyPolicy, OTHER);
//! assert!(added);
//! assert!(rca.contains(Category::CompanyPolicy, OTHER));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod analysis;
mod catalogue;
mod category;
mod error;

// Re-exports
pub use analysis::{toggle_statement, RootCauseAnalysis};
pub use catalogue::{catalogue, catalogue_position, is_catalogued, OTHER};
pub use category::Category;
pub use error::ChecklistError;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
