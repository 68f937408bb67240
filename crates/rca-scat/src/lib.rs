//! SCAT Analysis Blocks
//!
//! Five free-text columns of the Systematic Cause Analysis Technique grid,
//! modelled as ordered lines. The sync engine owns only lines of the exact
//! form `"- <statement>"`; every other line belongs to the operator and is
//! never touched.
//!
//! # Core Concepts
//!
//! - [`ScatField`]: The five columns (`lackOfControl` .. `accident`)
//! - [`ScatBlock`]: One column as a list of lines
//! - [`ScatAnalysis`]: All five columns together
//! - [`append_bullet_line`] / [`remove_bullet_line`]: Literal line surgery
//!
//! # Example
//!
//! ```rust,ignore
//! use rca_scat::{ScatAnalysis, ScatField};
//!
//! let scat = ScatAnalysis::default()
//!     .append_bullet(ScatField::BasicCauses, "Fatigue (อ่อนเพลีย)");
//! assert_eq!(scat.block(ScatField::BasicCauses).to_text(), "- Fatigue (อ่อนเพลีย)");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod analysis;
mod block;
mod error;
mod field;

// Re-exports
pub use analysis::ScatAnalysis;
pub use block::{append_bullet_line, bullet, remove_bullet_line, ScatBlock, BULLET_PREFIX};
pub use error::ScatError;
pub use field::ScatField;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
