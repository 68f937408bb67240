//! Error types for the sync engine
//!
//! Provides error handling for:
//! - Toggles that do not name a catalogued statement (UI wiring defects)
//! - Forest edits that miss their node or hit the depth guard
//! - Configuration loading

use rca_checklist::ChecklistError;
use rca_whywhy::TreeError;

/// Main sync error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    /// Toggle names a category or statement outside the fixed catalogue
    #[error("invalid toggle: '{statement}' is not a catalogued statement of '{category}'")]
    InvalidArgument { category: String, statement: String },

    /// Forest operation failed
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),

    /// Checklist lookup or validation failed
    #[error("checklist error: {0}")]
    Checklist(#[from] ChecklistError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SyncError {
    /// Create invalid argument error
    pub fn invalid_argument(category: impl Into<String>, statement: impl Into<String>) -> Self {
        Self::InvalidArgument {
            category: category.into(),
            statement: statement.into(),
        }
    }

    /// Check if error is the non-fatal missing-node case
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Tree(err) if err.is_not_found())
    }

    /// Check if error points at a caller defect rather than user data
    #[inline]
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. } | Self::Checklist(_))
    }
}

/// Errors while loading [`crate::SyncConfig`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// TOML could not be parsed into a config
    #[error("parse failed: {0}")]
    Parse(String),

    /// Depth guard outside the supported range
    #[error("max_depth must be between 1 and {max}, got {got}")]
    DepthOutOfRange { got: usize, max: usize },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for sync operations
pub type SyncResult<T> = Result<T, SyncError>;
