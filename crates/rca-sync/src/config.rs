//! Engine configuration

use crate::error::ConfigError;
use rca_whywhy::MAX_DEPTH;
use serde::{Deserialize, Serialize};

/// What to do with a toggle that names no catalogued statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidTogglePolicy {
    /// Return `InvalidArgument` (development builds)
    #[default]
    Reject,
    /// Log a warning and return the state unchanged (production builds)
    Ignore,
}

/// Which same-text nodes a toggle-off removes from the forest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PruneScope {
    /// Every node whose text equals the statement, at any depth
    #[default]
    Everywhere,
    /// Root-level nodes only; nested manual nodes survive
    RootsOnly,
}

/// Sync engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Deepest forest level accepted before a toggle (at most [`MAX_DEPTH`])
    pub max_depth: usize,
    /// Handling of uncatalogued toggles
    pub invalid_toggle: InvalidTogglePolicy,
    /// Scope of same-text removal on toggle-off
    pub prune_same_text: PruneScope,
}

impl SyncConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With depth guard
    #[inline]
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// With invalid toggle policy
    #[inline]
    #[must_use]
    pub fn with_invalid_toggle(mut self, policy: InvalidTogglePolicy) -> Self {
        self.invalid_toggle = policy;
        self
    }

    /// With prune scope
    #[inline]
    #[must_use]
    pub fn with_prune_same_text(mut self, scope: PruneScope) -> Self {
        self.prune_same_text = scope;
        self
    }

    /// Parse and validate configuration from TOML text
    ///
    /// Missing keys take their defaults.
    ///
    /// # Errors
    /// - [`ConfigError::Parse`] if the text is not valid TOML for this shape
    /// - [`ConfigError::DepthOutOfRange`] if `max_depth` is 0 or too large
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// Returns [`ConfigError::DepthOutOfRange`] if `max_depth` is 0 or above
    /// [`MAX_DEPTH`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 || self.max_depth > MAX_DEPTH {
            return Err(ConfigError::DepthOutOfRange {
                got: self.max_depth,
                max: MAX_DEPTH,
            });
        }
        Ok(())
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            invalid_toggle: InvalidTogglePolicy::Reject,
            prune_same_text: PruneScope::Everywhere,
        }
    }
}
