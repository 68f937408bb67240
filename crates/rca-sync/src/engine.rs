//! Checklist toggle orchestration
//!
//! A toggle is the only transition that touches all three parts of
//! [`SyncState`]. Each call reads the full previous state and returns a full
//! next state; nothing is mutated in place and no partial result escapes.

use crate::config::{InvalidTogglePolicy, PruneScope, SyncConfig};
use crate::error::{SyncError, SyncResult};
use crate::mapping::CategoryMapping;
use crate::state::SyncState;
use rca_checklist::{is_catalogued, Category};
use rca_whywhy::Forest;

/// Applies checklist toggles across checklist, forest and SCAT grid
#[derive(Debug, Clone, Default)]
pub struct SyncEngine {
    config: SyncConfig,
}

impl SyncEngine {
    /// Create engine with configuration
    #[inline]
    #[must_use]
    pub fn new(config: SyncConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Toggle `statement` under `category`
    ///
    /// # Workflow
    /// 1. Toggle the statement in the category's checklist set
    /// 2. Added: insert a root node with the statement text unless a node
    ///    with that text already exists. Removed: prune nodes with that text
    ///    (scope per [`PruneScope`]) unless another category still ticks it
    /// 3. Resolve the SCAT column via [`CategoryMapping`]
    /// 4. Added: append the bullet line. Removed: remove it unless another
    ///    category feeding the same column still ticks the statement
    /// 5. Return the new state with all three parts replaced together
    ///
    /// # Errors
    /// - [`SyncError::InvalidArgument`] if `statement` is not catalogued
    ///   under `category` and the policy is [`InvalidTogglePolicy::Reject`]
    /// - [`SyncError::Tree`] if the incoming forest is malformed or deeper
    ///   than `max_depth`
    pub fn apply_toggle(
        &self,
        state: &SyncState,
        category: Category,
        statement: &str,
    ) -> SyncResult<SyncState> {
        if !is_catalogued(category, statement) {
            return self.refuse(state, SyncError::invalid_argument(category.as_str(), statement));
        }

        state.forest.validate(self.config.max_depth)?;

        let (root_cause, added) = state.root_cause.toggle(category, statement);

        // A statement still ticked elsewhere keeps its node; a bullet stays
        // while any category feeding its column still ticks it
        let field = CategoryMapping::target(category);
        let forest = if added {
            grow(&state.forest, statement)
        } else if root_cause.categories_of(statement).next().is_some() {
            state.forest.clone()
        } else {
            self.prune(&state.forest, statement)?
        };

        let scat = if added {
            state.scat.append_bullet(field, statement)
        } else if CategoryMapping::sources(field).any(|c| root_cause.contains(c, statement)) {
            state.scat.clone()
        } else {
            state.scat.remove_bullet(field, statement)
        };

        tracing::debug!(
            category = %category,
            statement,
            field = %field,
            added,
            nodes = forest.len(),
            "applied checklist toggle"
        );

        Ok(SyncState {
            root_cause,
            forest,
            scat,
        })
    }

    /// Toggle with the category given by its host key (e.g. `"companyPolicy"`)
    ///
    /// # Errors
    /// Same as [`Self::apply_toggle`]; an unknown key is an
    /// [`SyncError::InvalidArgument`] subject to the same policy
    pub fn apply_toggle_named(
        &self,
        state: &SyncState,
        category: &str,
        statement: &str,
    ) -> SyncResult<SyncState> {
        match category.parse::<Category>() {
            Ok(category) => self.apply_toggle(state, category, statement),
            Err(_) => self.refuse(state, SyncError::invalid_argument(category, statement)),
        }
    }

    /// Apply the invalid-toggle policy
    fn refuse(&self, state: &SyncState, err: SyncError) -> SyncResult<SyncState> {
        match self.config.invalid_toggle {
            InvalidTogglePolicy::Reject => Err(err),
            InvalidTogglePolicy::Ignore => {
                tracing::warn!(error = %err, "ignoring checklist toggle");
                Ok(state.clone())
            }
        }
    }

    /// Remove nodes whose text equals `statement`
    fn prune(&self, forest: &Forest, statement: &str) -> SyncResult<Forest> {
        let mut next = forest.clone();
        match self.config.prune_same_text {
            PruneScope::Everywhere => {
                // Each pass removes at least one node, so this terminates
                while let Some(id) = next.find_by_text(statement) {
                    next = next.remove_node(id)?;
                }
            }
            PruneScope::RootsOnly => {
                let doomed: Vec<_> = forest
                    .roots()
                    .iter()
                    .filter(|node| node.text == statement)
                    .map(|node| node.id)
                    .collect();
                for id in doomed {
                    next = match next.remove_node(id) {
                        Ok(pruned) => pruned,
                        Err(err) if err.is_not_found() => {
                            tracing::debug!(%id, "node already gone");
                            next
                        }
                        Err(err) => return Err(err.into()),
                    };
                }
            }
        }
        Ok(next)
    }
}

/// Add a root for `statement` unless some node already carries that text
fn grow(forest: &Forest, statement: &str) -> Forest {
    if forest.find_by_text(statement).is_some() {
        return forest.clone();
    }
    forest.insert_root(statement).0
}
