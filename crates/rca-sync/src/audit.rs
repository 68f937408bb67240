//! Read-only consistency check across the three representations
//!
//! Reports drift (e.g. a bullet line deleted by hand while the checklist
//! item stayed ticked). Never repairs; the host decides what to show.

use crate::engine::SyncEngine;
use crate::mapping::CategoryMapping;
use crate::state::SyncState;
use rca_checklist::{is_catalogued, Category};
use rca_scat::ScatField;
use std::fmt::{self, Display, Formatter};

/// One disagreement between checklist, forest and SCAT grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inconsistency {
    /// Ticked statement has no node with its text
    MissingTreeNode { category: Category, statement: String },

    /// Ticked statement has no bullet line in its column
    MissingBullet {
        category: Category,
        field: ScatField,
        statement: String,
    },

    /// Bullet line for a catalogued statement that no feeding category ticks
    OrphanBullet { field: ScatField, statement: String },
}

impl Display for Inconsistency {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTreeNode { category, statement } => {
                write!(f, "{category}: '{statement}' has no Why-Why node")
            }
            Self::MissingBullet {
                category,
                field,
                statement,
            } => write!(f, "{category}: '{statement}' has no bullet in {field}"),
            Self::OrphanBullet { field, statement } => {
                write!(f, "{field}: bullet '{statement}' is not ticked")
            }
        }
    }
}

impl SyncEngine {
    /// List every inconsistency in `state`, checklist order first
    #[must_use]
    pub fn audit(&self, state: &SyncState) -> Vec<Inconsistency> {
        let mut found = Vec::new();

        for category in Category::ALL {
            let field = CategoryMapping::target(category);
            let block = state.scat.block(field);
            for statement in state.root_cause.sorted_selection(category) {
                if state.forest.find_by_text(statement).is_none() {
                    found.push(Inconsistency::MissingTreeNode {
                        category,
                        statement: statement.to_string(),
                    });
                }
                if !block.contains_bullet(statement) {
                    found.push(Inconsistency::MissingBullet {
                        category,
                        field,
                        statement: statement.to_string(),
                    });
                }
            }
        }

        for field in ScatField::ALL.into_iter().filter(|f| f.is_sync_target()) {
            for statement in state.scat.block(field).bullet_statements() {
                let feeders: Vec<Category> = CategoryMapping::sources(field)
                    .filter(|category| is_catalogued(*category, statement))
                    .collect();
                let owned = feeders
                    .iter()
                    .any(|category| state.root_cause.contains(*category, statement));
                if !feeders.is_empty() && !owned {
                    found.push(Inconsistency::OrphanBullet {
                        field,
                        statement: statement.to_string(),
                    });
                }
            }
        }

        if !found.is_empty() {
            tracing::debug!(count = found.len(), "root-cause state has drifted");
        }
        found
    }
}
