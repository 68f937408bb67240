//! Error types for the checklist

use crate::category::Category;

/// Errors from checklist lookups and validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChecklistError {
    /// Category key is not one of the five checklist groups
    #[error("unknown checklist category: '{0}'")]
    UnknownCategory(String),

    /// Statement is not in the category's catalogue
    #[error("statement '{statement}' is not catalogued under {category}")]
    UnknownStatement {
        category: Category,
        statement: String,
    },
}

impl ChecklistError {
    /// Create unknown statement error
    pub fn unknown_statement(category: Category, statement: impl Into<String>) -> Self {
        Self::UnknownStatement {
            category,
            statement: statement.into(),
        }
    }
}
