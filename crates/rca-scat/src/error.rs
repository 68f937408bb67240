//! Error types for SCAT blocks

/// Errors related to SCAT fields
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScatError {
    /// Field key is not one of the five SCAT columns
    #[error("unknown SCAT field: '{0}'")]
    UnknownField(String),
}
