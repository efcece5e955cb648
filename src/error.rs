//! Error types for sorting and dispatch.

/// Errors produced by sorting operations, dispatch and configuration loading.
///
/// Every failure is atomic: the input container is never touched and no partially sorted
/// output is returned.
#[derive(Debug, thiserror::Error)]
pub enum SortError {
    /// No family in the active precedence order (or the explicitly chosen family)
    /// defines the requested operation.
    #[error("the operation `{operation}` does not exist")]
    UnknownOperation { operation: String },

    /// A comparator was missing or cannot compare the operands of the resolved family.
    #[error("invalid compare function: {reason}")]
    InvalidComparator { reason: String },

    /// The ordering primitive could not complete.
    #[error("could not sort: {reason}")]
    SortFailure { reason: String },

    /// The configuration text is malformed.
    #[error("invalid sort configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl SortError {
    pub(crate) fn unknown_operation(operation: impl Into<String>) -> Self {
        Self::UnknownOperation {
            operation: operation.into(),
        }
    }

    pub(crate) fn sort_failure(reason: impl Into<String>) -> Self {
        Self::SortFailure {
            reason: reason.into(),
        }
    }
}
