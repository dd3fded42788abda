//! Generation failures

use rules::TableError;
use thiserror::Error;

/// Why a generation run failed; no partial system is ever returned
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    /// A ruleset table has no entry for a value the pipeline produced
    #[error("incomplete ruleset table: {0}")]
    Configuration(#[from] TableError),

    /// A derived geometric condition has no solution
    #[error("degenerate input: {reason}")]
    DegenerateInput { reason: String },
}

/// Reason code distinguishing the two kinds of failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Configuration,
    DegenerateInput,
}

impl GenerationError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Configuration(_) => FailureKind::Configuration,
            Self::DegenerateInput { .. } => FailureKind::DegenerateInput,
        }
    }

    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateInput {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::DegenerateInput => write!(f, "Degenerate Input"),
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;
