// ─────────────────────────────────────────────────────────────────────
// HyperNav — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for HyperNav configuration and snapshot loading.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HyperNavError {
    /// Invalid or unparsable configuration.
    #[error("config error: {0}")]
    Config(String),

    /// A value handed in from outside (e.g. a restored pose) violates
    /// a geometric invariant.
    #[error("validation error: {0}")]
    Validation(String),
}

pub type HyperNavResult<T> = Result<T, HyperNavError>;
