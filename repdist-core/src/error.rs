//! Structured error types for the repdist crates.

use thiserror::Error;

/// Unified error type for all repdist operations.
#[derive(Debug, Error)]
pub enum RepdistError {
    /// A residue byte was looked up that is absent from the substitution alphabet.
    #[error("unknown residue {:?} not present in the substitution alphabet", char::from(*.0))]
    UnknownResidue(u8),

    /// Two sequences were required to have equal length but do not.
    #[error("sequence length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A metric or matrix was constructed with invalid parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A self-alignment score degenerated to zero, leaving the distance undefined.
    #[error("degenerate self-alignment score: {0}")]
    DegenerateScore(String),

    /// Invalid input to a batch operation (bad shapes, inconsistent columns).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias used throughout the repdist crates.
pub type Result<T> = std::result::Result<T, RepdistError>;
