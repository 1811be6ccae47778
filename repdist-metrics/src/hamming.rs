//! Weighted Hamming distance.

use repdist_core::{RepdistError, Result};

use crate::Metric;

/// Hamming distance between equal-length sequences.
///
/// Sums `mismatch_score` over positions where the sequences differ.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hamming {
    mismatch_score: f64,
}

impl Hamming {
    /// Create a Hamming metric with the given per-position mismatch score.
    ///
    /// # Errors
    ///
    /// Returns an error if `mismatch_score` is negative or non-finite.
    pub fn new(mismatch_score: f64) -> Result<Self> {
        if !mismatch_score.is_finite() || mismatch_score < 0.0 {
            return Err(RepdistError::InvalidConfig(format!(
                "mismatch_score must be finite and non-negative, got {mismatch_score}"
            )));
        }
        Ok(Self { mismatch_score })
    }

    /// The configured mismatch score.
    pub fn mismatch_score(&self) -> f64 {
        self.mismatch_score
    }
}

impl Default for Hamming {
    fn default() -> Self {
        Self {
            mismatch_score: 1.0,
        }
    }
}

impl Metric for Hamming {
    fn score(&self, a: &[u8], b: &[u8]) -> Result<f64> {
        if a.len() != b.len() {
            return Err(RepdistError::LengthMismatch {
                left: a.len(),
                right: b.len(),
            });
        }
        let mismatches = a.iter().zip(b).filter(|(x, y)| x != y).count();
        Ok(mismatches as f64 * self.mismatch_score)
    }
}
