//! Smith-Waterman local alignment, score only.
//!
//! Returns the maximum cell of the local-alignment DP matrix; no traceback
//! is computed. Gaps use a linear model where the first inserted residue
//! costs `gap_open` and each further residue costs `gap_extend`, scanned
//! explicitly over all candidate gap lengths per cell. Cells are clamped at
//! zero, giving local-alignment semantics.

use std::sync::Arc;

use repdist_core::{RepdistError, Result};

use crate::substitution::SubstitutionMatrix;

/// Score-only local aligner over a shared substitution matrix.
///
/// The scoring grid is allocated per call; instances hold no mutable state
/// and can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct SmithWaterman {
    matrix: Arc<SubstitutionMatrix>,
    gap_open: f64,
    gap_extend: f64,
}

impl SmithWaterman {
    /// Create an aligner.
    ///
    /// # Errors
    ///
    /// Returns an error if either penalty is negative or non-finite.
    pub fn new(matrix: Arc<SubstitutionMatrix>, gap_open: f64, gap_extend: f64) -> Result<Self> {
        for (name, penalty) in [("gap_open", gap_open), ("gap_extend", gap_extend)] {
            if !penalty.is_finite() || penalty < 0.0 {
                return Err(RepdistError::InvalidConfig(format!(
                    "{name} penalty must be finite and non-negative, got {penalty}"
                )));
            }
        }
        Ok(Self {
            matrix,
            gap_open,
            gap_extend,
        })
    }

    /// The substitution matrix this aligner scores with.
    pub fn matrix(&self) -> &Arc<SubstitutionMatrix> {
        &self.matrix
    }

    /// Maximum local-alignment score between `a` and `b`.
    ///
    /// Returns 0.0 if either sequence is empty or no positive-scoring
    /// alignment exists.
    ///
    /// # Errors
    ///
    /// Propagates [`RepdistError::UnknownResidue`] for residues outside the
    /// matrix alphabet.
    pub fn score(&self, a: &[u8], b: &[u8]) -> Result<f64> {
        let n = a.len();
        let m = b.len();
        if n == 0 || m == 0 {
            return Ok(0.0);
        }

        let cols = m + 1;
        let mut h = vec![0.0f64; (n + 1) * cols];
        let idx = |i: usize, j: usize| -> usize { i * cols + j };

        let mut max_score = 0.0f64;
        for i in 1..=n {
            for j in 1..=m {
                let sub = self.matrix.score(a[i - 1], b[j - 1])?;
                let diag = h[idx(i - 1, j - 1)] + sub;

                // best gap ending here along each axis, clamped at 0
                let mut up = 0.0f64;
                for t in 1..=i {
                    let s = h[idx(i - t, j)] - self.gap_open - (t - 1) as f64 * self.gap_extend;
                    if s > up {
                        up = s;
                    }
                }
                let mut left = 0.0f64;
                for t in 1..=j {
                    let s = h[idx(i, j - t)] - self.gap_open - (t - 1) as f64 * self.gap_extend;
                    if s > left {
                        left = s;
                    }
                }

                let cell = diag.max(up).max(left).max(0.0);
                if cell > max_score {
                    max_score = cell;
                }
                h[idx(i, j)] = cell;
            }
        }
        Ok(max_score)
    }

    /// Self-alignment score of `a`.
    ///
    /// For a sequence aligned against itself the maximum collapses to the
    /// cumulative diagonal substitution score, so the full grid is skipped.
    pub fn identity(&self, a: &[u8]) -> Result<f64> {
        let mut score = 0.0;
        for &residue in a {
            score += self.matrix.score(residue, residue)?;
        }
        Ok(score)
    }
}
