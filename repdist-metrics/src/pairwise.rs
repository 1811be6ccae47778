//! Pairwise distance computation over sequence sets.
//!
//! Evaluates a metric over all unordered pairs of an input list and returns
//! the condensed upper-triangle vector of length `n * (n - 1) / 2`, with
//! pairs enumerated row-major: `(0,1), (0,2), ..., (0,n-1), (1,2), ...`.
//! Rows are computed in parallel when the `parallel` feature is enabled;
//! the output is identical either way.

use repdist_core::{RepdistError, Result};

use crate::Metric;

/// Condensed pairwise distances of `sequences` under `metric`.
///
/// Returns an empty vector for fewer than two sequences. The first scoring
/// error aborts the whole batch.
pub fn pairwise<M, S>(metric: &M, sequences: &[S]) -> Result<Vec<f64>>
where
    M: Metric + Sync,
    S: AsRef<[u8]> + Sync,
{
    let n = sequences.len();
    if n < 2 {
        return Ok(Vec::new());
    }

    #[cfg(feature = "parallel")]
    let condensed = {
        use rayon::prelude::*;
        (0..n)
            .into_par_iter()
            .map(|i| {
                ((i + 1)..n)
                    .map(|j| metric.score(sequences[i].as_ref(), sequences[j].as_ref()))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect::<Vec<f64>>()
    };

    #[cfg(not(feature = "parallel"))]
    let condensed = {
        let mut condensed = Vec::with_capacity(n * (n - 1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                condensed.push(metric.score(sequences[i].as_ref(), sequences[j].as_ref())?);
            }
        }
        condensed
    };

    Ok(condensed)
}

/// Pairwise distances of `sequences` under `metric`, wrapped in a
/// [`DistanceMatrix`].
///
/// # Errors
///
/// Returns an error for fewer than two sequences or on any scoring failure.
pub fn pairwise_matrix<M, S>(metric: &M, sequences: &[S]) -> Result<DistanceMatrix>
where
    M: Metric + Sync,
    S: AsRef<[u8]> + Sync,
{
    let n = sequences.len();
    if n < 2 {
        return Err(RepdistError::InvalidInput(
            "need at least 2 sequences".into(),
        ));
    }
    DistanceMatrix::from_condensed(pairwise(metric, sequences)?, n)
}

/// Symmetric distance matrix stored in condensed upper-triangle form.
///
/// For `n` sequences the condensed vector has `n * (n - 1) / 2` elements.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    condensed: Vec<f64>,
    n: usize,
}

impl DistanceMatrix {
    /// Create from a pre-computed condensed distance vector.
    ///
    /// # Errors
    ///
    /// Returns an error if `condensed.len() != n * (n - 1) / 2`.
    pub fn from_condensed(condensed: Vec<f64>, n: usize) -> Result<Self> {
        let expected = n * (n - 1) / 2;
        if condensed.len() != expected {
            return Err(RepdistError::InvalidInput(format!(
                "condensed length {} doesn't match n={} (expected {})",
                condensed.len(),
                n,
                expected
            )));
        }
        Ok(Self { condensed, n })
    }

    /// Distance between sequences `i` and `j`.
    ///
    /// Returns 0.0 on the diagonal.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        if i == j {
            return 0.0;
        }
        let (a, b) = if i < j { (i, j) } else { (j, i) };
        self.condensed[self.index(a, b)]
    }

    /// Number of sequences.
    pub fn n(&self) -> usize {
        self.n
    }

    /// The raw condensed storage.
    pub fn condensed(&self) -> &[f64] {
        &self.condensed
    }

    /// Consume the matrix, returning the condensed storage.
    pub fn into_condensed(self) -> Vec<f64> {
        self.condensed
    }

    /// Expand to the dense symmetric `n x n` form.
    pub fn squareform(&self) -> Vec<Vec<f64>> {
        (0..self.n)
            .map(|i| (0..self.n).map(|j| self.get(i, j)).collect())
            .collect()
    }

    /// Map `(i, j)` with `i < j` to the condensed index.
    fn index(&self, i: usize, j: usize) -> usize {
        // row i starts at position i*n - i*(i+1)/2
        i * self.n - i * (i + 1) / 2 + (j - i - 1)
    }
}
