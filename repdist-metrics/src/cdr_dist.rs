//! CdrDist: self-normalised local-alignment distance.

use std::sync::Arc;

use repdist_align::{SmithWaterman, SubstitutionMatrix};
use repdist_core::{RepdistError, Result};

use crate::Metric;

/// CdrDist distance between CDR3 sequences.
///
/// Normalises the local-alignment score of a pair by the geometric mean of
/// the two self-alignment scores:
///
/// `1 - sqrt(sw(a, b)^2 / (sw(a, a) * sw(b, b)))`
///
/// Self-alignment scores come from the aligner's identity fast path. A zero
/// (or negative) `sw(a, a) * sw(b, b)` product — e.g. an empty sequence —
/// leaves the distance undefined and is reported as
/// [`RepdistError::DegenerateScore`]. The result is not clamped into
/// `[0, 1]`.
#[derive(Debug, Clone)]
pub struct CdrDist {
    aligner: SmithWaterman,
}

impl CdrDist {
    /// Create a CdrDist metric over a substitution matrix and gap penalties.
    ///
    /// # Errors
    ///
    /// Returns an error if either penalty is negative or non-finite.
    pub fn new(
        matrix: Arc<SubstitutionMatrix>,
        gap_open: f64,
        gap_extend: f64,
    ) -> Result<Self> {
        Ok(Self {
            aligner: SmithWaterman::new(matrix, gap_open, gap_extend)?,
        })
    }
}

impl Default for CdrDist {
    /// The published default: BLOSUM45 with gap opening 10.0 and gap
    /// extension 1.0.
    fn default() -> Self {
        Self {
            aligner: SmithWaterman::new(Arc::new(SubstitutionMatrix::blosum45()), 10.0, 1.0)
                .expect("default penalties are valid"),
        }
    }
}

impl Metric for CdrDist {
    fn score(&self, a: &[u8], b: &[u8]) -> Result<f64> {
        // the pair alignment is the expensive part; the self-alignments
        // collapse to diagonal sums
        let ab = self.aligner.score(a, b)?;
        let aa = self.aligner.identity(a)?;
        let bb = self.aligner.identity(b)?;

        let denominator = aa * bb;
        if denominator <= 0.0 {
            return Err(RepdistError::DegenerateScore(format!(
                "self-alignment product {aa} * {bb} is not positive"
            )));
        }
        Ok(1.0 - ((ab * ab) / denominator).sqrt())
    }
}
