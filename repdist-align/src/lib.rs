//! Substitution scoring and local alignment for immune-repertoire sequences.
//!
//! Provides [`SubstitutionMatrix`] — a residue-pair scoring table with
//! built-in BLOSUM variants — and [`SmithWaterman`], a score-only local
//! aligner with a linear gap model, used by the alignment-based distance
//! metrics.
//!
//! # Quick start
//!
//! ```
//! use std::sync::Arc;
//! use repdist_align::{SmithWaterman, SubstitutionMatrix};
//!
//! let matrix = Arc::new(SubstitutionMatrix::blosum45());
//! let aligner = SmithWaterman::new(matrix, 10.0, 1.0).unwrap();
//! let score = aligner.score(b"AASQ", b"PASQ").unwrap();
//! assert_eq!(score, 15.0);
//! ```

pub mod smith_waterman;
pub mod substitution;

pub use smith_waterman::SmithWaterman;
pub use substitution::SubstitutionMatrix;
