//! String-distance metrics and pairwise distance matrices for
//! immune-repertoire sequences.
//!
//! Provides a portfolio of distance metrics over short byte sequences
//! (T-cell receptor CDR3 regions and similar): alignment-based
//! ([`CdrDist`], [`TcrDist`]), edit-based ([`Levenshtein`],
//! [`OptimalStringAlignment`], [`LongestCommonSubstring`], [`Hamming`]),
//! and similarity-based ([`Jaro`], [`JaroWinkler`]) — plus a data-parallel
//! [`pairwise`] dispatcher producing condensed distance vectors.
//!
//! # Quick start
//!
//! ```
//! use repdist_metrics::{pairwise, Levenshtein, Metric};
//!
//! let metric = Levenshtein::default();
//! assert_eq!(metric.score(b"kitten", b"sitting").unwrap(), 3.0);
//!
//! let sequences = ["CASSLKPNTEAFF", "CASSAHIANYGYTF", "CASRGATETQYF"];
//! let distances = pairwise(&metric, &sequences).unwrap();
//! assert_eq!(distances.len(), 3);
//! ```

pub mod cdr_dist;
pub mod hamming;
pub mod jaro;
pub mod lcs;
pub mod levenshtein;
pub mod osa;
pub mod pairwise;
pub mod tcr_dist;

pub use cdr_dist::CdrDist;
pub use hamming::Hamming;
pub use jaro::{Jaro, JaroWinkler};
pub use lcs::LongestCommonSubstring;
pub use levenshtein::Levenshtein;
pub use osa::OptimalStringAlignment;
pub use pairwise::{pairwise, pairwise_matrix, DistanceMatrix};
pub use tcr_dist::{TcrDist, TcrDistProfile};

use repdist_core::Result;

/// A pairwise sequence distance.
///
/// Implementations are pure: the score depends only on the two inputs and
/// the immutable configuration, with no observable side effects, so a
/// metric can be shared read-only across worker threads. Per-call scratch
/// (e.g. a DP grid) is allocated inside `score`, never stored on the
/// metric.
pub trait Metric {
    /// Distance between two byte sequences.
    fn score(&self, a: &[u8], b: &[u8]) -> Result<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn cdr_dist_batch_end_to_end() {
        let metric = CdrDist::default();
        let d = pairwise(&metric, &["GTA", "HLA", "KKR"]).unwrap();
        assert_eq!(d.len(), 3);
        assert_close(d[0], 0.7288);
        assert_close(d[1], 1.0);
        assert_close(d[2], 1.0);

        let d = pairwise(&metric, &["AASQ", "PASQ"]).unwrap();
        assert_close(d[0], 0.3153);
    }

    #[test]
    fn levenshtein_batch_end_to_end() {
        let metric = Levenshtein::default();
        let d = pairwise(&metric, &["GTA", "HLA", "KKR"]).unwrap();
        assert_eq!(d, vec![2.0, 3.0, 3.0]);
        let d = pairwise(&metric, &["SEQVENCES", "SEQVENCES"]).unwrap();
        assert_eq!(d, vec![0.0]);
    }

    #[test]
    fn tcr_dist_batch_end_to_end() {
        let metric = TcrDist::new(
            std::sync::Arc::new(repdist_align::SubstitutionMatrix::blosum62()),
            4.0,
            b'-',
            1.0,
        )
        .unwrap();
        let d = pairwise(&metric, &["GTA", "HLA", "KKR"]).unwrap();
        assert_eq!(d, vec![8.0, 12.0, 12.0]);
    }

    #[test]
    fn jaro_batch_end_to_end() {
        let metric = Jaro::default();
        let d = pairwise(&metric, &["GTA", "HLA", "KKR"]).unwrap();
        assert_close(d[0], 4.0 / 9.0);
        assert_close(d[1], 1.0);
        assert_close(d[2], 1.0);
    }

    #[test]
    fn hamming_batch_end_to_end() {
        let metric = Hamming::default();
        let d = pairwise(&metric, &["GTA", "HLA", "KKR"]).unwrap();
        assert_eq!(d, vec![2.0, 3.0, 3.0]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn aa_seq(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            proptest::sample::select(b"ARNDCQEGHILKMFPSTWYV".to_vec()),
            min_len..=max_len,
        )
    }

    /// Equal-length pair for the metrics that require it.
    fn aa_pair_equal_len() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
        (1usize..=20).prop_flat_map(|len| (aa_seq(len, len), aa_seq(len, len)))
    }

    fn naive_levenshtein(a: &[u8], b: &[u8]) -> usize {
        let mut prev: Vec<usize> = (0..=b.len()).collect();
        for (i, &ca) in a.iter().enumerate() {
            let mut cur = vec![i + 1; b.len() + 1];
            for (j, &cb) in b.iter().enumerate() {
                cur[j + 1] = (prev[j] + usize::from(ca != cb))
                    .min(prev[j + 1] + 1)
                    .min(cur[j] + 1);
            }
            prev = cur;
        }
        prev[b.len()]
    }

    proptest! {
        #[test]
        fn banded_levenshtein_matches_naive_dp(a in aa_seq(0, 25), b in aa_seq(0, 25)) {
            let metric = Levenshtein::default();
            prop_assert_eq!(
                metric.score(&a, &b).unwrap(),
                naive_levenshtein(&a, &b) as f64
            );
        }

        #[test]
        fn self_distance_is_zero(a in aa_seq(1, 25)) {
            prop_assert_eq!(Levenshtein::default().score(&a, &a).unwrap(), 0.0);
            prop_assert_eq!(OptimalStringAlignment.score(&a, &a).unwrap(), 0.0);
            prop_assert_eq!(LongestCommonSubstring.score(&a, &a).unwrap(), 0.0);
            prop_assert_eq!(Hamming::default().score(&a, &a).unwrap(), 0.0);
            prop_assert!(Jaro::default().score(&a, &a).unwrap().abs() < 1e-12);
            prop_assert!(JaroWinkler::default().score(&a, &a).unwrap().abs() < 1e-12);
            prop_assert!(CdrDist::default().score(&a, &a).unwrap().abs() < 1e-12);
        }

        #[test]
        fn symmetry(a in aa_seq(0, 25), b in aa_seq(0, 25)) {
            let lev = Levenshtein::default();
            prop_assert_eq!(lev.score(&a, &b).unwrap(), lev.score(&b, &a).unwrap());
            prop_assert_eq!(
                OptimalStringAlignment.score(&a, &b).unwrap(),
                OptimalStringAlignment.score(&b, &a).unwrap()
            );
            prop_assert_eq!(
                LongestCommonSubstring.score(&a, &b).unwrap(),
                LongestCommonSubstring.score(&b, &a).unwrap()
            );
            let jaro = Jaro::default();
            prop_assert!(
                (jaro.score(&a, &b).unwrap() - jaro.score(&b, &a).unwrap()).abs() < 1e-12
            );
        }

        #[test]
        fn cdr_dist_symmetry(a in aa_seq(1, 25), b in aa_seq(1, 25)) {
            let metric = CdrDist::default();
            prop_assert_eq!(metric.score(&a, &b).unwrap(), metric.score(&b, &a).unwrap());
        }

        #[test]
        fn equal_length_metric_symmetry((a, b) in aa_pair_equal_len()) {
            let hamming = Hamming::default();
            prop_assert_eq!(hamming.score(&a, &b).unwrap(), hamming.score(&b, &a).unwrap());
            let tcr = TcrDist::new(
                std::sync::Arc::new(repdist_align::SubstitutionMatrix::blosum62()),
                4.0,
                b'-',
                1.0,
            ).unwrap();
            prop_assert_eq!(tcr.score(&a, &b).unwrap(), tcr.score(&b, &a).unwrap());
        }

        #[test]
        fn non_negativity(a in aa_seq(1, 25), b in aa_seq(1, 25)) {
            prop_assert!(Levenshtein::default().score(&a, &b).unwrap() >= 0.0);
            prop_assert!(OptimalStringAlignment.score(&a, &b).unwrap() >= 0.0);
            prop_assert!(LongestCommonSubstring.score(&a, &b).unwrap() >= 0.0);
            prop_assert!(Jaro::default().score(&a, &b).unwrap() >= 0.0);
            prop_assert!(JaroWinkler::default().score(&a, &b).unwrap() >= 0.0);
            prop_assert!(CdrDist::default().score(&a, &b).unwrap() >= 0.0);
        }

        #[test]
        fn osa_never_exceeds_levenshtein(a in aa_seq(0, 20), b in aa_seq(0, 20)) {
            let osa = OptimalStringAlignment.score(&a, &b).unwrap();
            let lev = Levenshtein::default().score(&a, &b).unwrap();
            prop_assert!(osa <= lev);
        }

        #[test]
        fn indel_distance_dominates_levenshtein(a in aa_seq(0, 20), b in aa_seq(0, 20)) {
            let lcs = LongestCommonSubstring.score(&a, &b).unwrap();
            let lev = Levenshtein::default().score(&a, &b).unwrap();
            prop_assert!(lcs >= lev);
        }

        #[test]
        fn jaro_stays_in_unit_interval(a in aa_seq(0, 25), b in aa_seq(0, 25)) {
            let d = Jaro::default().score(&a, &b).unwrap();
            prop_assert!((0.0..=1.0).contains(&d), "jaro distance {} out of [0,1]", d);
        }

        #[test]
        fn pairwise_matches_scalar_calls(
            seqs in proptest::collection::vec(aa_seq(0, 15), 2..=8)
        ) {
            let metric = Levenshtein::default();
            let n = seqs.len();
            let d = pairwise(&metric, &seqs).unwrap();
            prop_assert_eq!(d.len(), n * (n - 1) / 2);
            let mut k = 0;
            for i in 0..n {
                for j in (i + 1)..n {
                    prop_assert_eq!(d[k], metric.score(&seqs[i], &seqs[j]).unwrap());
                    k += 1;
                }
            }
        }

        #[test]
        fn pairwise_is_deterministic(
            seqs in proptest::collection::vec(aa_seq(0, 15), 2..=8)
        ) {
            let metric = Jaro::default();
            let first = pairwise(&metric, &seqs).unwrap();
            let second = pairwise(&metric, &seqs).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
