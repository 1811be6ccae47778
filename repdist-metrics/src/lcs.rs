//! Longest common substring distance.

use repdist_core::Result;

use crate::Metric;

/// Longest common substring distance.
///
/// The edit-distance variant that allows only insertions and deletions:
/// `|a| + |b| - 2 * lcs(a, b)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LongestCommonSubstring;

impl Metric for LongestCommonSubstring {
    fn score(&self, a: &[u8], b: &[u8]) -> Result<f64> {
        let n = a.len();
        let m = b.len();
        if n == 0 {
            return Ok(m as f64);
        }
        if m == 0 {
            return Ok(n as f64);
        }

        let cols = m + 1;
        let mut h = vec![0usize; (n + 1) * cols];
        let idx = |i: usize, j: usize| -> usize { i * cols + j };

        for j in 0..=m {
            h[idx(0, j)] = j;
        }
        for i in 1..=n {
            h[idx(i, 0)] = i;
            for j in 1..=m {
                h[idx(i, j)] = if a[i - 1] == b[j - 1] {
                    h[idx(i - 1, j - 1)]
                } else {
                    1 + h[idx(i - 1, j)].min(h[idx(i, j - 1)])
                };
            }
        }
        Ok(h[idx(n, m)] as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lcs() -> LongestCommonSubstring {
        LongestCommonSubstring
    }

    #[test]
    fn textbook_example() {
        // lcs("AGCAT", "GAC") has length 2
        assert_eq!(lcs().score(b"AGCAT", b"GAC").unwrap(), 4.0);
    }

    #[test]
    fn cdr3_examples() {
        assert_eq!(lcs().score(b"AASQ", b"PASQ").unwrap(), 2.0);
        assert_eq!(lcs().score(b"GTA", b"HLA").unwrap(), 4.0);
        assert_eq!(lcs().score(b"GTA", b"KKR").unwrap(), 6.0);
    }

    #[test]
    fn substitutions_cost_two() {
        assert_eq!(lcs().score(b"A", b"B").unwrap(), 2.0);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(lcs().score(b"", b"").unwrap(), 0.0);
        assert_eq!(lcs().score(b"", b"GAC").unwrap(), 3.0);
        assert_eq!(lcs().score(b"GAC", b"").unwrap(), 3.0);
    }

    #[test]
    fn identical_inputs() {
        assert_eq!(lcs().score(b"SEQVENCES", b"SEQVENCES").unwrap(), 0.0);
    }
}
