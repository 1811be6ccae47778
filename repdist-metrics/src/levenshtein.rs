//! Optimised Levenshtein edit distance.
//!
//! Unit-cost insertions, deletions, and substitutions, with the standard
//! fast paths: trivial empty inputs, common prefix/suffix trimming,
//! orientation swap, a `memchr`-style single-character shortcut, and a
//! single-row half-band DP that skips the two corner triangles no optimal
//! path can cross. The band changes only the running time, never the result.

use repdist_core::{RepdistError, Result};

use crate::Metric;

/// Levenshtein edit distance.
///
/// With `extra_cost == 0.0` (the default) this is the plain unit-cost edit
/// distance. A positive `extra_cost` switches to the inflated-substitution
/// model of the classic C implementation: mismatches are resolved through
/// insert + delete in the recurrence, the half-band optimisation is
/// disabled, and the single-character fast path credits
/// `extra_cost` for a matching residue.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Levenshtein {
    extra_cost: f64,
}

impl Levenshtein {
    /// Create a Levenshtein metric.
    ///
    /// # Errors
    ///
    /// Returns an error if `extra_cost` is negative or non-finite.
    pub fn new(extra_cost: f64) -> Result<Self> {
        if !extra_cost.is_finite() || extra_cost < 0.0 {
            return Err(RepdistError::InvalidConfig(format!(
                "extra_cost must be finite and non-negative, got {extra_cost}"
            )));
        }
        Ok(Self { extra_cost })
    }

    /// The configured extra substitution cost.
    pub fn extra_cost(&self) -> f64 {
        self.extra_cost
    }

    fn distance(&self, a: &[u8], b: &[u8]) -> f64 {
        if a.is_empty() {
            return b.len() as f64;
        }
        if b.is_empty() {
            return a.len() as f64;
        }

        // grind down common prefix and suffix
        let prefix = a.iter().zip(b).take_while(|(x, y)| x == y).count();
        let (mut a, mut b) = (&a[prefix..], &b[prefix..]);
        let suffix = a
            .iter()
            .rev()
            .zip(b.iter().rev())
            .take_while(|(x, y)| x == y)
            .count();
        a = &a[..a.len() - suffix];
        b = &b[..b.len() - suffix];

        if a.is_empty() {
            return b.len() as f64;
        }
        if b.is_empty() {
            return a.len() as f64;
        }

        // keep the shorter trimmed string on the row axis
        if a.len() > b.len() {
            std::mem::swap(&mut a, &mut b);
        }

        if a.len() == 1 {
            // the band below cannot handle a single-character row, so this
            // shortcut is load-bearing, not just fast
            let found = b.contains(&a[0]);
            return if self.extra_cost > 0.0 {
                b.len() as f64 + 1.0 - self.extra_cost * f64::from(u8::from(found))
            } else {
                (b.len() - usize::from(found)) as f64
            };
        }

        if self.extra_cost > 0.0 {
            full_rows(a, b) as f64
        } else {
            banded_rows(a, b) as f64
        }
    }
}

impl Default for Levenshtein {
    fn default() -> Self {
        Self { extra_cost: 0.0 }
    }
}

impl Metric for Levenshtein {
    fn score(&self, a: &[u8], b: &[u8]) -> Result<f64> {
        Ok(self.distance(a, b))
    }
}

/// Single-row half-band DP.
///
/// Maintains one row of `|b| + 1` cells in place and skips two corner
/// triangles of half-width `|a| / 2` that cannot lie on an optimal path.
/// Requires `2 <= |a| <= |b|`.
fn banded_rows(a: &[u8], b: &[u8]) -> usize {
    debug_assert!(a.len() >= 2 && a.len() <= b.len());

    let len1 = a.len() + 1;
    let len2 = b.len() + 1;
    let half = len1 / 2;

    let mut row: Vec<usize> = (0..len2).collect();
    row[0] = len1 - half - 1;
    let mut end = len2 - 1;

    for i in 1..len1 {
        let c1 = a[i - 1];
        // p walks the row, cp walks b; d tracks the diagonal predecessor,
        // x the cell being built
        let mut p: usize;
        let mut cp: usize;
        let mut d: usize;
        let mut x: usize;

        if i >= len1 - half {
            // band has reached the left edge: no left neighbour for the
            // first in-band cell
            let offset = i - (len1 - half);
            cp = offset;
            p = offset;
            let c3 = row[p] + usize::from(c1 != b[cp]);
            p += 1;
            cp += 1;
            x = row[p] + 1;
            d = x;
            if x > c3 {
                x = c3;
            }
            row[p] = x;
            p += 1;
        } else {
            p = 1;
            cp = 0;
            d = i;
            x = i;
        }

        if i <= half + 1 {
            end = len2 + i - half - 2;
        }

        while p <= end {
            d -= 1;
            let c3 = d + usize::from(c1 != b[cp]);
            cp += 1;
            x += 1;
            if x > c3 {
                x = c3;
            }
            d = row[p] + 1;
            if x > d {
                x = d;
            }
            row[p] = x;
            p += 1;
        }

        // band boundary cell: the upper neighbour lies outside the band
        if i <= half {
            d -= 1;
            let c3 = d + usize::from(c1 != b[cp]);
            x += 1;
            if x > c3 {
                x = c3;
            }
            row[p] = x;
        }
    }
    row[end]
}

/// Full-width single-row DP for the inflated-substitution model: a mismatch
/// is only reachable through insert + delete.
fn full_rows(a: &[u8], b: &[u8]) -> usize {
    debug_assert!(a.len() >= 2 && a.len() <= b.len());

    let len2 = b.len() + 1;
    let mut row: Vec<usize> = (0..len2).collect();

    for (i, &c1) in a.iter().enumerate() {
        let mut d = i + 1;
        let mut x = i + 1;
        for (j, &c2) in b.iter().enumerate() {
            if c1 == c2 {
                d -= 1;
                x = d;
            } else {
                x += 1;
            }
            d = row[j + 1] + 1;
            if x > d {
                x = d;
            }
            row[j + 1] = x;
        }
    }
    row[len2 - 1]
}
