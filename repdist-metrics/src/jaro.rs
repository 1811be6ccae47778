//! Jaro and Jaro-Winkler distances.

use repdist_core::{RepdistError, Result};

use crate::Metric;

/// Jaro distance with configurable component weights.
///
/// The three weights scale the match ratio in `a`, the match ratio in `b`,
/// and the transposition ratio; the default is `(1/3, 1/3, 1/3)`. Arbitrary
/// non-negative weights are accepted: if they do not sum to 1 the distance
/// can leave `[0, 1]`, and if the first two differ the metric is no longer
/// symmetric in its arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Jaro {
    weights: [f64; 3],
}

impl Jaro {
    /// Create a Jaro metric with explicit component weights.
    ///
    /// # Errors
    ///
    /// Returns an error if any weight is negative or non-finite.
    pub fn new(weights: [f64; 3]) -> Result<Self> {
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(RepdistError::InvalidConfig(format!(
                "Jaro weights must be finite and non-negative, got {weights:?}"
            )));
        }
        Ok(Self { weights })
    }

    /// The configured component weights.
    pub fn weights(&self) -> [f64; 3] {
        self.weights
    }
}

impl Default for Jaro {
    fn default() -> Self {
        Self {
            weights: [1.0 / 3.0; 3],
        }
    }
}

impl Metric for Jaro {
    fn score(&self, a: &[u8], b: &[u8]) -> Result<f64> {
        let len_a = a.len();
        let len_b = b.len();
        if len_a == 0 || len_b == 0 {
            // one empty string is maximally distant, two are identical
            return Ok(f64::from(u8::from(len_a > 0 || len_b > 0)));
        }

        let max_len = len_a.max(len_b);
        if max_len == 1 {
            return Ok(if a[0] == b[0] { 0.0 } else { 1.0 });
        }
        let window = max_len / 2 - 1;

        let mut matched_a = vec![false; len_a];
        let mut matched_b = vec![false; len_b];
        let mut n_matches = 0usize;
        for (i, &ca) in a.iter().enumerate() {
            let left = i.saturating_sub(window);
            let right = (i + window + 1).min(len_b);
            for j in left..right {
                if ca == b[j] && !matched_b[j] {
                    matched_a[i] = true;
                    matched_b[j] = true;
                    n_matches += 1;
                    break;
                }
            }
        }
        if n_matches == 0 {
            return Ok(1.0);
        }

        // half-transpositions between the matched characters in order
        let match_a = a.iter().zip(&matched_a).filter(|(_, &hit)| hit);
        let match_b = b.iter().zip(&matched_b).filter(|(_, &hit)| hit);
        let mut t = 0.0;
        for ((ca, _), (cb, _)) in match_a.zip(match_b) {
            if ca != cb {
                t += 0.5;
            }
        }

        let m = n_matches as f64;
        let [w1, w2, w3] = self.weights;
        Ok(1.0
            - (w1 * m / len_a as f64 + w2 * m / len_b as f64 + w3 * (m - t) / m))
    }
}

/// Jaro-Winkler distance.
///
/// Scales the Jaro distance towards zero for pairs sharing a common prefix:
/// `jaro * (1 - l * p)` where `l` is the shared prefix length capped at
/// `max_l` and `p` the scaling factor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JaroWinkler {
    jaro: Jaro,
    p: f64,
    max_l: usize,
}

impl JaroWinkler {
    /// Create a Jaro-Winkler metric.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is outside `[0, 0.25]`; larger factors can
    /// push the distance negative for long shared prefixes.
    pub fn new(p: f64, max_l: usize, jaro: Jaro) -> Result<Self> {
        if !p.is_finite() || !(0.0..=0.25).contains(&p) {
            return Err(RepdistError::InvalidConfig(format!(
                "prefix scaling factor must be in [0, 0.25], got {p}"
            )));
        }
        Ok(Self { jaro, p, max_l })
    }

    /// The prefix scaling factor.
    pub fn scaling_factor(&self) -> f64 {
        self.p
    }

    /// The prefix length cap.
    pub fn max_prefix(&self) -> usize {
        self.max_l
    }
}

impl Default for JaroWinkler {
    fn default() -> Self {
        Self {
            jaro: Jaro::default(),
            p: 0.1,
            max_l: 4,
        }
    }
}

impl Metric for JaroWinkler {
    fn score(&self, a: &[u8], b: &[u8]) -> Result<f64> {
        let jaro = self.jaro.score(a, b)?;
        let l = a
            .iter()
            .zip(b)
            .take(self.max_l)
            .take_while(|(x, y)| x == y)
            .count();
        Ok(jaro * (1.0 - l as f64 * self.p))
    }
}
