//! Single-row Levenshtein distance core.
//!
//! Keeps one row of the conceptual `(m+1) × (n+1)` cost matrix, indexed by
//! prefixes of the first string, and sweeps it once per character of the
//! second string. Auxiliary space is `m + 1` integers instead of the full
//! matrix.
//!
//! Based on the optimized single-column C formulation:
//! <https://en.wikibooks.org/wiki/Algorithm_Implementation/Strings/Levenshtein_distance#C>

mod bounded;
mod similarity;

pub use bounded::within;
pub use similarity::similarity;

use tracing::trace;

/// Reusable Levenshtein distance calculator.
///
/// Owns a scratch column that persists across calls: the backing allocation
/// only grows, so a calculator that has already seen a long first argument
/// computes later distances without reallocating. The column is private
/// mutable state, which is why [`DistanceCalculator::distance`] takes
/// `&mut self`: one calculator cannot be used from two threads at once
/// without external serialization, while distinct calculators (and the
/// [`distance`] free function) are fully independent.
#[derive(Debug, Default)]
pub struct DistanceCalculator {
    column: Vec<usize>,
}

impl DistanceCalculator {
    /// Create a calculator with no scratch space allocated yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the Levenshtein edit distance between `a` and `b`.
    ///
    /// Returns the minimum number of single-code-point insertions,
    /// deletions, and substitutions required to transform `a` into `b`.
    /// Symmetric in its arguments; scratch memory is proportional to the
    /// code-point length of `a`, so prefer passing the shorter string
    /// first for very large inputs.
    pub fn distance(&mut self, a: &str, b: &str) -> usize {
        let s1: Vec<char> = a.chars().collect();
        let m = s1.len();

        // column[i] = cost of transforming the i-length prefix of `a` into
        // the current prefix of `b`; starts against the empty prefix.
        self.reset(m + 1);

        if b.is_empty() {
            return m;
        }

        for (x, cb) in b.chars().enumerate() {
            // Diagonal predecessor: column[0] from the previous sweep.
            let mut lastdiag = x;
            self.column[0] = x + 1;

            for (y, &ca) in s1.iter().enumerate() {
                let olddiag = self.column[y + 1];
                let cost = usize::from(ca != cb);
                self.column[y + 1] = (self.column[y + 1] + 1) // deletion
                    .min(self.column[y] + 1) // insertion
                    .min(lastdiag + cost); // substitution
                lastdiag = olddiag;
            }
        }

        self.column[m]
    }

    /// Reset the scratch column to `0, 1, …, len - 1`, reallocating only
    /// when the existing capacity is insufficient.
    fn reset(&mut self, len: usize) {
        if self.column.capacity() < len {
            trace!(
                needed = len,
                capacity = self.column.capacity(),
                "growing scratch column"
            );
        }
        self.column.clear();
        self.column.extend(0..len);
    }
}

/// Compute the Levenshtein edit distance between two strings.
///
/// One-off convenience over a transient [`DistanceCalculator`]. Use the
/// calculator directly to amortize scratch allocation across many calls.
pub fn distance(a: &str, b: &str) -> usize {
    DistanceCalculator::new().distance(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        assert_eq!(distance("hello", "hello"), 0);
        assert_eq!(distance("a", "a"), 0);
    }

    #[test]
    fn test_empty() {
        assert_eq!(distance("", ""), 0);
        assert_eq!(distance("", "abc"), 3);
        assert_eq!(distance("abc", ""), 3);
    }

    #[test]
    fn test_single_edit() {
        assert_eq!(distance("a", "b"), 1);
        assert_eq!(distance("kitten", "sitten"), 1); // substitution
        assert_eq!(distance("cat", "cats"), 1); // insertion
        assert_eq!(distance("cats", "cat"), 1); // deletion
    }

    #[test]
    fn test_classic() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("flaw", "lawn"), 2);
    }

    #[test]
    fn test_symmetry() {
        assert_eq!(distance("sitting", "kitten"), 3);
        assert_eq!(distance("lawn", "flaw"), 2);
    }

    #[test]
    fn test_unicode_code_points() {
        // One unit of cost per code point, regardless of UTF-8 width.
        assert_eq!(distance("café", "cafe"), 1);
        assert_eq!(distance("über", "uber"), 1);
        assert_eq!(distance("🦀", ""), 1);
        assert_eq!(distance("🦀abc", "abc"), 1);
    }

    #[test]
    fn test_calculator_reuse() {
        // Shrinking and growing first-argument lengths on one calculator
        // must match fresh computations.
        let mut calc = DistanceCalculator::new();
        let pairs = [
            ("kitten", "sitting"),
            ("a", "b"),
            ("", "xyz"),
            ("photography", "phptography"),
            ("flaw", "lawn"),
        ];
        for (a, b) in pairs {
            assert_eq!(calc.distance(a, b), distance(a, b), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn test_reuse_with_empty_second_argument() {
        let mut calc = DistanceCalculator::new();
        assert_eq!(calc.distance("kitten", "sitting"), 3);
        // Stale cells from the previous call must not leak into the result.
        assert_eq!(calc.distance("kitten", ""), 6);
        assert_eq!(calc.distance("", ""), 0);
    }
}
