//! Bounded edit distance between identifiers.
//!
//! The metric is optimal string alignment: insertion, deletion,
//! substitution, and (optionally) swapping two adjacent characters each cost
//! one edit. Comparison is per `char` and case-sensitive.
//!
//! # Bounding
//!
//! Most candidates are nowhere near the misspelled name, so every query
//! carries a `cap`. Only cells within `cap` of the diagonal are computed,
//! and the search stops as soon as a whole row exceeds `cap`, which keeps a
//! query at O(len(a) * cap) instead of O(len(a) * len(b)).
//!
//! # Example
//!
//! ```ignore
//! let matcher = FuzzyMatcher::default();
//! assert_eq!(matcher.distance("lenght", "length", 2), Some(1));
//! assert_eq!(matcher.distance("ab", "xyz", 1), None);
//! ```

use smallvec::{smallvec, SmallVec};

type Chars = SmallVec<[char; 32]>;
type Row = SmallVec<[usize; 33]>;

/// Edit-distance calculator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FuzzyMatcher {
    transpositions: bool,
}

impl FuzzyMatcher {
    pub const fn new(transpositions: bool) -> Self {
        FuzzyMatcher { transpositions }
    }

    /// Plain Levenshtein: a swap of adjacent characters costs two edits.
    pub const fn levenshtein() -> Self {
        Self::new(false)
    }

    /// Optimal string alignment: a swap of adjacent characters costs one edit.
    pub const fn damerau() -> Self {
        Self::new(true)
    }

    pub const fn counts_transpositions(self) -> bool {
        self.transpositions
    }

    /// Distance between `a` and `b`, or `None` if it exceeds `cap`.
    ///
    /// A distance exactly equal to `cap` is returned as `Some(cap)`.
    pub fn distance(&self, a: &str, b: &str, cap: usize) -> Option<usize> {
        let a: Chars = a.chars().collect();
        let b: Chars = b.chars().collect();
        self.bounded(&a, &b, cap)
    }

    /// Unbounded distance between `a` and `b`.
    pub fn edit_distance(&self, a: &str, b: &str) -> usize {
        let a: Chars = a.chars().collect();
        let b: Chars = b.chars().collect();
        let longest = a.len().max(b.len());
        self.bounded(&a, &b, longest).unwrap_or(longest)
    }

    fn bounded(&self, a: &[char], b: &[char], cap: usize) -> Option<usize> {
        let (n, m) = (a.len(), b.len());
        if n.abs_diff(m) > cap {
            return None;
        }
        // The distance never exceeds the longer length.
        let cap = cap.min(n.max(m));
        if n == 0 || m == 0 {
            return Some(n.max(m));
        }

        // Anything above `cap` is stored as `far`.
        let far = cap + 1;
        let mut before: Row = smallvec![far; m + 1];
        let mut prev: Row = smallvec![far; m + 1];
        let mut cur: Row = smallvec![far; m + 1];
        for (j, cell) in prev.iter_mut().enumerate().take(far) {
            *cell = j;
        }

        for i in 1..=n {
            let lo = i.saturating_sub(cap).max(1);
            let hi = (i + cap).min(m);

            cur[lo - 1] = if lo == 1 { i.min(far) } else { far };
            let mut row_min = cur[lo - 1];

            for j in lo..=hi {
                let cost = usize::from(a[i - 1] != b[j - 1]);
                let mut value = (prev[j] + 1)
                    .min(cur[j - 1] + 1)
                    .min(prev[j - 1] + cost);

                if self.transpositions
                    && i > 1
                    && j > 1
                    && a[i - 1] == b[j - 2]
                    && a[i - 2] == b[j - 1]
                {
                    value = value.min(before[j - 2] + 1);
                }

                cur[j] = value.min(far);
                row_min = row_min.min(cur[j]);
            }
            if hi < m {
                cur[hi + 1] = far;
            }

            if row_min > cap {
                return None;
            }

            std::mem::swap(&mut before, &mut prev);
            std::mem::swap(&mut prev, &mut cur);
        }

        let distance = prev[m];
        (distance <= cap).then_some(distance)
    }
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::damerau()
    }
}

/// Unbounded distance using the default matcher.
pub fn edit_distance(a: &str, b: &str) -> usize {
    FuzzyMatcher::default().edit_distance(a, b)
}
