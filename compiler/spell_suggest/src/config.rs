//! Acceptance threshold and matcher settings.

use crate::FuzzyMatcher;

/// Tuning knobs for fuzzy suggestions.
///
/// The defaults allow one edit per three characters of the misspelled name,
/// never more than three, with adjacent swaps counted as a single edit.
/// Embedders matching another compiler's golden output can adjust them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SuggestConfig {
    /// One edit is allowed per this many characters, rounded up.
    pub edits_per_chars: usize,
    /// Hard ceiling on allowed edits regardless of length.
    pub max_edits: usize,
    /// Count swapping two adjacent characters as one edit.
    pub transpositions: bool,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            edits_per_chars: 3,
            max_edits: 3,
            transpositions: true,
        }
    }
}

impl SuggestConfig {
    #[must_use]
    pub fn with_edits_per_chars(mut self, chars: usize) -> Self {
        self.edits_per_chars = chars;
        self
    }

    #[must_use]
    pub fn with_max_edits(mut self, max_edits: usize) -> Self {
        self.max_edits = max_edits;
        self
    }

    #[must_use]
    pub fn with_transpositions(mut self, transpositions: bool) -> Self {
        self.transpositions = transpositions;
        self
    }

    /// Maximum distance accepted for a misspelled name of `len` characters.
    ///
    /// - 0 chars: 0 (nothing can be suggested)
    /// - otherwise: ⌈len / `edits_per_chars`⌉, capped at `max_edits`
    pub fn threshold(&self, len: usize) -> usize {
        len.div_ceil(self.edits_per_chars.max(1))
            .min(self.max_edits)
    }

    /// Matcher configured with these settings.
    pub fn matcher(&self) -> FuzzyMatcher {
        FuzzyMatcher::new(self.transpositions)
    }
}
