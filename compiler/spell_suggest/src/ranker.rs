//! Selects the single best candidate for a misspelled name.
//!
//! # Ordering
//!
//! Among accepted candidates the ranker keeps the one with
//! 1. the lowest distance, then
//! 2. the lowest depth (closest scope), then
//! 3. the lexicographically smallest text.
//!
//! The order is total, so the outcome does not depend on the order in which
//! a source enumerates names within one scope.

use spell_ir::{Name, Span, StringInterner};

use crate::{Candidate, FuzzyMatcher, Hint, Suggested};

/// How a candidate qualifies.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Acceptance {
    /// Within `cap` edits of the misspelled name. A candidate spelled exactly
    /// like the misspelled name is never offered.
    Fuzzy { cap: usize },
    /// Exactly the misspelled name. Used when the hint is about something
    /// other than the spelling, such as the header that declares the name.
    Exact,
}

#[derive(Copy, Clone, Debug)]
struct Ranked {
    candidate: Candidate,
    distance: usize,
    text: &'static str,
}

impl Ranked {
    fn key(&self) -> (usize, u32, &'static str) {
        (self.distance, self.candidate.depth, self.text)
    }
}

/// Streams candidates and remembers the best one seen so far.
pub struct Ranker<'a> {
    interner: &'a StringInterner,
    matcher: FuzzyMatcher,
    target: Name,
    target_text: &'static str,
    acceptance: Acceptance,
    best: Option<Ranked>,
}

impl<'a> Ranker<'a> {
    pub fn new(
        interner: &'a StringInterner,
        matcher: FuzzyMatcher,
        target: Name,
        acceptance: Acceptance,
    ) -> Self {
        Ranker {
            interner,
            matcher,
            target,
            target_text: interner.lookup(target),
            acceptance,
            best: None,
        }
    }

    /// Score `candidate` and keep it if it beats the current best.
    pub fn consider(&mut self, candidate: Candidate) {
        let Some(distance) = self.score(&candidate) else {
            return;
        };
        let ranked = Ranked {
            candidate,
            distance,
            text: self.interner.lookup(candidate.name),
        };
        if self.best.is_none_or(|best| ranked.key() < best.key()) {
            tracing::trace!(candidate = ranked.text, distance, depth = candidate.depth, "new best");
            self.best = Some(ranked);
        }
    }

    fn score(&self, candidate: &Candidate) -> Option<usize> {
        let is_target = candidate.name == self.target;
        match self.acceptance {
            Acceptance::Exact => is_target.then_some(0),
            Acceptance::Fuzzy { .. } if is_target => {
                tracing::trace!(candidate = self.target_text, "skipping identical name");
                None
            }
            Acceptance::Fuzzy { cap } => {
                let text = self.interner.lookup(candidate.name);
                let distance = self.matcher.distance(self.target_text, text, cap);
                if distance.is_none() {
                    tracing::trace!(candidate = text, cap, "too far");
                }
                distance
            }
        }
    }

    /// Feed every candidate, then produce the hint.
    pub fn rank(mut self, candidates: impl IntoIterator<Item = Candidate>, span: Span) -> Hint {
        for candidate in candidates {
            self.consider(candidate);
        }
        self.finish(span)
    }

    /// The hint for the best candidate seen, or [`Hint::None`].
    pub fn finish(self, span: Span) -> Hint {
        match self.best {
            Some(best) => Hint::Suggest(Suggested {
                name: best.candidate.name,
                provenance: best.candidate.provenance,
                span,
                distance: best.distance,
            }),
            None => Hint::None,
        }
    }
}

#[cfg(test)]
mod tests;
