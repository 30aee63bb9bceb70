use super::*;
use crate::{Provenance, ScopeId};
use pretty_assertions::assert_eq;

fn scoped(interner: &StringInterner, text: &str, depth: u32) -> Candidate {
    Candidate {
        name: interner.intern(text),
        provenance: Provenance::Scope,
        depth,
    }
}

fn fuzzy<'a>(interner: &'a StringInterner, target: &str, cap: usize) -> Ranker<'a> {
    Ranker::new(
        interner,
        FuzzyMatcher::default(),
        interner.intern(target),
        Acceptance::Fuzzy { cap },
    )
}

fn chosen(interner: &StringInterner, hint: Hint) -> Option<&'static str> {
    hint.name().map(|n| interner.lookup(n))
}

#[test]
fn test_lowest_distance_wins() {
    let interner = StringInterner::new();
    let hint = fuzzy(&interner, "lenght", 2).rank(
        [
            scoped(&interner, "height", 0),
            scoped(&interner, "length", 0),
            scoped(&interner, "width", 0),
        ],
        Span::new(5, 11),
    );

    assert_eq!(chosen(&interner, hint), Some("length"));
    assert_eq!(hint.suggested().map(|s| s.distance), Some(1));
    assert_eq!(hint.span(), Some(Span::new(5, 11)));
}

#[test]
fn test_closer_scope_wins_tie() {
    let interner = StringInterner::new();
    let hint = fuzzy(&interner, "cont", 1).rank(
        [scoped(&interner, "count", 2), scoped(&interner, "conf", 0)],
        Span::DUMMY,
    );
    assert_eq!(chosen(&interner, hint), Some("conf"));
}

#[test]
fn test_lexicographic_tie_break_is_order_independent() {
    let interner = StringInterner::new();
    let forward = fuzzy(&interner, "bat", 1).rank(
        [scoped(&interner, "cat", 0), scoped(&interner, "bar", 0)],
        Span::DUMMY,
    );
    let backward = fuzzy(&interner, "bat", 1).rank(
        [scoped(&interner, "bar", 0), scoped(&interner, "cat", 0)],
        Span::DUMMY,
    );
    assert_eq!(chosen(&interner, forward), Some("bar"));
    assert_eq!(forward, backward);
}

#[test]
fn test_over_threshold_rejected_even_if_closest() {
    let interner = StringInterner::new();
    let hint = fuzzy(&interner, "ab", 1).rank([scoped(&interner, "xyz", 0)], Span::DUMMY);
    assert!(hint.is_none());
}

#[test]
fn test_identical_name_never_suggested() {
    let interner = StringInterner::new();
    let hint = fuzzy(&interner, "foo", 1).rank(
        [scoped(&interner, "foo", 0), scoped(&interner, "fob", 3)],
        Span::DUMMY,
    );
    assert_eq!(chosen(&interner, hint), Some("fob"));

    let only_self = fuzzy(&interner, "foo", 1).rank([scoped(&interner, "foo", 0)], Span::DUMMY);
    assert!(only_self.is_none());
}

#[test]
fn test_identical_name_in_other_namespace_never_suggested() {
    let interner = StringInterner::new();
    let std_ns = ScopeId::from_raw(3);
    let other_namespace = |text: &str| Candidate {
        name: interner.intern(text),
        provenance: Provenance::OtherNamespace { namespace: std_ns },
        depth: 1,
    };

    let only_self = fuzzy(&interner, "vector", 2).rank([other_namespace("vector")], Span::DUMMY);
    assert!(only_self.is_none());

    let hint = fuzzy(&interner, "vector", 2).rank(
        [other_namespace("vector"), other_namespace("vectors")],
        Span::DUMMY,
    );
    assert_eq!(chosen(&interner, hint), Some("vectors"));
    assert_eq!(hint.suggested().map(|s| s.distance), Some(1));
}

#[test]
fn test_exact_acceptance() {
    let interner = StringInterner::new();
    let header = interner.intern("<vector>");
    let exact = |target: &str| {
        Ranker::new(
            &interner,
            FuzzyMatcher::default(),
            interner.intern(target),
            Acceptance::Exact,
        )
    };
    let candidate = Candidate {
        name: interner.intern("vector"),
        provenance: Provenance::MissingHeader { header },
        depth: 0,
    };

    let hit = exact("vector").rank([candidate], Span::DUMMY);
    assert_eq!(hit.header(), Some(header));

    let near_miss = exact("vectr").rank([candidate], Span::DUMMY);
    assert!(near_miss.is_none());
}

#[test]
fn test_no_candidates_is_empty_hint() {
    let interner = StringInterner::new();
    let hint = fuzzy(&interner, "anything", 3).rank(std::iter::empty(), Span::DUMMY);
    assert_eq!(hint, Hint::None);
}
