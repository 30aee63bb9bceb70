//! End-to-end lookups through the public API: build scopes the way an
//! analyzer would, ask for a hint, and render it onto a diagnostic.

use pretty_assertions::assert_eq;
use spell_diagnostic::{unknown_enumerator, unknown_identifier};
use spell_ir::{MisspelledName, Span, StringInterner};
use spell_suggest::{
    init_tracing, HeaderTable, Hint, Provenance, ScopeId, ScopeKind, ScopeTree, SuggestError,
    Suggester,
};

fn misspelled(interner: &StringInterner, text: &str) -> MisspelledName {
    MisspelledName::new(interner.intern(text), Span::new(8, 8 + text.len() as u32))
}

fn suggestion_text(hint: Hint, tree: &ScopeTree, interner: &StringInterner) -> Option<String> {
    hint.render(tree, interner).map(|s| s.message)
}

#[test]
fn typo_prefers_nearest_spelling() {
    init_tracing();
    let interner = StringInterner::new();
    let mut tree = ScopeTree::new();
    let func = tree.add_scope(tree.root(), ScopeKind::Function, None);
    tree.declare_all(func, [interner.intern("length"), interner.intern("height")]);
    let headers = HeaderTable::default();

    let suggester = Suggester::new(&tree, &interner, &headers);
    let hint = suggester.suggest_alternatives_for(misspelled(&interner, "lenght"), func);
    let Ok(hint) = hint else {
        panic!("lookup failed: {hint:?}");
    };

    assert_eq!(hint.name(), Some(interner.intern("length")));
    assert_eq!(hint.suggested().map(|s| s.distance), Some(1));

    let diag = hint.attach(unknown_identifier(Span::new(8, 14), "lenght"), &tree, &interner);
    assert_eq!(diag.suggestions.len(), 1);
    assert_eq!(diag.suggestions[0].message, "did you mean `length`?");
}

#[test]
fn missing_header_and_general_lookup_are_independent() {
    let interner = StringInterner::new();
    let mut tree = ScopeTree::new();
    let func = tree.add_scope(tree.root(), ScopeKind::Function, None);
    tree.declare_all(func, [interner.intern("count"), interner.intern("total")]);
    let headers = HeaderTable::from_entries(&interner, [("vector", "<vector>")]);

    let suggester = Suggester::new(&tree, &interner, &headers);
    let vector = misspelled(&interner, "vector");

    let header_hint = suggester.maybe_suggest_missing_header(vector);
    assert_eq!(header_hint.header(), Some(interner.intern("<vector>")));
    assert_eq!(
        suggestion_text(header_hint, &tree, &interner).as_deref(),
        Some("`vector` is defined in header `<vector>`; did you forget to `#include <vector>`?")
    );

    let general = suggester.suggest_alternatives_for(vector, func);
    assert_eq!(general, Ok(Hint::None));
}

#[test]
fn scoped_enum_typo_selects_enumerator() {
    let interner = StringInterner::new();
    let mut tree = ScopeTree::new();
    let color = tree.add_scope(
        tree.root(),
        ScopeKind::Enum { scoped: true },
        Some(interner.intern("Color")),
    );
    tree.declare_all(color, ["Red", "Green", "Blue"].map(|s| interner.intern(s)));
    let headers = HeaderTable::default();

    let suggester = Suggester::new(&tree, &interner, &headers);
    let hint = suggester.suggest_alternative_in_scoped_enum(misspelled(&interner, "Rde"), color);
    let Ok(hint) = hint else {
        panic!("lookup failed: {hint:?}");
    };

    assert_eq!(hint.name(), Some(interner.intern("Red")));
    assert_eq!(
        hint.provenance(),
        Some(Provenance::ScopedEnum { enumeration: color })
    );

    let diag = hint.attach(unknown_enumerator(Span::new(8, 11), "Color", "Rde"), &tree, &interner);
    assert_eq!(diag.suggestions[0].message, "did you mean `Red`?");
}

#[test]
fn equal_distance_enumerators_break_ties_lexicographically() {
    let interner = StringInterner::new();
    let mut tree = ScopeTree::new();
    let level = tree.add_scope(tree.root(), ScopeKind::Enum { scoped: true }, None);
    // Declared in reverse order: the tie-break must not depend on it.
    tree.declare_all(level, ["Lox", "Low"].map(|s| interner.intern(s)));
    let headers = HeaderTable::default();

    let suggester = Suggester::new(&tree, &interner, &headers);
    let hint = suggester.suggest_alternative_in_scoped_enum(misspelled(&interner, "Lo"), level);
    assert_eq!(hint.map(|h| h.name()), Ok(Some(interner.intern("Low"))));
}

#[test]
fn short_name_rejects_distant_candidate() {
    let interner = StringInterner::new();
    let mut tree = ScopeTree::new();
    let root = tree.root();
    tree.declare(root, interner.intern("xyz"));
    let headers = HeaderTable::default();

    let suggester = Suggester::new(&tree, &interner, &headers);
    let hint = suggester.suggest_for_unresolved(misspelled(&interner, "ab"), root);
    assert_eq!(hint, Ok(Hint::None));
}

#[test]
fn inner_scope_wins_equal_distance() {
    let interner = StringInterner::new();
    let mut tree = ScopeTree::new();
    let root = tree.root();
    let func = tree.add_scope(root, ScopeKind::Function, None);
    let block = tree.add_scope(func, ScopeKind::Block, None);

    // Both one edit from "valeu"; the outer one sorts first alphabetically.
    tree.declare(root, interner.intern("valea"));
    tree.declare(block, interner.intern("value"));
    let headers = HeaderTable::default();

    let suggester = Suggester::new(&tree, &interner, &headers);
    let hint = suggester.suggest_alternatives_for(misspelled(&interner, "valeu"), block);
    assert_eq!(hint.map(|h| h.name()), Ok(Some(interner.intern("value"))));
}

#[test]
fn repeated_lookups_are_deterministic() {
    let interner = StringInterner::new();
    let mut tree = ScopeTree::new();
    let root = tree.root();
    let names = ["alpha", "alpah", "alhpa", "lapha", "aplha", "alphb"];
    tree.declare_all(root, names.map(|s| interner.intern(s)));
    let headers = HeaderTable::cxx_standard(&interner);

    let suggester = Suggester::new(&tree, &interner, &headers);
    let target = misspelled(&interner, "alpxa");
    let first = suggester.suggest_for_unresolved(target, root);
    for _ in 0..20 {
        assert_eq!(suggester.suggest_for_unresolved(target, root), first);
    }
}

/// ```text
/// ::        { }
///   std     { vector }
///   app     { }
///     fn    { }   <- lookup starts here
/// ```
fn std_and_app(interner: &StringInterner) -> (ScopeTree, ScopeId) {
    let mut tree = ScopeTree::new();
    let root = tree.root();
    let std_ns = tree.add_scope(root, ScopeKind::Namespace, Some(interner.intern("std")));
    tree.declare(std_ns, interner.intern("vector"));
    let app = tree.add_scope(root, ScopeKind::Namespace, Some(interner.intern("app")));
    let func = tree.add_scope(app, ScopeKind::Function, None);
    (tree, func)
}

#[test]
fn other_namespace_hint_renders_qualified() {
    let interner = StringInterner::new();
    let (tree, func) = std_and_app(&interner);
    let headers = HeaderTable::cxx_standard(&interner);

    let suggester = Suggester::new(&tree, &interner, &headers);
    let hint = suggester.suggest_for_unresolved(misspelled(&interner, "vectr"), func);
    let Ok(hint) = hint else {
        panic!("lookup failed: {hint:?}");
    };
    assert_eq!(
        suggestion_text(hint, &tree, &interner).as_deref(),
        Some("did you mean `std::vector`?")
    );
}

#[test]
fn exact_name_in_other_namespace_falls_through_to_header() {
    let interner = StringInterner::new();
    let (tree, func) = std_and_app(&interner);
    let headers = HeaderTable::from_entries(&interner, [("vector", "<vector>")]);

    let suggester = Suggester::new(&tree, &interner, &headers);
    let vector = misspelled(&interner, "vector");

    let other = suggester.suggest_alternatives_in_other_namespaces(vector, func);
    assert_eq!(other, Ok(Hint::None));

    let hint = suggester.suggest_for_unresolved(vector, func);
    let Ok(hint) = hint else {
        panic!("lookup failed: {hint:?}");
    };
    assert_eq!(hint.header(), Some(interner.intern("<vector>")));
    assert_eq!(
        hint.provenance(),
        Some(Provenance::MissingHeader {
            header: interner.intern("<vector>")
        })
    );
}

#[test]
fn other_namespaces_only_consulted_after_scope_chain_is_empty() {
    let interner = StringInterner::new();
    let mut tree = ScopeTree::new();
    let root = tree.root();
    let std_ns = tree.add_scope(root, ScopeKind::Namespace, Some(interner.intern("std")));
    tree.declare(std_ns, interner.intern("counts"));
    let func = tree.add_scope(root, ScopeKind::Function, None);
    tree.declare(func, interner.intern("count"));
    let headers = HeaderTable::default();

    let suggester = Suggester::new(&tree, &interner, &headers);
    let typo = misspelled(&interner, "coutn");

    // Called on its own, the namespace search still finds `std::counts`.
    let other = suggester.suggest_alternatives_in_other_namespaces(typo, func);
    assert_eq!(other.map(|h| h.name()), Ok(Some(interner.intern("counts"))));

    let hint = suggester.suggest_for_unresolved(typo, func);
    assert_eq!(hint.map(|h| h.name()), Ok(Some(interner.intern("count"))));
    assert_eq!(hint.map(|h| h.provenance()), Ok(Some(Provenance::Scope)));
}

#[test]
fn misuse_is_an_error_not_an_empty_hint() {
    let interner = StringInterner::new();
    let mut tree = ScopeTree::new();
    let ns = tree.add_scope(tree.root(), ScopeKind::Namespace, Some(interner.intern("ns")));
    let headers = HeaderTable::default();

    let suggester = Suggester::new(&tree, &interner, &headers);
    let result = suggester.suggest_alternative_in_scoped_enum(misspelled(&interner, "Rde"), ns);
    assert_eq!(result, Err(SuggestError::NotAScopedEnum(ns)));
}
