//! Strategy entry points.
//!
//! Every strategy is the same pipeline: pick a [`CandidateSource`] for the
//! context, pick an [`Acceptance`] rule, and stream the candidates through a
//! [`Ranker`]. The strategies differ only in those two choices.
//!
//! | Strategy | Source | Acceptance |
//! |---|---|---|
//! | `suggest_alternatives_for` | scope chain at the error | fuzzy |
//! | `suggest_alternatives_in_other_namespaces` | namespaces off the chain | fuzzy |
//! | `maybe_suggest_missing_header` | header table | exact |
//! | `suggest_alternative_in_explicit_scope` | members of `Scope::` | fuzzy |
//! | `suggest_alternative_in_scoped_enum` | enumerators of the enum | fuzzy |

use spell_ir::{MisspelledName, StringInterner};

use crate::{
    Acceptance, CandidateSource, EnumeratorSource, HeaderSource, HeaderTable, Hint,
    MemberSource, OtherNamespaceSource, Ranker, ScopeChainSource, ScopeGraph, ScopeId,
    ScopeKind, SuggestConfig, SuggestError,
};

/// Read-only bundle of everything a lookup needs.
///
/// Holds no mutable state, so one `Suggester` can serve any number of
/// lookups, including concurrent ones when `G` is `Sync`. The caller must
/// not mutate the graph while a lookup runs.
pub struct Suggester<'a, G: ?Sized> {
    graph: &'a G,
    interner: &'a StringInterner,
    headers: &'a HeaderTable,
    config: SuggestConfig,
}

impl<'a, G: ScopeGraph + ?Sized> Suggester<'a, G> {
    pub fn new(graph: &'a G, interner: &'a StringInterner, headers: &'a HeaderTable) -> Self {
        Suggester {
            graph,
            interner,
            headers,
            config: SuggestConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: SuggestConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    /// Closest visible name along the scope chain starting at `scope`.
    #[tracing::instrument(level = "debug", skip_all, fields(name = self.interner.lookup(misspelled.name)))]
    pub fn suggest_alternatives_for(
        &self,
        misspelled: MisspelledName,
        scope: ScopeId,
    ) -> Result<Hint, SuggestError> {
        self.require_scope(scope)?;
        Ok(self.fuzzy(misspelled, &ScopeChainSource::new(self.graph, scope)))
    }

    /// Closest name declared in a namespace that unqualified lookup from
    /// `scope` does not search. The hint renders qualified.
    ///
    /// Precondition: [`Self::suggest_alternatives_for`] returned
    /// [`Hint::None`] for the same name and scope. This method does not check
    /// it; a caller that skips the general lookup can get a qualified name
    /// from another namespace even though a closer spelling is visible.
    /// [`Self::suggest_for_unresolved`] runs the two in the required order.
    #[tracing::instrument(level = "debug", skip_all, fields(name = self.interner.lookup(misspelled.name)))]
    pub fn suggest_alternatives_in_other_namespaces(
        &self,
        misspelled: MisspelledName,
        scope: ScopeId,
    ) -> Result<Hint, SuggestError> {
        self.require_scope(scope)?;
        Ok(self.fuzzy(misspelled, &OtherNamespaceSource::new(self.graph, scope)))
    }

    /// Header declaring exactly the misspelled name, if the header table
    /// knows one. No fuzzy matching: this answers "is this a standard name
    /// missing its `#include`?", not "is this a typo?".
    #[tracing::instrument(level = "debug", skip_all, fields(name = self.interner.lookup(misspelled.name)))]
    pub fn maybe_suggest_missing_header(&self, misspelled: MisspelledName) -> Hint {
        let source = HeaderSource::new(self.headers, misspelled.name);
        let hint = self
            .ranker(misspelled, Acceptance::Exact)
            .rank(source.candidates(), misspelled.span);
        tracing::debug!(?hint, "missing header");
        hint
    }

    /// Closest direct member of `scope`, for a name written as `Scope::typo`.
    #[tracing::instrument(level = "debug", skip_all, fields(name = self.interner.lookup(misspelled.name)))]
    pub fn suggest_alternative_in_explicit_scope(
        &self,
        misspelled: MisspelledName,
        scope: ScopeId,
    ) -> Result<Hint, SuggestError> {
        self.require_scope(scope)?;
        Ok(self.fuzzy(misspelled, &MemberSource::new(self.graph, scope)))
    }

    /// Closest enumerator of the scoped enumeration `enumeration`.
    #[tracing::instrument(level = "debug", skip_all, fields(name = self.interner.lookup(misspelled.name)))]
    pub fn suggest_alternative_in_scoped_enum(
        &self,
        misspelled: MisspelledName,
        enumeration: ScopeId,
    ) -> Result<Hint, SuggestError> {
        match self.require_scope(enumeration)? {
            ScopeKind::Enum { scoped: true } => {}
            _ => return Err(SuggestError::NotAScopedEnum(enumeration)),
        }
        Ok(self.fuzzy(misspelled, &EnumeratorSource::new(self.graph, enumeration)))
    }

    /// Everything worth trying for an unqualified name that failed to
    /// resolve in `scope`: the scope chain, then other namespaces, then the
    /// header table. The first strategy with a suggestion wins.
    #[tracing::instrument(level = "debug", skip_all, fields(name = self.interner.lookup(misspelled.name)))]
    pub fn suggest_for_unresolved(
        &self,
        misspelled: MisspelledName,
        scope: ScopeId,
    ) -> Result<Hint, SuggestError> {
        let hint = self.suggest_alternatives_for(misspelled, scope)?;
        if hint.is_some() {
            return Ok(hint);
        }
        let hint = self.suggest_alternatives_in_other_namespaces(misspelled, scope)?;
        Ok(hint.or_else(|| self.maybe_suggest_missing_header(misspelled)))
    }

    fn require_scope(&self, scope: ScopeId) -> Result<ScopeKind, SuggestError> {
        self.graph
            .kind(scope)
            .ok_or(SuggestError::UnknownScope(scope))
    }

    fn ranker(&self, misspelled: MisspelledName, acceptance: Acceptance) -> Ranker<'a> {
        Ranker::new(self.interner, self.config.matcher(), misspelled.name, acceptance)
    }

    fn fuzzy(&self, misspelled: MisspelledName, source: &impl CandidateSource) -> Hint {
        let len = self.interner.lookup(misspelled.name).chars().count();
        let cap = self.config.threshold(len);
        let hint = self
            .ranker(misspelled, Acceptance::Fuzzy { cap })
            .rank(source.candidates(), misspelled.span);
        tracing::debug!(cap, ?hint, "fuzzy lookup");
        hint
    }
}
