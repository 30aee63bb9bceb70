//! "Did you mean?" suggestions for names that failed to resolve.
//!
//! When the analyzer cannot resolve an identifier, a member, or an
//! enumerator, this crate looks for the single most plausible correction:
//!
//! 1. A [`CandidateSource`] enumerates names visible in the relevant context
//!    (scope chain, other namespaces, one explicit scope, one scoped enum, or
//!    the standard header table).
//! 2. A [`FuzzyMatcher`] scores each against the misspelled name with an
//!    edit distance capped by [`SuggestConfig::threshold`].
//! 3. A [`Ranker`] keeps the best candidate under a total tie-break order.
//!
//! The result is a [`Hint`]: nothing, or exactly one suggestion. Text is
//! only produced later, by [`Hint::render`], if the diagnostic is shown.
//!
//! # Example
//!
//! ```ignore
//! let suggester = Suggester::new(&scopes, &interner, &headers);
//! let hint = suggester.suggest_for_unresolved(misspelled, scope)?;
//! let diag = hint.attach(unknown_identifier(span, text), &scopes, &interner);
//! ```

mod candidate;
mod config;
mod error;
mod headers;
mod hint;
mod matcher;
mod ranker;
mod render;
mod scope;
mod suggester;
mod tracing_setup;

pub use candidate::{
    Candidate, CandidateSource, EnumeratorSource, HeaderSource, MemberSource,
    OtherNamespaceSource, Provenance, ScopeChainSource,
};
pub use config::SuggestConfig;
pub use error::SuggestError;
pub use headers::HeaderTable;
pub use hint::{Hint, Suggested};
pub use matcher::{edit_distance, FuzzyMatcher};
pub use ranker::{Acceptance, Ranker};
pub use scope::{qualified_path, ScopeGraph, ScopeId, ScopeKind, ScopeTree};
pub use suggester::Suggester;
pub use tracing_setup::init_tracing;
