//! Turning a hint into diagnostic text.
//!
//! Nothing here runs during lookup. The diagnostic pipeline calls
//! [`Hint::render`] or [`Hint::attach`] once it has decided the diagnostic
//! will actually be shown.
//!
//! # Example
//!
//! ```text
//! error[E2003]: use of undeclared identifier `lenght`
//!   help: did you mean `length`?
//!
//! error[E2003]: use of undeclared identifier `vectr`
//!   help: did you mean `std::vector`?
//!
//! error[E2003]: use of undeclared identifier `vector`
//!   help: `vector` is defined in header `<vector>`; did you forget to `#include <vector>`?
//! ```

use spell_diagnostic::{Diagnostic, Suggestion};
use spell_ir::StringInterner;

use crate::{qualified_path, Hint, Provenance, ScopeGraph};

impl Hint {
    /// Build the suggestion for this hint, or `None` for an empty hint.
    ///
    /// `graph` is only consulted to spell namespace qualifiers.
    pub fn render<G: ScopeGraph + ?Sized>(
        &self,
        graph: &G,
        interner: &StringInterner,
    ) -> Option<Suggestion> {
        let suggested = self.suggested()?;
        let name = interner.lookup(suggested.name);
        let suggestion = match suggested.provenance {
            Provenance::Scope | Provenance::ScopedEnum { .. } | Provenance::Member { .. } => {
                Suggestion::did_you_mean(suggested.span, name)
            }
            Provenance::OtherNamespace { namespace } => {
                let path = qualified_path(graph, namespace, interner);
                Suggestion::did_you_mean(suggested.span, &format!("{path}::{name}"))
            }
            Provenance::MissingHeader { header } => {
                Suggestion::include_header(name, interner.lookup(header))
            }
        };
        Some(suggestion)
    }

    /// Append this hint's suggestion to `diagnostic`. Empty hints leave it
    /// unchanged.
    pub fn attach<G: ScopeGraph + ?Sized>(
        &self,
        diagnostic: Diagnostic,
        graph: &G,
        interner: &StringInterner,
    ) -> Diagnostic {
        match self.render(graph, interner) {
            Some(suggestion) => diagnostic.with_structured_suggestion(suggestion),
            None => diagnostic,
        }
    }
}
