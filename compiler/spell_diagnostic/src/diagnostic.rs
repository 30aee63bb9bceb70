//! Core diagnostic types for structured error reporting.
//!
//! Defines [`Diagnostic`], [`Label`], and [`Suggestion`]. Every diagnostic
//! here is an error: an unresolved name stops the program from compiling.

use std::fmt;

use spell_ir::Span;

use crate::ErrorCode;

/// Applicability level for code suggestions.
///
/// Indicates how confident we are that a suggestion is correct, so a fix-it
/// tool knows what it may apply without asking.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Applicability {
    /// The suggestion might be correct but requires human verification.
    /// Spelling corrections land here: the replacement is visible at the use
    /// site, but nothing checked that it type-checks there.
    MaybeIncorrect,

    #[default]
    Unspecified,
}

/// A text substitution for a code fix.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Substitution {
    /// The span to replace. An empty span inserts.
    pub span: Span,
    /// The replacement text.
    pub snippet: String,
}

impl Substitution {
    pub fn new(span: Span, snippet: impl Into<String>) -> Self {
        Substitution {
            span,
            snippet: snippet.into(),
        }
    }
}

/// A structured suggestion with substitutions and applicability.
///
/// Suggestions have a `priority` field (lower = more likely relevant) used
/// for ordering when several are attached to one diagnostic.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Suggestion {
    /// Human-readable message describing the fix.
    pub message: String,
    /// The text substitutions to make (empty for text-only suggestions).
    pub substitutions: Vec<Substitution>,
    /// How confident we are in this suggestion.
    pub applicability: Applicability,
    /// Priority (lower = more likely to be relevant).
    pub priority: u8,
}

impl Suggestion {
    /// Create a new suggestion with a single substitution.
    pub fn new(
        message: impl Into<String>,
        span: Span,
        snippet: impl Into<String>,
        applicability: Applicability,
        priority: u8,
    ) -> Self {
        Suggestion {
            message: message.into(),
            substitutions: vec![Substitution::new(span, snippet)],
            applicability,
            priority,
        }
    }

    /// Create a text-only suggestion (no code substitution).
    pub fn text(message: impl Into<String>, priority: u8) -> Self {
        Suggestion {
            message: message.into(),
            substitutions: Vec::new(),
            applicability: Applicability::Unspecified,
            priority,
        }
    }

    /// Create a "did you mean" suggestion that rewrites `span` to `replacement`.
    pub fn did_you_mean(span: Span, replacement: &str) -> Self {
        Self::maybe_incorrect(
            format!("did you mean `{replacement}`?"),
            span,
            replacement,
        )
    }

    /// Create a suggestion to include the header that declares `name`.
    ///
    /// Text-only: where the `#include` belongs is a question for the fix-it
    /// tool, not for the lookup that noticed it was missing.
    pub fn include_header(name: &str, header: &str) -> Self {
        Self::text(
            format!(
                "`{name}` is defined in header `{header}`; did you forget to `#include {header}`?"
            ),
            0,
        )
    }

    /// Create a suggestion that might be incorrect.
    pub fn maybe_incorrect(
        message: impl Into<String>,
        span: Span,
        snippet: impl Into<String>,
    ) -> Self {
        Self::new(message, span, snippet, Applicability::MaybeIncorrect, 0)
    }

    pub fn is_text_only(&self) -> bool {
        self.substitutions.is_empty()
    }
}

/// The unresolved token's location, with a short message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
        }
    }
}

/// A diagnostic with the context needed to render it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Main error message.
    pub message: String,
    /// Labeled spans showing where the error occurred.
    pub labels: Vec<Label>,
    /// Structured suggestions, sorted by priority on insertion.
    pub suggestions: Vec<Suggestion>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a primary label at the error location.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(span, message));
        self
    }

    /// Add a structured suggestion, keeping the list ordered by priority.
    pub fn with_structured_suggestion(mut self, suggestion: Suggestion) -> Self {
        let at = self
            .suggestions
            .partition_point(|s| s.priority <= suggestion.priority);
        self.suggestions.insert(at, suggestion);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}

/// Create an "unknown identifier" diagnostic.
#[cold]
pub fn unknown_identifier(span: Span, name: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2003)
        .with_message(format!("use of undeclared identifier `{name}`"))
        .with_label(span, "not found in this scope")
}

/// Create an "unknown member" diagnostic for `scope::name`.
#[cold]
pub fn unknown_member(span: Span, scope: &str, name: &str) -> Diagnostic {
    let scope = if scope.is_empty() { "::" } else { scope };
    Diagnostic::error(ErrorCode::E2004)
        .with_message(format!("no member named `{name}` in `{scope}`"))
        .with_label(span, format!("not found in `{scope}`"))
}

/// Create an "unknown enumerator" diagnostic.
#[cold]
pub fn unknown_enumerator(span: Span, enumeration: &str, name: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2005)
        .with_message(format!("no enumerator named `{name}` in `{enumeration}`"))
        .with_label(span, format!("not an enumerator of `{enumeration}`"))
}
