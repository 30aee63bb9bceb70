//! The result of a suggestion lookup.

use spell_ir::{Name, Span};

use crate::Provenance;

/// A chosen correction.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Suggested {
    /// The suggested name, unqualified.
    pub name: Name,
    pub provenance: Provenance,
    /// Location of the misspelled token, passed through from the caller.
    pub span: Span,
    /// Edit distance from the misspelled name; 0 for header hints.
    pub distance: usize,
}

/// Either nothing to suggest, or exactly one suggestion.
///
/// "No suggestion" is an ordinary outcome, not an error. A hint holds no
/// text: rendering happens only if the diagnostic is actually printed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Hint {
    #[default]
    None,
    Suggest(Suggested),
}

impl Hint {
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Hint::None)
    }

    #[inline]
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    pub fn suggested(&self) -> Option<&Suggested> {
        match self {
            Hint::Suggest(suggested) => Some(suggested),
            Hint::None => None,
        }
    }

    pub fn name(&self) -> Option<Name> {
        self.suggested().map(|s| s.name)
    }

    pub fn provenance(&self) -> Option<Provenance> {
        self.suggested().map(|s| s.provenance)
    }

    pub fn span(&self) -> Option<Span> {
        self.suggested().map(|s| s.span)
    }

    /// Header to include, for missing-header hints.
    pub fn header(&self) -> Option<Name> {
        match self.provenance()? {
            Provenance::MissingHeader { header } => Some(header),
            _ => None,
        }
    }

    /// This hint if it has a suggestion, otherwise the result of `f`.
    #[must_use]
    pub fn or_else(self, f: impl FnOnce() -> Hint) -> Hint {
        match self {
            Hint::None => f(),
            suggest @ Hint::Suggest(_) => suggest,
        }
    }
}

impl From<Option<Suggested>> for Hint {
    fn from(suggested: Option<Suggested>) -> Self {
        suggested.map_or(Hint::None, Hint::Suggest)
    }
}
