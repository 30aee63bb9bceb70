//! The unresolved token a lookup failed on.

use crate::{Name, Span};

/// A name the analyzer could not resolve, captured at the point of failure.
///
/// Immutable once built; the suggestion core reads `name` and hands `span`
/// back unexamined on the resulting hint.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MisspelledName {
    pub name: Name,
    pub span: Span,
}

impl MisspelledName {
    #[inline]
    pub const fn new(name: Name, span: Span) -> Self {
        MisspelledName { name, span }
    }
}

#[cfg(test)]
mod tests;
