//! Diagnostic values for unresolved-name errors.
//!
//! A `Diagnostic` is built by the analyzer when a lookup fails; a spelling
//! hint, if one exists, is turned into a `Suggestion` and attached to it.
//! Printing is left to whichever emitter the embedding compiler uses.

mod diagnostic;
mod error_code;

pub use diagnostic::{
    unknown_enumerator, unknown_identifier, unknown_member, Applicability, Diagnostic, Label,
    Substitution, Suggestion,
};
pub use error_code::ErrorCode;
