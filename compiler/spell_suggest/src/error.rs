//! Precondition violations at the suggester's call boundary.

use crate::ScopeId;

/// A strategy was called with a context it cannot work with.
///
/// These indicate a bug in the caller. An unresolved name with nothing
/// similar in sight is not an error; it is `Ok(Hint::None)`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum SuggestError {
    #[error("scope {} does not belong to the scope graph", .0.raw())]
    UnknownScope(ScopeId),
    #[error("scope {} is not a scoped enumeration", .0.raw())]
    NotAScopedEnum(ScopeId),
}
