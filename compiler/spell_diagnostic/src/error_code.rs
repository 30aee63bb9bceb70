//! Error codes for name-resolution diagnostics.

use std::fmt;

/// Error codes for diagnostics that can carry a spelling suggestion.
///
/// Format: E2xxx, the name-resolution range.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unknown identifier
    E2003,
    /// Unknown member of an explicitly named scope
    E2004,
    /// Unknown enumerator of a scoped enumeration
    E2005,
}

impl ErrorCode {
    /// Get the error code as a string (e.g., "E2003").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
