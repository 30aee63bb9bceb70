//! Spell IR - shared identifier and location types.
//!
//! This crate holds the small set of value types every suggestion crate
//! agrees on:
//! - `Name` for interned identifiers
//! - `StringInterner` for turning text into `Name` and back
//! - `Span` for source locations
//! - `MisspelledName` for the unresolved token a lookup failed on
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifier text becomes `Name(u32)`, so duplicate
//!   suppression and exact-match lookups are integer comparisons.
//! - **Opaque Positions**: a `Span` is carried through the suggestion core
//!   untouched and only interpreted by the diagnostic pipeline.

mod interner;
mod misspelled;
mod name;
mod span;

pub use interner::{InternError, SharedInterner, StringInterner};
pub use misspelled::MisspelledName;
pub use name::Name;
pub use span::Span;
