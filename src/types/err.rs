//! Error types used in the library.
//!
//! - All of these concern malformed input or exhausted resource bounds, and are surfaced at the boundary of the relevant operation.
//! - Violated invariants of a finished attractor are *not* errors --- they are recorded as [violations](crate::reports::Violation) in a report, as diagnosis is the point of validation.
//!
//! Names of the error enums overlap with corresponding structures, and so throughout the library `err::{self}` is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Predicate(PredicateError),
    Closure(ClosureError),
}

/// Noted errors when constructing a predicate.
///
/// These are found at construction time, before any closure work begins.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PredicateError {
    /// An empty string, where some non-empty name was required.
    Empty,

    /// The name does not fit the identifier grammar.
    NotIdentifier,

    /// The name is reserved by the canonical key grammar.
    Reserved,
}

impl From<PredicateError> for ErrorKind {
    fn from(e: PredicateError) -> Self {
        ErrorKind::Predicate(e)
    }
}

/// Noted errors during closure expansion.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ClosureError {
    /// Expansion would push the set past the configured size bound.
    ///
    /// Carries the seed, the size the set would have reached, and the bound, so the failure can be reproduced.
    /// Partial generations are discarded --- there is no partial-success return.
    SizeLimit {
        seed: String,
        attempted: usize,
        bound: usize,
    },
}

impl From<ClosureError> for ErrorKind {
    fn from(e: ClosureError) -> Self {
        ErrorKind::Closure(e)
    }
}
