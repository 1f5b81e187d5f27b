//! Structures, abstract and concrete, of the library.
//!
//! - [predicate]s are the atomic named propositions an attractor is seeded from.
//! - [expression]s are canonical AND/OR/NOT compounds over predicates.
//! - An [attractor] is a finished closure set, with its generation history.
//! - An [oscillator] is the companion two-state dynamical object.

pub mod attractor;
pub mod expression;
pub mod oscillator;
pub mod predicate;
