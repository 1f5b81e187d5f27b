//! A library for constructing and validating finite Ξ attractors.
//!
//! A Ξ attractor is the closure of a predicate *P* and its negation *¬P* under conjunction, disjunction, and negation, taken up to a depth bound and deduplicated by a canonical form.
//! The attractor is a minimal model of a property which never settles at a single truth value, and the library exists to build such models and to check their structural invariants.
//!
//! Some guiding principles of the library:
//! - Determinism. Identical inputs produce byte-identical generation orderings, and this is treated as part of the public contract rather than an accident of implementation.
//! - Explicit bounds. Closure expansion is combinatorial, so a depth bound and a set size bound are mandatory parts of a [configuration](crate::config) --- there is no unbounded construction.
//! - Diagnosis over failure. Violated invariants of a *finished* attractor are findings, recorded in a [report](crate::reports), while only malformed input is an [error](crate::types::err).
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context).
//!
//! Contexts are built from a configuration, and closure takes place within a context.
//! At a high level:
//! - A [predicate](crate::structures::predicate) names the seed proposition, with validation at construction.
//! - The [expression algebra](crate::structures::expression) builds canonical AND/OR/NOT compounds, each carrying the key used for equality and deduplication.
//! - The [closure procedure](crate::procedures::closure) expands generation by generation into an [expression database](crate::db::expression), stopping at a fixed point or at the depth bound, and failing if the size bound would be exceeded.
//! - The [validator](crate::validation) inspects a finished [attractor](crate::structures::attractor), and, independently, an [oscillator](crate::structures::oscillator) sequence.
//!
//! # Examples
//!
//! + Build an attractor and confirm the contradiction is a member of the closure.
//!
//! ```rust
//! # use rso_xi::config::Config;
//! # use rso_xi::context::Context;
//! # use rso_xi::structures::expression::Expression;
//! # use rso_xi::structures::predicate::Predicate;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let seed = Predicate::new("X").unwrap();
//! let attractor = the_context.build_attractor(&seed).unwrap();
//!
//! let p = Expression::atom(seed.clone(), true);
//! let contradiction = Expression::conjoin(&p, &Expression::negate(&p));
//!
//! assert!(attractor.contains_key(contradiction.key()));
//! assert!(!attractor.converged());
//! ```
//!
//! + Validate an oscillation sequence.
//!
//! ```rust
//! # use rso_xi::structures::oscillator::Oscillator;
//! # use rso_xi::validation;
//! let oscillator = Oscillator::new(false);
//! let report = validation::validate_oscillation(&oscillator.iterate(6));
//!
//! assert_eq!(report.period, Some(2));
//! assert!(report.passed());
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made at generation boundaries, on the insertion of fresh expressions, and during validation, with a variety of targets defined to narrow output to the relevant parts of the library.
//! The targets are listed in [misc::log].
//! No log implementation is provided.

pub mod config;
pub mod context;
pub mod procedures;

pub mod structures;
pub mod types;

pub mod db;

pub mod reports;
pub mod validation;

pub mod generic;
pub mod misc;
