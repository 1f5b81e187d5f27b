/*!
An attractor --- the closure set reachable from a seed predicate within a depth bound.

An attractor records:
- The seed predicate, and the bounds in force when it was built.
- A snapshot of canonical keys per generation, where generation zero is the base set `{P, ¬P}` and each later generation is the full set after one expansion step.
- The final set of expressions, in insertion order.
- Whether expansion reached a fixed point before the depth bound.

Generations are monotone: generation *n + 1* is a superset of generation *n*, and when `converged` holds the last two snapshots are identical.
An attractor is immutable once built.
*/

use std::rc::Rc;

use crate::{
    db::expression::ExpressionDB,
    structures::{
        expression::{Expression, Key},
        predicate::Predicate,
    },
};

/// A finished closure set, with its generation history.
#[derive(Clone, Debug)]
pub struct Attractor {
    /// The seed predicate.
    seed: Predicate,

    /// The depth bound in force during the build.
    max_depth: usize,

    /// The set size bound in force during the build.
    max_set_size: usize,

    /// Per-generation snapshots of canonical keys.
    generations: Vec<Vec<Key>>,

    /// The final set.
    db: ExpressionDB,

    /// Whether a fixed point was reached before the depth bound.
    converged: bool,
}

impl Attractor {
    pub(crate) fn new(
        seed: Predicate,
        max_depth: usize,
        max_set_size: usize,
        generations: Vec<Vec<Key>>,
        db: ExpressionDB,
        converged: bool,
    ) -> Self {
        Attractor {
            seed,
            max_depth,
            max_set_size,
            generations,
            db,
            converged,
        }
    }

    /// The seed predicate of the attractor.
    pub fn seed(&self) -> &Predicate {
        &self.seed
    }

    /// The depth bound in force during the build.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The set size bound in force during the build.
    pub fn max_set_size(&self) -> usize {
        self.max_set_size
    }

    /// Per-generation snapshots of canonical keys.
    /// The snapshot at index zero is the base set.
    pub fn generations(&self) -> &[Vec<Key>] {
        &self.generations
    }

    /// Whether a fixed point was reached before the depth bound.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Expressions of the final set, in insertion order.
    pub fn expressions(&self) -> impl Iterator<Item = &Rc<Expression>> {
        self.db.expressions()
    }

    /// The keys of the final set, in insertion order.
    pub fn final_keys(&self) -> Vec<Key> {
        self.db.snapshot()
    }

    /// Whether an expression with the given key is in the final set.
    pub fn contains_key(&self, key: &str) -> bool {
        self.db.contains(key)
    }

    /// A count of expressions in the final set.
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// Whether the final set is empty (never, for a built attractor).
    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }
}
