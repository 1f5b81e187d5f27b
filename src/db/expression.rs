/*!
A database of expressions, unique by canonical key, insertion order preserved.

The database is the working set of a closure expansion and, afterwards, the final set of an [attractor](crate::structures::attractor).
Insertion order is the reporting order, so iteration is deterministic for a deterministic sequence of insertions --- the key set exists only for membership queries.
*/

use std::{collections::HashSet, rc::Rc};

use crate::{
    misc::log::targets::{self},
    structures::expression::{Expression, Key},
};

/// The expression database.
#[derive(Clone, Debug, Default)]
pub struct ExpressionDB {
    /// Stored expressions, in insertion order.
    expressions: Vec<Rc<Expression>>,

    /// The canonical keys of stored expressions.
    keys: HashSet<Key>,
}

impl ExpressionDB {
    /// Stores an expression, unless its key is already present.
    /// Returns true on a fresh key.
    pub fn insert(&mut self, expression: Rc<Expression>) -> bool {
        if self.keys.contains(expression.key()) {
            return false;
        }

        log::trace!(target: targets::EXPRESSION, "fresh {}", expression.key());

        self.keys.insert(expression.key().clone());
        self.expressions.push(expression);
        true
    }

    /// Whether an expression with the given key is stored.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// A count of stored expressions.
    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    /// Whether the database is empty.
    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    /// Stored expressions, in insertion order.
    pub fn expressions(&self) -> impl Iterator<Item = &Rc<Expression>> {
        self.expressions.iter()
    }

    /// The keys of stored expressions, in insertion order.
    pub fn snapshot(&self) -> Vec<Key> {
        self.expressions
            .iter()
            .map(|expression| expression.key().clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::predicate::Predicate;

    #[test]
    fn dedup_and_order() {
        let mut db = ExpressionDB::default();

        let x = Predicate::new("x").unwrap();
        let p = Expression::atom(x.clone(), true);
        let not_p = Expression::atom(x, false);

        assert!(db.insert(p.clone()));
        assert!(db.insert(not_p));
        assert!(!db.insert(p));

        assert_eq!(db.len(), 2);
        assert_eq!(db.snapshot(), vec!["x".to_string(), "-x".to_string()]);
    }
}
