/*!
Predicates, aka. the atomic named propositions.

Broadly, predicates are things with a name to which assigning a (boolean) value is of interest.
A predicate appears in an expression in either asserted or negated polarity, and the negation is always a distinct structure --- a predicate is never mutated.

A name is a string of the identifier grammar: the first character alphabetic or an underscore, every further character alphanumeric or an underscore.
Examples: `p`, `atom_one`, `_x`.

In addition, a handful of names are reserved as they collide with tokens of the [canonical key](crate::structures::expression) grammar.

Validation happens at construction, so any predicate in hand is well-formed and any closure request with a bad name fails before generation work begins.
*/

use crate::types::err::{self};

/// Names which collide with tokens of the canonical key grammar.
const RESERVED: [&str; 5] = ["and", "or", "not", "true", "false"];

/// An atomic named proposition.
///
/// Two predicates with equal names are interchangeable.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Predicate {
    name: String,
}

impl Predicate {
    /// A predicate with the given name, if the name fits the identifier grammar.
    pub fn new(name: impl Into<String>) -> Result<Self, err::PredicateError> {
        let name = name.into();

        let mut characters = name.chars();
        match characters.next() {
            None => return Err(err::PredicateError::Empty),

            Some(first) => {
                if !(first.is_alphabetic() || first == '_') {
                    return Err(err::PredicateError::NotIdentifier);
                }
            }
        }

        if !characters.all(|character| character.is_alphanumeric() || character == '_') {
            return Err(err::PredicateError::NotIdentifier);
        }

        if RESERVED.contains(&name.as_str()) {
            return Err(err::PredicateError::Reserved);
        }

        Ok(Predicate { name })
    }

    /// The name of the predicate.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert!(Predicate::new("X").is_ok());
        assert!(Predicate::new("_x1").is_ok());

        assert_eq!(Predicate::new(""), Err(err::PredicateError::Empty));
        assert_eq!(Predicate::new("9x"), Err(err::PredicateError::NotIdentifier));
        assert_eq!(Predicate::new("p q"), Err(err::PredicateError::NotIdentifier));
        assert_eq!(Predicate::new("-p"), Err(err::PredicateError::NotIdentifier));
        assert_eq!(Predicate::new("and"), Err(err::PredicateError::Reserved));
    }

    #[test]
    fn name_equality() {
        let a = Predicate::new("same").unwrap();
        let b = Predicate::new("same").unwrap();
        assert_eq!(a, b);
    }
}
