/*!
Expressions, aka. canonical AND/OR/NOT compounds over predicates.

Every expression carries the canonical key by which equality, hashing, and deduplication happen.
Keys are computed once, at construction, and construction is only possible through the canonicalizing methods of this module --- so any expression in hand is in canonical form, and sharing an expression (via [Rc]) shares its key.

The key grammar:
- An asserted atom renders as its name, a negated atom as its name prefixed with `-`.
- Compounds render as `(and K K)`, `(or K K)`, and `(not K)`.

As names fit the identifier grammar the rendering is unambiguous, and as each node contributes a constant amount of text a key is linear in the size of its expression.

The canonicalization rules:
- Negating an atom flips its polarity.
- Double negation collapses: `negate(negate(e))` *is* `e`.
- The children of AND/OR are ordered by key, so `conjoin(a, b)` and `conjoin(b, a)` share a key.
- AND/OR over two identical children collapses to that child.

No further laws are applied.
In particular there is no collapse of `x ∧ ¬x` --- the contradiction is an element of interest, not a redundancy.

```rust
# use rso_xi::structures::expression::Expression;
# use rso_xi::structures::predicate::Predicate;
let x = Predicate::new("x").unwrap();

let p = Expression::atom(x.clone(), true);
let not_p = Expression::negate(&p);

assert_eq!(p.key(), "x");
assert_eq!(not_p.key(), "-x");
assert_eq!(Expression::negate(&not_p), p);

let a = Expression::conjoin(&p, &not_p);
let b = Expression::conjoin(&not_p, &p);
assert_eq!(a.key(), b.key());
assert_eq!(a.key(), "(and -x x)");
```
*/

use std::rc::Rc;

use crate::structures::predicate::Predicate;

/// The canonical key of an expression.
pub type Key = String;

/// An expression, as a node tagged with its canonical key.
///
/// Fields are private to keep construction canonical.
/// The node of an expression remains inspectable through [node](Expression::node).
#[derive(Clone, Debug)]
pub struct Expression {
    /// The canonical key of the expression.
    key: Key,

    /// The node of the expression.
    node: Node,
}

/// The node of an expression.
#[derive(Clone, Debug)]
pub enum Node {
    /// A predicate in asserted or negated polarity.
    Atom { predicate: Predicate, polarity: bool },

    /// The negation of a compound.
    ///
    /// Negation over atoms is folded into polarity, and negation over negations collapses, so the child here is always an AND or an OR.
    Not(Rc<Expression>),

    /// A conjunction, children ordered by key.
    And(Rc<Expression>, Rc<Expression>),

    /// A disjunction, children ordered by key.
    Or(Rc<Expression>, Rc<Expression>),
}

impl Expression {
    /// An atomic expression over the given predicate, in the given polarity.
    pub fn atom(predicate: Predicate, polarity: bool) -> Rc<Self> {
        let key = match polarity {
            true => predicate.name().to_string(),
            false => format!("-{}", predicate.name()),
        };

        Rc::new(Expression {
            key,
            node: Node::Atom {
                predicate,
                polarity,
            },
        })
    }

    /// The negation of an expression, in canonical form.
    pub fn negate(expression: &Rc<Self>) -> Rc<Self> {
        match &expression.node {
            Node::Atom {
                predicate,
                polarity,
            } => Self::atom(predicate.clone(), !*polarity),

            Node::Not(inner) => inner.clone(),

            Node::And(_, _) | Node::Or(_, _) => Rc::new(Expression {
                key: format!("(not {})", expression.key),
                node: Node::Not(expression.clone()),
            }),
        }
    }

    /// The conjunction of two expressions, in canonical form.
    pub fn conjoin(a: &Rc<Self>, b: &Rc<Self>) -> Rc<Self> {
        if a.key == b.key {
            return a.clone();
        }

        let (first, second) = if a.key <= b.key { (a, b) } else { (b, a) };

        Rc::new(Expression {
            key: format!("(and {} {})", first.key, second.key),
            node: Node::And(first.clone(), second.clone()),
        })
    }

    /// The disjunction of two expressions, in canonical form.
    pub fn disjoin(a: &Rc<Self>, b: &Rc<Self>) -> Rc<Self> {
        if a.key == b.key {
            return a.clone();
        }

        let (first, second) = if a.key <= b.key { (a, b) } else { (b, a) };

        Rc::new(Expression {
            key: format!("(or {} {})", first.key, second.key),
            node: Node::Or(first.clone(), second.clone()),
        })
    }

    /// The canonical key of the expression.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// The node of the expression.
    pub fn node(&self) -> &Node {
        &self.node
    }
}

// Equality, order, and hashing all go through the key.

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Expression {}

impl std::hash::Hash for Expression {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for Expression {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Expression {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.node {
            Node::Atom {
                predicate,
                polarity: true,
            } => write!(f, "{predicate}"),

            Node::Atom {
                predicate,
                polarity: false,
            } => write!(f, "¬{predicate}"),

            Node::Not(e) => write!(f, "¬{e}"),

            Node::And(a, b) => write!(f, "({a} ∧ {b})"),

            Node::Or(a, b) => write!(f, "({a} ∨ {b})"),
        }
    }
}
