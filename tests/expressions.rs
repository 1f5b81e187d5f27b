use rso_xi::structures::{expression::Expression, predicate::Predicate};

mod algebra {
    use super::*;

    #[test]
    fn atom_keys() {
        let x = Predicate::new("X").unwrap();

        let p = Expression::atom(x.clone(), true);
        let not_p = Expression::atom(x, false);

        assert_eq!(p.key(), "X");
        assert_eq!(not_p.key(), "-X");
        assert_ne!(p, not_p);
    }

    #[test]
    fn double_negation_atoms() {
        let x = Predicate::new("X").unwrap();
        let p = Expression::atom(x, true);

        assert_eq!(Expression::negate(&Expression::negate(&p)), p);
    }

    #[test]
    fn double_negation_compounds() {
        let x = Predicate::new("X").unwrap();
        let p = Expression::atom(x, true);
        let not_p = Expression::negate(&p);

        let conjunction = Expression::conjoin(&p, &not_p);
        let negation = Expression::negate(&conjunction);
        let round_trip = Expression::negate(&negation);

        assert_eq!(negation.key(), "(not (and -X X))");
        assert_eq!(round_trip.key(), conjunction.key());
    }

    #[test]
    fn commutative_keys() {
        let x = Predicate::new("X").unwrap();
        let p = Expression::atom(x, true);
        let not_p = Expression::negate(&p);

        assert_eq!(
            Expression::conjoin(&p, &not_p).key(),
            Expression::conjoin(&not_p, &p).key()
        );
        assert_eq!(
            Expression::disjoin(&p, &not_p).key(),
            Expression::disjoin(&not_p, &p).key()
        );
    }

    #[test]
    fn idempotent_collapse() {
        let x = Predicate::new("X").unwrap();
        let p = Expression::atom(x, true);

        assert_eq!(Expression::conjoin(&p, &p), p);
        assert_eq!(Expression::disjoin(&p, &p), p);
    }

    #[test]
    fn canonical_construction_is_stable() {
        let x = Predicate::new("X").unwrap();
        let p = Expression::atom(x, true);
        let not_p = Expression::negate(&p);

        // Rebuilding the same structure always reaches the same key.
        let once = Expression::disjoin(&Expression::conjoin(&p, &not_p), &p);
        let again = Expression::disjoin(&Expression::conjoin(&not_p, &p), &p);
        assert_eq!(once.key(), again.key());
    }

    #[test]
    fn rendering() {
        let x = Predicate::new("X").unwrap();
        let p = Expression::atom(x, true);
        let not_p = Expression::negate(&p);

        let conjunction = Expression::conjoin(&p, &not_p);
        assert_eq!(conjunction.to_string(), "(¬X ∧ X)");

        let negation = Expression::negate(&conjunction);
        assert_eq!(negation.to_string(), "¬(¬X ∧ X)");
    }
}
