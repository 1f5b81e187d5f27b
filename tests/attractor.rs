use rso_xi::{
    config::Config,
    context::Context,
    structures::{expression::Expression, predicate::Predicate},
    types::err::{ClosureError, ErrorKind},
};

mod closure {
    use super::*;

    #[test]
    fn base_generation() {
        let mut ctx = Context::from_config(Config {
            max_depth: 0,
            max_set_size: 100,
        });
        let seed = Predicate::new("X").unwrap();

        let attractor = ctx.build_attractor(&seed).unwrap();

        assert_eq!(attractor.generations().len(), 1);
        assert_eq!(
            attractor.generations()[0],
            vec!["X".to_string(), "-X".to_string()]
        );
        assert_eq!(attractor.len(), 2);
        assert!(!attractor.converged());
    }

    #[test]
    fn contradiction_membership() {
        let mut ctx = Context::from_config(Config {
            max_depth: 1,
            max_set_size: 100,
        });
        let seed = Predicate::new("X").unwrap();

        let attractor = ctx.build_attractor(&seed).unwrap();

        let p = Expression::atom(seed, true);
        let contradiction = Expression::conjoin(&p, &Expression::negate(&p));
        assert!(attractor.contains_key(contradiction.key()));
    }

    #[test]
    fn monotone_growth() {
        let mut ctx = Context::from_config(Config {
            max_depth: 3,
            max_set_size: 10_000,
        });
        let seed = Predicate::new("X").unwrap();

        let attractor = ctx.build_attractor(&seed).unwrap();
        let generations = attractor.generations();
        assert_eq!(generations.len(), 4);

        for step in 1..generations.len() {
            let earlier = &generations[step - 1];
            let later = &generations[step];

            assert!(earlier.len() <= later.len());
            // Insertion order is preserved, so each snapshot extends its predecessor.
            assert_eq!(*earlier, later[..earlier.len()]);
        }
    }

    #[test]
    fn bound_enforcement() {
        let mut ctx = Context::from_config(Config {
            max_depth: 50,
            max_set_size: 4,
        });
        let seed = Predicate::new("X").unwrap();

        match ctx.build_attractor(&seed) {
            Err(ErrorKind::Closure(ClosureError::SizeLimit {
                seed,
                attempted,
                bound,
            })) => {
                assert_eq!(seed, "X");
                assert_eq!(attempted, 5);
                assert_eq!(bound, 4);
            }
            other => panic!("expected a size limit error, got {other:?}"),
        }
    }

    #[test]
    fn counters() {
        let mut ctx = Context::from_config(Config::default());
        let seed = Predicate::new("X").unwrap();

        let attractor = ctx.build_attractor(&seed).unwrap();

        assert_eq!(attractor.len(), 14);
        assert_eq!(ctx.counters.generations, 2);
        assert_eq!(ctx.counters.candidates, 30);
        assert_eq!(ctx.counters.duplicates, 18);
        // Every candidate is either fresh or a duplicate of a set member.
        assert_eq!(
            attractor.len(),
            2 + ctx.counters.candidates - ctx.counters.duplicates
        );
    }
}

mod determinism {
    use super::*;

    fn snapshots(max_depth: usize) -> Vec<Vec<String>> {
        let mut ctx = Context::from_config(Config {
            max_depth,
            max_set_size: 10_000,
        });
        let seed = Predicate::new("X").unwrap();
        ctx.build_attractor(&seed).unwrap().generations().to_vec()
    }

    #[test]
    fn identical_runs() {
        assert_eq!(snapshots(3), snapshots(3));
    }

    #[test]
    fn depth_extension() {
        // A deeper build revisits the same generations before extending them.
        let shallow = snapshots(2);
        let deep = snapshots(3);

        assert_eq!(shallow[..], deep[..shallow.len()]);
    }

    #[test]
    fn across_threads() {
        crossbeam::thread::scope(|scope| {
            let first = scope.spawn(|_| snapshots(3));
            let second = scope.spawn(|_| snapshots(3));

            assert_eq!(first.join().unwrap(), second.join().unwrap());
        })
        .unwrap();
    }
}
