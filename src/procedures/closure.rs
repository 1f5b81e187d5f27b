/*!
Builds the attractor of a seed predicate, generation by generation.

# Overview

Closure is iterative rather than recursive, so the depth bound is a loop bound and the size bound is checked at each insertion rather than after the fact.

1. Generation zero is the base set `{P, ¬P}`, in that insertion order.
2. Each step crosses every element of the current set with the base set under `conjoin` and `disjoin`, and negates every element.
   Every candidate is canonical by construction, and a candidate joins the set only if its key is fresh.
3. A snapshot of keys is taken after every step.
   A snapshot identical to its predecessor is a fixed point: the attractor has converged and the loop breaks early.
4. Otherwise the loop ends once `max_depth` steps have been taken.

Candidates are examined in a fixed order --- for each element: conjunction with *P*, disjunction with *P*, conjunction with *¬P*, disjunction with *¬P*, negation --- and elements are visited in insertion order, so the expansion is deterministic and reproducible down to the byte.

Roughly, the loop is:

```rust,ignore
'closure_loop: for _ in 0..self.config.max_depth {
    let fresh = self.expand_generation(&mut db, &base)?;
    generations.push(db.snapshot());

    if fresh == 0 {
        converged = true;
        break 'closure_loop;
    }
}
```

A step in which the set would grow past `max_set_size` aborts the build with a [SizeLimit](err::ClosureError::SizeLimit) error, and partial generations are discarded.
*/

use std::rc::Rc;

use crate::{
    context::{Context, Counters},
    db::expression::ExpressionDB,
    misc::log::targets::{self},
    structures::{attractor::Attractor, expression::Expression, predicate::Predicate},
    types::err::{self},
};

impl Context {
    /// The attractor of the given seed, under the bounds of the context's configuration.
    pub fn build_attractor(&mut self, seed: &Predicate) -> Result<Attractor, err::ErrorKind> {
        self.counters = Counters::default();
        let build_time = std::time::Instant::now();

        let p = Expression::atom(seed.clone(), true);
        let not_p = Expression::negate(&p);
        let base = [p, not_p];

        let mut db = ExpressionDB::default();
        for element in &base {
            db.insert(element.clone());
        }

        if db.len() > self.config.max_set_size {
            return Err(err::ClosureError::SizeLimit {
                seed: seed.name().to_string(),
                attempted: db.len(),
                bound: self.config.max_set_size,
            }
            .into());
        }

        let mut generations = vec![db.snapshot()];
        let mut converged = false;

        'closure_loop: for _ in 0..self.config.max_depth {
            self.counters.generations += 1;
            log::trace!(target: targets::CLOSURE,
                "generation {} from {} expressions",
                self.counters.generations,
                db.len()
            );

            let fresh = self.expand_generation(seed, &mut db, &base)?;
            generations.push(db.snapshot());

            if fresh == 0 {
                log::debug!(target: targets::CLOSURE,
                    "fixed point at generation {}",
                    self.counters.generations
                );
                converged = true;
                break 'closure_loop;
            }
        }

        self.counters.time = build_time.elapsed();

        Ok(Attractor::new(
            seed.clone(),
            self.config.max_depth,
            self.config.max_set_size,
            generations,
            db,
            converged,
        ))
    }

    /// One expansion step over `db`, returning a count of fresh expressions.
    fn expand_generation(
        &mut self,
        seed: &Predicate,
        db: &mut ExpressionDB,
        base: &[Rc<Expression>; 2],
    ) -> Result<usize, err::ErrorKind> {
        // The elements present when the step began, as the step extends the db.
        let current: Vec<Rc<Expression>> = db.expressions().cloned().collect();
        let mut fresh = 0;

        for element in &current {
            let mut candidates = Vec::with_capacity(2 * base.len() + 1);
            for basic in base {
                candidates.push(Expression::conjoin(element, basic));
                candidates.push(Expression::disjoin(element, basic));
            }
            candidates.push(Expression::negate(element));

            for candidate in candidates {
                self.counters.candidates += 1;

                if db.contains(candidate.key()) {
                    self.counters.duplicates += 1;
                    continue;
                }

                if db.len() + 1 > self.config.max_set_size {
                    return Err(err::ClosureError::SizeLimit {
                        seed: seed.name().to_string(),
                        attempted: db.len() + 1,
                        bound: self.config.max_set_size,
                    }
                    .into());
                }

                db.insert(candidate);
                fresh += 1;
            }
        }

        Ok(fresh)
    }
}
