/*!
The context --- within which attractors are built.

A context pairs a [configuration](crate::config) with [counters](Counters) from the most recent build.
Each call to [build_attractor](crate::context::Context::build_attractor) owns its own generation history, so a context may be reused across seeds, and two contexts with the same configuration produce byte-identical results for the same seed.

# Example
```rust
# use rso_xi::config::Config;
# use rso_xi::context::Context;
# use rso_xi::structures::predicate::Predicate;
let mut the_context = Context::from_config(Config::default());

let seed = Predicate::new("X").unwrap();
let attractor = the_context.build_attractor(&seed).unwrap();

assert_eq!(attractor.generations().len(), 1 + the_context.counters.generations);
```
*/

mod counters;
pub use counters::Counters;

use crate::config::Config;

/// The context, to which closure requests are made.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters from the most recent build.
    pub counters: Counters,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            counters: Counters::default(),
        }
    }
}
