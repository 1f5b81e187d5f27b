/*!
Configuration of a context.

Both bounds are mandatory.
The expansion rule is combinatorial --- the size of a fresh generation is bounded by a multiple of the current set --- and so a context without bounds would be unsafe against pathological depth requests.
Defaults mirror the reference model: shallow depth, generous set size.
*/

/// The default depth bound.
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// The default set size bound.
pub const DEFAULT_MAX_SET_SIZE: usize = 10_000;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The number of expansion steps to take, at most.
    /// Generation zero is the base set, and does not count against the bound.
    pub max_depth: usize,

    /// The number of unique expressions an attractor may hold, at most.
    /// Expansion past this bound fails with a [SizeLimit](crate::types::err::ClosureError::SizeLimit) error rather than silently truncating.
    pub max_set_size: usize,
}

impl Default for Config {
    /// The default configuration is tuned to provide quick, deterministic, results.
    fn default() -> Self {
        Config {
            max_depth: DEFAULT_MAX_DEPTH,
            max_set_size: DEFAULT_MAX_SET_SIZE,
        }
    }
}
