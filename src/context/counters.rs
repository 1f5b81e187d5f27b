use std::time::Duration;

/// Counts for various things which count, roughly.
///
/// Reset at the start of each build.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of expansion steps taken.
    pub generations: usize,

    /// A count of candidate expressions examined.
    pub candidates: usize,

    /// A count of candidates skipped as their key was already present.
    pub duplicates: usize,

    /// The time taken by the build.
    pub time: Duration,
}
