/*!
A discrete oscillator which toggles between a predicate being active and its negation.

The oscillator is the companion dynamical object of an attractor: where the closure set captures a property as a structure of contradictions, the oscillator captures it as a sequence which never settles at a single truth value.

Iteration is a pure function of the initial value and the step count.
No state survives between calls, and a request for zero steps yields an empty sequence.
*/

use crate::misc::log::targets::{self};

/// A two-state oscillator, fixed by its initial value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Oscillator {
    /// The starting boolean state --- true for the predicate, false for its negation.
    initial: bool,
}

impl Oscillator {
    /// An oscillator starting from the given state.
    pub fn new(initial: bool) -> Self {
        Oscillator { initial }
    }

    /// The state at each of `steps` iterations, by strict alternation.
    ///
    /// The state at index *i* is the initial value if *i* is even, and its negation otherwise.
    pub fn iterate(&self, steps: usize) -> Vec<bool> {
        log::trace!(target: targets::OSCILLATOR, "{steps} steps from {}", self.initial);

        let mut history = Vec::with_capacity(steps);
        let mut current = self.initial;
        for _ in 0..steps {
            history.push(current);
            current = !current;
        }
        history
    }

    /// The nominal period of the oscillation.
    pub fn period(&self) -> usize {
        2
    }

    /// Whether the oscillation repeats with the nominal period over the given steps.
    ///
    /// Fewer than four steps are widened to four, as two full periods are required for the check to say anything.
    pub fn stable(&self, steps: usize) -> bool {
        let steps = steps.max(4);

        let sequence = self.iterate(steps);
        let period = self.period();

        (period..sequence.len()).all(|i| sequence[i] == sequence[i - period])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact() {
        let oscillator = Oscillator::new(true);
        assert_eq!(oscillator.iterate(5), vec![true, false, true, false, true]);
    }

    #[test]
    fn empty() {
        assert_eq!(Oscillator::new(false).iterate(0), Vec::<bool>::new());
    }

    #[test]
    fn parity() {
        let oscillator = Oscillator::new(false);
        for (i, state) in oscillator.iterate(64).iter().enumerate() {
            assert_eq!(*state, (i % 2) != 0);
        }
    }

    #[test]
    fn stability() {
        assert!(Oscillator::new(true).stable(10));
        // Widened to two full periods.
        assert!(Oscillator::new(true).stable(1));
    }
}
