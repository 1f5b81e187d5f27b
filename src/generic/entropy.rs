/*!
Shannon entropy over a discrete distribution.

Used by the [validator](crate::validation) to report the entropy of the base distribution of an attractor.
The measure is defined over probabilities, and outcomes with zero probability contribute nothing (the usual 0·log 0 = 0 convention).
*/

/// The Shannon entropy of a distribution, in bits.
///
/// The caller is responsible for `distribution` summing to one.
pub fn shannon_bits(distribution: &[f64]) -> f64 {
    distribution
        .iter()
        .filter(|probability| **probability > 0.0)
        .map(|probability| -(probability * probability.log2()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_pair() {
        assert_eq!(shannon_bits(&[0.5, 0.5]), 1.0);
    }

    #[test]
    fn certain_outcome() {
        assert_eq!(shannon_bits(&[1.0, 0.0]), 0.0);
    }

    #[test]
    fn uniform_quad() {
        assert_eq!(shannon_bits(&[0.25, 0.25, 0.25, 0.25]), 2.0);
    }

    #[test]
    fn empty() {
        assert_eq!(shannon_bits(&[]), 0.0);
    }
}
