/*!
Validation of attractors and oscillation sequences.

The validator's job is diagnosis: every check runs, results accumulate in a [report](crate::reports), and a violated invariant is a finding about the input rather than an error of the validator.

Checks over an attractor:
- Contradiction presence: the key of `P ∧ ¬P` is a member of the final set.
  Absence from an attractor built to depth one or more signals a broken closure rule.
- Convergence consistency: the engine's flag is cross-checked against convergence recomputed from the last two stored snapshots.
- Entropy conservation: the base set `{P, ¬P}` is a uniform two-outcome distribution, and its [Shannon entropy](crate::generic::entropy) is reported in bits.
  The measure is defined over the base distribution, not over the growing set, so conservation amounts to the defining inputs --- both base keys --- being intact in every generation snapshot.
- Presence of the tautology `P ∨ ¬P`, the seed, and the seed's negation in the final set.

Checks over an oscillation sequence:
- Periodicity: the minimal period of the sequence, which must be two for any non-trivial sequence.
  Sequences shorter than two states are classified as insufficient data, with no violation.
*/

use crate::{
    generic::entropy,
    misc::log::targets::{self},
    reports::{AttractorReport, Classification, OscillationReport, Violation},
    structures::{attractor::Attractor, expression::Expression, predicate::Predicate},
};

/// A report over the given attractor, checked against the given seed.
///
/// The seed is passed independently of the attractor's record of it, so a mismatch surfaces as failed membership checks.
pub fn validate(attractor: &Attractor, seed: &Predicate) -> AttractorReport {
    let p = Expression::atom(seed.clone(), true);
    let not_p = Expression::negate(&p);
    let contradiction = Expression::conjoin(&p, &not_p);
    let tautology = Expression::disjoin(&p, &not_p);

    let contradiction_present = attractor.contains_key(contradiction.key());
    let tautology_present = attractor.contains_key(tautology.key());
    let base_predicate_present = attractor.contains_key(p.key());
    let base_negation_present = attractor.contains_key(not_p.key());

    let generations = attractor.generations();

    let recomputed = match generations.len() {
        0 | 1 => false,
        length => generations[length - 1] == generations[length - 2],
    };
    let converged_consistent = recomputed == attractor.converged();

    let entropy_bits = entropy::shannon_bits(&[0.5, 0.5]);
    let mut entropy_drift = None;
    for (generation, snapshot) in generations.iter().enumerate() {
        if !(snapshot.contains(p.key()) && snapshot.contains(not_p.key())) {
            entropy_drift = Some(generation);
            break;
        }
    }

    let mut violations = Vec::new();

    if !contradiction_present && attractor.max_depth() >= 1 {
        violations.push(Violation::ContradictionAbsent);
    }

    if !converged_consistent {
        violations.push(Violation::ConvergenceMismatch {
            flag: attractor.converged(),
            recomputed,
        });
    }

    if let Some(generation) = entropy_drift {
        violations.push(Violation::EntropyDrift { generation });
    }

    log::debug!(target: targets::VALIDATION,
        "{} expressions checked against {}, {} violations",
        attractor.len(),
        seed.name(),
        violations.len()
    );

    AttractorReport {
        seed: seed.name().to_string(),
        max_depth: attractor.max_depth(),
        expression_count: attractor.len(),
        contradiction_present,
        tautology_present,
        base_predicate_present,
        base_negation_present,
        converged: attractor.converged(),
        converged_consistent,
        entropy_bits,
        entropy_conserved: entropy_drift.is_none(),
        violations,
    }
}

/// A periodicity report over the given sequence of states.
pub fn validate_oscillation(sequence: &[bool]) -> OscillationReport {
    if sequence.len() < 2 {
        return OscillationReport {
            period: None,
            classification: Classification::InsufficientData,
            violations: Vec::new(),
        };
    }

    // A candidate equal to the length has an empty check window, and so is
    // admitted only at length two, where it is the nominal period of an
    // alternating pair.
    let limit = match sequence.len() {
        2 => 2,
        length => length - 1,
    };

    let period = (1..=limit).find(|candidate| {
        let candidate = *candidate;
        (candidate..sequence.len()).all(|i| sequence[i] == sequence[i - candidate])
    });

    match period {
        Some(found) => {
            let mut violations = Vec::new();
            if found != 2 {
                violations.push(Violation::PeriodNotTwo { found });
            }

            OscillationReport {
                period: Some(found),
                classification: Classification::Periodic,
                violations,
            }
        }

        None => OscillationReport {
            period: None,
            classification: Classification::Aperiodic,
            violations: vec![Violation::Aperiodic],
        },
    }
}
