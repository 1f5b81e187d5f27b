/*!
Reports from validation.

A report is a structured record: the parameters which produced the checked artifact, the result of each check, and any [violations](Violation) found along the way.
A violation is a finding about the artifact, not a failure of the validator --- checks accumulate, and a report with no violations [passes](AttractorReport::passed).
*/

/// A report over an attractor.
#[derive(Clone, Debug)]
pub struct AttractorReport {
    /// The name of the seed predicate checked against.
    pub seed: String,

    /// The depth bound in force when the attractor was built.
    pub max_depth: usize,

    /// A count of expressions in the final set.
    pub expression_count: usize,

    /// Whether the contradiction `P ∧ ¬P` is a member of the final set.
    pub contradiction_present: bool,

    /// Whether the tautology `P ∨ ¬P` is a member of the final set.
    pub tautology_present: bool,

    /// Whether the seed predicate is a member of the final set.
    pub base_predicate_present: bool,

    /// Whether the negation of the seed predicate is a member of the final set.
    pub base_negation_present: bool,

    /// The engine's convergence flag, as recorded on the attractor.
    pub converged: bool,

    /// Whether convergence recomputed from the last two snapshots agrees with the engine's flag.
    pub converged_consistent: bool,

    /// The Shannon entropy, in bits, of the base distribution `{P, ¬P}`.
    pub entropy_bits: f64,

    /// Whether the defining inputs of the entropy measure are intact in every generation.
    pub entropy_conserved: bool,

    /// Violations found during validation.
    pub violations: Vec<Violation>,
}

impl AttractorReport {
    /// Whether no violations were found.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

impl std::fmt::Display for AttractorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at depth {}: {} expressions, {} violations",
            self.seed,
            self.max_depth,
            self.expression_count,
            self.violations.len()
        )
    }
}

/// A report over an oscillation sequence.
#[derive(Clone, Debug)]
pub struct OscillationReport {
    /// The minimal period of the sequence, when one exists.
    pub period: Option<usize>,

    /// The classification of the sequence.
    pub classification: Classification,

    /// Violations found during validation.
    pub violations: Vec<Violation>,
}

impl OscillationReport {
    /// Whether no violations were found.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// The classification of an oscillation sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Classification {
    /// The sequence repeats with the reported period.
    Periodic,

    /// The sequence is too short to classify.
    InsufficientData,

    /// No prefix of the sequence repeats.
    Aperiodic,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Periodic => write!(f, "periodic"),
            Self::InsufficientData => write!(f, "insufficient-data"),
            Self::Aperiodic => write!(f, "aperiodic"),
        }
    }
}

/// A violated invariant, recorded as a finding.
#[derive(Clone, Debug, PartialEq)]
pub enum Violation {
    /// The contradiction is absent from the final set of an attractor built to depth one or more.
    /// This signals a broken closure rule.
    ContradictionAbsent,

    /// The engine's convergence flag disagrees with convergence recomputed from snapshots.
    ConvergenceMismatch { flag: bool, recomputed: bool },

    /// A generation snapshot is missing a defining input of the entropy measure.
    EntropyDrift { generation: usize },

    /// A non-trivial oscillation sequence with a period other than two.
    PeriodNotTwo { found: usize },

    /// An oscillation sequence with no repeating prefix.
    Aperiodic,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContradictionAbsent => write!(f, "contradiction absent from the final set"),
            Self::ConvergenceMismatch { flag, recomputed } => {
                write!(f, "convergence flag {flag} against recomputed {recomputed}")
            }
            Self::EntropyDrift { generation } => {
                write!(f, "entropy inputs missing at generation {generation}")
            }
            Self::PeriodNotTwo { found } => write!(f, "period {found} where two was required"),
            Self::Aperiodic => write!(f, "no repeating prefix"),
        }
    }
}
