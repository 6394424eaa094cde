//! Evaluation output types.
//!
//! Violations carry the observed and required values as data; turning them
//! into user-facing text is the caller's concern.

/// How the evaluator aggregates check outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationMode {
    /// Stop at the first violated rule (cheapest checks run first).
    FailFast,
    /// Run every check and return the full ordered violation list.
    CollectAll,
}

/// Discriminant of a [`Violation`], for callers that dispatch on the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    MinLength,
    MaxLength,
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
    Entropy,
    BruteForce,
    Dictionary,
    Identity,
    ExpansionLimit,
}

/// A violated rule with the observed and required values.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    TooShort { observed: usize, required: usize },
    TooLong { observed: usize, allowed: usize },
    Lowercase { observed: usize, required: usize },
    Uppercase { observed: usize, required: usize },
    Digits { observed: usize, required: usize },
    Symbols { observed: usize, required: usize },
    Entropy { observed_bits: f64, required_bits: f64 },
    BruteForce { observed_days: u64, required_days: u64 },
    /// A leet variant of the password is a known common password.
    Dictionary { variant: String },
    /// A leet variant of the password contains a caller-supplied
    /// identity token.
    Identity { token: String },
    /// Leet expansion hit its cap, so the membership checks are
    /// inconclusive; the password is conservatively treated as suspect.
    ExpansionLimit { cap: usize },
}

impl Violation {
    pub fn kind(&self) -> RuleKind {
        match self {
            Violation::TooShort { .. } => RuleKind::MinLength,
            Violation::TooLong { .. } => RuleKind::MaxLength,
            Violation::Lowercase { .. } => RuleKind::Lowercase,
            Violation::Uppercase { .. } => RuleKind::Uppercase,
            Violation::Digits { .. } => RuleKind::Digits,
            Violation::Symbols { .. } => RuleKind::Symbols,
            Violation::Entropy { .. } => RuleKind::Entropy,
            Violation::BruteForce { .. } => RuleKind::BruteForce,
            Violation::Dictionary { .. } => RuleKind::Dictionary,
            Violation::Identity { .. } => RuleKind::Identity,
            Violation::ExpansionLimit { .. } => RuleKind::ExpansionLimit,
        }
    }
}

/// Result of one evaluation call: the ordered violations, if any.
///
/// Owned by the caller; the engine keeps no state between calls.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EvaluationReport {
    pub violations: Vec<Violation>,
}

impl EvaluationReport {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// The kinds of the violated rules, in check order.
    pub fn kinds(&self) -> Vec<RuleKind> {
        self.violations.iter().map(Violation::kind).collect()
    }
}
